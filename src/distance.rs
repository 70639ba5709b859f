use crate::error::KMeansError;
use crate::point::Point;

/// Squared Euclidean distance between two points.
///
/// No square root is taken: only the relative order of distances matters.
#[inline]
pub fn squared_distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Arithmetic mean of a non-empty sequence of points.
///
/// Returns [`KMeansError::EmptyPointSet`] for an empty slice; the clustering
/// loop maps that to [`KMeansError::EmptyCluster`] with the offending index.
pub fn centroid_of(points: &[Point]) -> Result<Point, KMeansError> {
    if points.is_empty() {
        return Err(KMeansError::EmptyPointSet);
    }

    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0f64, 0.0f64), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;

    Ok(Point::new(sum_x / n, sum_y / n))
}

/// Find the nearest centroid to `point`
///
/// Ties go to the lowest index. Returns `(index, squared_distance)`, or `None`
/// if `centroids` is empty.
#[inline]
pub fn nearest_centroid(point: &Point, centroids: &[Point]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (j, c) in centroids.iter().enumerate() {
        let dist = squared_distance(point, c);
        match best {
            // strict < keeps the first minimum
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((j, dist)),
        }
    }

    best
}

/// Minimum squared distance from `point` to any of `seeds`.
///
/// Points coincident with a seed get 0. Returns `f64::INFINITY` for no seeds.
#[inline]
pub fn min_squared_distance(point: &Point, seeds: &[Point]) -> f64 {
    seeds
        .iter()
        .map(|s| squared_distance(point, s))
        .fold(f64::INFINITY, f64::min)
}

/// Total within-cluster squared distance (inertia).
///
/// `clusters[i]` is measured against `centroids[i]`; extra entries on either
/// side are ignored.
pub fn inertia(centroids: &[Point], clusters: &[Vec<Point>]) -> f64 {
    centroids
        .iter()
        .zip(clusters)
        .map(|(c, members)| {
            members
                .iter()
                .map(|p| squared_distance(p, c))
                .sum::<f64>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_squared_distance() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);

        assert_relative_eq!(squared_distance(&a, &b), 25.0, epsilon = 1e-12);
        assert_relative_eq!(squared_distance(&b, &a), 25.0, epsilon = 1e-12);
        assert_eq!(squared_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_centroid_of() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let c = centroid_of(&pts).unwrap();

        assert_relative_eq!(c.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid_of_counts_duplicates() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(3.0, 3.0),
        ];
        let c = centroid_of(&pts).unwrap();

        assert_relative_eq!(c.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid_of_empty() {
        assert_eq!(centroid_of(&[]), Err(KMeansError::EmptyPointSet));
    }

    #[test]
    fn test_nearest_centroid() {
        let centroids = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];

        assert_eq!(nearest_centroid(&Point::new(1.0, 1.0), &centroids).unwrap().0, 0);
        assert_eq!(nearest_centroid(&Point::new(9.0, 9.0), &centroids).unwrap().0, 1);
        // (5,5) is equidistant, the first one wins
        assert_eq!(nearest_centroid(&Point::new(5.0, 5.0), &centroids).unwrap().0, 0);
        assert!(nearest_centroid(&Point::new(5.0, 5.0), &[]).is_none());
    }

    #[test]
    fn test_min_squared_distance() {
        let seeds = [Point::new(0.0, 0.0), Point::new(3.0, 0.0)];

        assert_relative_eq!(min_squared_distance(&Point::new(2.0, 0.0), &seeds), 1.0);
        assert_eq!(min_squared_distance(&Point::new(3.0, 0.0), &seeds), 0.0);
    }

    #[test]
    fn test_inertia() {
        let centroids = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let clusters = vec![
            vec![Point::new(1.0, 0.0), Point::new(-1.0, 0.0)],
            vec![Point::new(10.0, 2.0)],
        ];

        assert_relative_eq!(inertia(&centroids, &clusters), 6.0, epsilon = 1e-12);
    }
}
