use crate::error::KMeansError;
use ndarray::{Array2, ArrayView2};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A point in the plane.
///
/// Equality, hashing and ordering are lexicographic over `(x, y)` using
/// [`OrderedFloat`] semantics: `NaN` sorts above every number and `-0.0`
/// equals `0.0`. The ordering decides centroid order in every
/// [`ClusteringState`](crate::ClusteringState), so it must stay total.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.x), OrderedFloat(self.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// Count the distinct point values in `points`.
pub fn count_distinct(points: &[Point]) -> usize {
    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.len()
}

/// Read an `(n, 2)` array into points, one row per point.
pub fn points_from_array(data: &ArrayView2<f64>) -> Result<Vec<Point>, KMeansError> {
    if data.ncols() != 2 {
        return Err(KMeansError::InvalidDimensions(format!(
            "Expected 2 columns, got {}",
            data.ncols()
        )));
    }

    Ok(data
        .outer_iter()
        .map(|row| Point::new(row[0], row[1]))
        .collect())
}

/// Write points into an `(n, 2)` array, one row per point.
pub fn points_to_array(points: &[Point]) -> Array2<f64> {
    let mut out = Array2::zeros((points.len(), 2));
    for (i, p) in points.iter().enumerate() {
        out[[i, 0]] = p.x;
        out[[i, 1]] = p.y;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_lexicographic_order() {
        let mut pts = vec![
            Point::new(1.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(0.0, -1.0),
            Point::new(1.0, -3.0),
        ];
        pts.sort();
        assert_eq!(
            pts,
            vec![
                Point::new(0.0, -1.0),
                Point::new(0.0, 5.0),
                Point::new(1.0, -3.0),
                Point::new(1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_signed_zero_is_equal() {
        assert_eq!(Point::new(0.0, -0.0), Point::new(-0.0, 0.0));
    }

    #[test]
    fn test_count_distinct_keeps_duplicates_out() {
        let pts = [
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
        ];
        assert_eq!(count_distinct(&pts), 2);
        assert_eq!(count_distinct(&[]), 0);
    }

    #[test]
    fn test_array_conversion() {
        let data = array![[0.0, 1.0], [2.0, 3.0]];
        let pts = points_from_array(&data.view()).unwrap();
        assert_eq!(pts, vec![Point::new(0.0, 1.0), Point::new(2.0, 3.0)]);
        assert_eq!(points_to_array(&pts), data);
    }

    #[test]
    fn test_array_wrong_width() {
        let data = array![[0.0, 1.0, 2.0]];
        let result = points_from_array(&data.view());
        assert!(matches!(result, Err(KMeansError::InvalidDimensions(_))));
    }
}
