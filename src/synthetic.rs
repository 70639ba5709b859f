//! Synthetic data source for demonstrations.
//!
//! Points are scattered around an origin at a Gaussian radial distance and a
//! uniform angle, which gives round blobs with a dense core.

use crate::point::Point;
use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError, Uniform};
use std::f64::consts::PI;

/// Standard deviation of the radial distance used by the demo
pub const DEFAULT_STD_DEV: f64 = 2.0;

/// Draw `num_points` points around `origin`.
///
/// Each point sits at distance `d ~ Normal(0, std_dev)` along an angle
/// `θ ~ Uniform[-π, π]`. A negative `d` simply flips the direction.
pub fn generate_cluster<R: Rng + ?Sized>(
    origin: Point,
    num_points: usize,
    std_dev: f64,
    rng: &mut R,
) -> Result<Vec<Point>, NormalError> {
    let radial = Normal::new(0.0, std_dev)?;
    let angle = Uniform::new_inclusive(-PI, PI);

    Ok((0..num_points)
        .map(|_| {
            let dist = radial.sample(rng);
            let theta = angle.sample(rng);
            Point::new(origin.x + dist * theta.cos(), origin.y + dist * theta.sin())
        })
        .collect())
}

/// Concatenate one generated cluster per origin, in origin order.
pub fn generate_dataset<R: Rng + ?Sized>(
    origins: &[Point],
    points_per_cluster: usize,
    std_dev: f64,
    rng: &mut R,
) -> Result<Vec<Point>, NormalError> {
    let mut data = Vec::with_capacity(origins.len() * points_per_cluster);
    for origin in origins {
        data.extend(generate_cluster(*origin, points_per_cluster, std_dev, rng)?);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::centroid_of;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_cluster_centred_on_origin() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let origin = Point::new(5.0, 4.0);

        let pts = generate_cluster(origin, 5_000, DEFAULT_STD_DEV, &mut rng).unwrap();
        let mean = centroid_of(&pts).unwrap();

        assert_eq!(pts.len(), 5_000);
        assert!((mean.x - origin.x).abs() < 0.15, "mean x {}", mean.x);
        assert!((mean.y - origin.y).abs() < 0.15, "mean y {}", mean.y);
    }

    #[test]
    fn test_zero_std_dev_collapses_to_origin() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let origin = Point::new(-1.0, 2.5);

        let pts = generate_cluster(origin, 10, 0.0, &mut rng).unwrap();
        assert!(pts.iter().all(|p| *p == origin));
    }

    #[test]
    fn test_negative_std_dev_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(generate_cluster(Point::default(), 10, -1.0, &mut rng).is_err());
    }

    #[test]
    fn test_generate_dataset_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let origins = [Point::new(0.0, 0.0), Point::new(100.0, 100.0)];

        let data = generate_dataset(&origins, 20, 1.0, &mut rng).unwrap();

        assert_eq!(data.len(), 40);
        assert!(data[..20].iter().all(|p| p.x < 50.0));
        assert!(data[20..].iter().all(|p| p.x > 50.0));
    }
}
