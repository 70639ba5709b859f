//! # planar-kmeans
//!
//! Lloyd's k-means over 2-D point sets, seeded with k-means++.
//!
//! ## Features
//!
//! - **k-means++ seeding**: initial centroids are drawn with probability
//!   proportional to their squared distance from the seeds already chosen
//! - **Deterministic given a seed**: randomness is injected as any
//!   [`rand::Rng`]; the [`PlanarKMeans`] estimator owns a seeded `ChaCha8Rng`
//! - **Stable cluster order**: centroids are kept sorted lexicographically,
//!   so cluster indices do not depend on the order seeds were drawn in
//! - **Exact fixed point**: iterates until the centroids (or the partition)
//!   stop changing, with an optional iteration cap
//!
//! ## Example
//!
//! ```rust
//! use planar_kmeans::{run, Point};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let data: Vec<Point> = [
//!     (0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0),
//!     (10.0, 10.0), (10.0, 11.0), (11.0, 10.0), (11.0, 11.0),
//! ]
//! .into_iter()
//! .map(Point::from)
//! .collect();
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let state = run(&data, 2, &mut rng).unwrap();
//!
//! assert_eq!(state.centroids(), &[Point::new(0.5, 0.5), Point::new(10.5, 10.5)]);
//! assert_eq!(state.clusters()[0].len(), 4);
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use planar_kmeans::{ConvergenceCheck, KMeansConfig, PlanarKMeans, Point};
//!
//! let data: Vec<Point> = (0..100)
//!     .map(|i| Point::new((i % 10) as f64, (i / 10) as f64))
//!     .collect();
//!
//! let config = KMeansConfig::new(4)
//!     .with_seed(7)
//!     .with_max_iters(Some(500))
//!     .with_convergence(ConvergenceCheck::Membership);
//!
//! let mut kmeans = PlanarKMeans::with_config(config);
//! let labels = kmeans.fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), 100);
//! ```

mod algorithm;
mod config;
mod distance;
mod error;
mod kmeans;
mod point;
mod seeding;
pub mod synthetic;

pub use algorithm::{
    assign, assign_labels, recompute_centroids, run, run_with_config, ClusteringState,
};
pub use config::{ConvergenceCheck, KMeansConfig};
pub use distance::{centroid_of, inertia, nearest_centroid, squared_distance};
pub use error::KMeansError;
pub use kmeans::PlanarKMeans;
pub use point::{count_distinct, points_from_array, points_to_array, Point};
pub use seeding::{choose_seeds, CumulativeWeights};
