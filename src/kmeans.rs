use crate::algorithm::{assign_labels, run_with_config, ClusteringState};
use crate::config::KMeansConfig;
use crate::error::KMeansError;
use crate::point::{points_from_array, Point};
use ndarray::ArrayView2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// k-means over 2-D points with k-means++ seeding.
///
/// Wraps [`run_with_config`] behind a scikit-learn style interface and owns
/// the random source, a [`ChaCha8Rng`] seeded from `config.seed`, so that
/// training the same data twice with the same seed gives the same result.
///
/// # Example
///
/// ```
/// use planar_kmeans::{PlanarKMeans, Point};
///
/// let data: Vec<Point> = [(0.0, 0.0), (0.0, 1.0), (9.0, 9.0), (9.0, 8.0)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
///
/// let mut kmeans = PlanarKMeans::new(2);
/// let labels = kmeans.fit_predict(&data).unwrap();
///
/// assert_eq!(labels[0], labels[1]);
/// assert_ne!(labels[0], labels[2]);
/// ```
pub struct PlanarKMeans {
    /// Model configuration
    config: KMeansConfig,

    /// Result of the last successful training run
    state: Option<ClusteringState>,
}

impl PlanarKMeans {
    /// Create a new instance with default configuration.
    ///
    /// `k` is checked on `train()`; a zero `k` surfaces as
    /// [`KMeansError::InvalidK`] there.
    pub fn new(k: usize) -> Self {
        Self::with_config(KMeansConfig::new(k))
    }

    /// Create a new instance with custom configuration.
    pub fn with_config(config: KMeansConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Train the model on the given points.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `k` is 0
    /// - The point set is empty
    /// - There are fewer distinct points than k
    /// - A cluster empties out during iteration
    /// - The iteration cap is reached first
    ///
    /// A failed run leaves any earlier training result in place.
    pub fn train(&mut self, data: &[Point]) -> Result<(), KMeansError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let state = run_with_config(data, &self.config, &mut rng)?;

        self.state = Some(state);
        Ok(())
    }

    /// Train on an `(n, 2)` array, one row per point.
    pub fn train_array(&mut self, data: &ArrayView2<f64>) -> Result<(), KMeansError> {
        let points = points_from_array(data)?;
        self.train(&points)
    }

    /// Fit the model to the data. Equivalent to `train()`.
    ///
    /// Returns `&mut Self` for method chaining.
    pub fn fit(&mut self, data: &[Point]) -> Result<&mut Self, KMeansError> {
        self.train(data)?;
        Ok(self)
    }

    /// Label each point with the index of its nearest trained centroid.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::NotFitted`] if the model has not been trained.
    pub fn predict(&self, data: &[Point]) -> Result<Vec<usize>, KMeansError> {
        let state = self.state.as_ref().ok_or(KMeansError::NotFitted)?;
        assign_labels(data, state.centroids())
    }

    /// Predict on an `(n, 2)` array, one row per point.
    pub fn predict_array(&self, data: &ArrayView2<f64>) -> Result<Vec<usize>, KMeansError> {
        let points = points_from_array(data)?;
        self.predict(&points)
    }

    /// Fit the model and return the training labels in one call.
    pub fn fit_predict(&mut self, data: &[Point]) -> Result<Vec<usize>, KMeansError> {
        self.train(data)?;
        let state = self.state.as_ref().ok_or(KMeansError::NotFitted)?;
        Ok(state.labels().to_vec())
    }

    /// Sorted centroids of the fitted model, `None` before training.
    pub fn centroids(&self) -> Option<&[Point]> {
        self.state.as_ref().map(|s| s.centroids())
    }

    /// Full result of the last training run.
    pub fn state(&self) -> Option<&ClusteringState> {
        self.state.as_ref()
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}
