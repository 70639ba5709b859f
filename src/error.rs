use thiserror::Error;

/// Error types for the planar-kmeans library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansError {
    /// The number of clusters k is invalid (must be > 0)
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// Not enough (distinct) data points for the requested number of clusters
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// The input point set has no points
    #[error("Point set is empty")]
    EmptyPointSet,

    /// A centroid attracted no points during assignment
    #[error("Cluster {index} is empty; cannot compute its centroid")]
    EmptyCluster { index: usize },

    /// The iteration cap was reached before the centroids stabilised
    #[error("Did not converge within {iterations} iterations")]
    NotConverged { iterations: usize },

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call train() or fit() first.")]
    NotFitted,

    /// Array input is not shaped (n, 2)
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),
}
