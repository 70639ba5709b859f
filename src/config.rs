/// How the Lloyd loop decides that it has reached a fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvergenceCheck {
    /// Stop when the sorted centroid sequence equals the previous one.
    ///
    /// Compares centroids as a multiset, so two clusters sitting on the same
    /// position are still counted twice.
    #[default]
    CentroidMultiset,

    /// Stop when every point lands in the same group as in the previous
    /// iteration, regardless of how the groups are labelled.
    ///
    /// Stricter than `CentroidMultiset` when centroids coincide: clusters may
    /// trade members without moving their means.
    Membership,
}

/// Configuration for the k-means algorithm
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Random seed for k-means++ seeding
    pub seed: u64,

    /// Optional iteration cap. `None` iterates until the fixed point.
    pub max_iters: Option<usize>,

    /// Fixed-point test applied after each centroid update
    pub convergence: ConvergenceCheck,

    /// Log seeding and convergence at info level instead of debug
    pub verbose: bool,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 8,
            seed: 0,
            max_iters: None,
            convergence: ConvergenceCheck::default(),
            verbose: false,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iters(mut self, max_iters: Option<usize>) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the convergence test
    pub fn with_convergence(mut self, convergence: ConvergenceCheck) -> Self {
        self.convergence = convergence;
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
