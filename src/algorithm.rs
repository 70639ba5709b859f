use crate::config::{ConvergenceCheck, KMeansConfig};
use crate::distance::{centroid_of, inertia, nearest_centroid};
use crate::error::KMeansError;
use crate::point::{count_distinct, points_to_array, Point};
use crate::seeding::choose_seeds;
use log::{debug, log, Level};
use ndarray::Array2;
use rand::Rng;
use std::time::Instant;

/// Converged output of Lloyd's algorithm.
///
/// `clusters[i]` holds exactly the points whose nearest centroid is
/// `centroids[i]`, in input order. Centroids are sorted by [`Point`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringState {
    centroids: Vec<Point>,
    clusters: Vec<Vec<Point>>,
    labels: Vec<usize>,
    n_iterations: usize,
}

impl ClusteringState {
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }

    pub fn clusters(&self) -> &[Vec<Point>] {
        &self.clusters
    }

    /// Cluster index of each input point, in input order
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of assign/recompute rounds run, including the final one
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Total within-cluster squared distance
    pub fn inertia(&self) -> f64 {
        inertia(&self.centroids, &self.clusters)
    }

    /// Label `points` by their nearest centroid, first minimum wins.
    pub fn labels_for(&self, points: &[Point]) -> Vec<usize> {
        points
            .iter()
            .map(|p| nearest_centroid(p, &self.centroids).map_or(0, |(j, _)| j))
            .collect()
    }

    /// Centroids as a `(k, 2)` array for plotting or export
    pub fn centroids_array(&self) -> Array2<f64> {
        points_to_array(&self.centroids)
    }

    pub fn into_parts(self) -> (Vec<Point>, Vec<Vec<Point>>) {
        (self.centroids, self.clusters)
    }
}

/// Index of the nearest centroid for every point in `data`.
///
/// Ties go to the lowest centroid index.
pub fn assign_labels(data: &[Point], centroids: &[Point]) -> Result<Vec<usize>, KMeansError> {
    if centroids.is_empty() {
        return Err(KMeansError::InvalidK(
            "at least one centroid is required".to_string(),
        ));
    }

    Ok(data
        .iter()
        .map(|p| nearest_centroid(p, centroids).map_or(0, |(j, _)| j))
        .collect())
}

/// Split `data` into one cluster per centroid by nearest-centroid assignment.
///
/// Points keep their relative input order inside each cluster. A centroid
/// that attracts no points yields an empty cluster.
pub fn assign(data: &[Point], centroids: &[Point]) -> Result<Vec<Vec<Point>>, KMeansError> {
    let labels = assign_labels(data, centroids)?;
    Ok(group_by_label(data, &labels, centroids.len()))
}

fn group_by_label(data: &[Point], labels: &[usize], k: usize) -> Vec<Vec<Point>> {
    let mut clusters = vec![Vec::new(); k];
    for (p, &label) in data.iter().zip(labels) {
        clusters[label].push(*p);
    }
    clusters
}

/// Mean of every cluster, sorted by [`Point`] order.
///
/// Fails with [`KMeansError::EmptyCluster`] naming the first empty cluster.
pub fn recompute_centroids(clusters: &[Vec<Point>]) -> Result<Vec<Point>, KMeansError> {
    let mut centroids = clusters
        .iter()
        .enumerate()
        .map(|(index, members)| {
            centroid_of(members).map_err(|_| KMeansError::EmptyCluster { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    centroids.sort();
    Ok(centroids)
}

/// Relabel a partition by order of first appearance so that two labellings
/// of the same grouping compare equal.
fn canonical_partition(labels: &[usize], k: usize) -> Vec<usize> {
    let mut mapping = vec![usize::MAX; k];
    let mut next = 0;

    labels
        .iter()
        .map(|&label| {
            if mapping[label] == usize::MAX {
                mapping[label] = next;
                next += 1;
            }
            mapping[label]
        })
        .collect()
}

fn validate(data: &[Point], k: usize) -> Result<(), KMeansError> {
    if data.is_empty() {
        return Err(KMeansError::EmptyPointSet);
    }

    if k == 0 {
        return Err(KMeansError::InvalidK(
            "k must be greater than 0".to_string(),
        ));
    }

    if data.len() < k {
        return Err(KMeansError::InsufficientData(format!(
            "Number of samples ({}) is less than k ({})",
            data.len(),
            k
        )));
    }

    let distinct = count_distinct(data);
    if distinct < k {
        return Err(KMeansError::InsufficientData(format!(
            "Number of distinct points ({}) is less than k ({})",
            distinct, k
        )));
    }

    Ok(())
}

/// Cluster `data` into `k` groups with default settings.
///
/// See [`run_with_config`].
pub fn run<R: Rng + ?Sized>(
    data: &[Point],
    k: usize,
    rng: &mut R,
) -> Result<ClusteringState, KMeansError> {
    run_with_config(data, &KMeansConfig::new(k), rng)
}

/// Run Lloyd's algorithm from k-means++ seeds until the fixed point.
///
/// Each round assigns every point to its nearest centroid and replaces the
/// centroids with the sorted cluster means. The loop stops once the round
/// leaves the centroids unchanged (or the partition, under
/// [`ConvergenceCheck::Membership`]). The first round compares against the
/// seeds themselves.
///
/// `config.seed` is ignored here: randomness comes from `rng`.
pub fn run_with_config<R: Rng + ?Sized>(
    data: &[Point],
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<ClusteringState, KMeansError> {
    let k = config.k;
    validate(data, k)?;

    let level = if config.verbose {
        Level::Info
    } else {
        Level::Debug
    };

    let mut centroids = choose_seeds(data, k, rng)?;
    log!(
        level,
        "Seeded {} centroids from {} points: {:?}",
        k,
        data.len(),
        centroids
    );

    let mut prev_partition: Option<Vec<usize>> = None;
    let mut n_iterations = 0;

    loop {
        if let Some(max_iters) = config.max_iters {
            if n_iterations >= max_iters {
                return Err(KMeansError::NotConverged {
                    iterations: n_iterations,
                });
            }
        }

        let iter_start = Instant::now();
        n_iterations += 1;

        let labels = assign_labels(data, &centroids)?;
        let clusters = group_by_label(data, &labels, k);
        let new_centroids = recompute_centroids(&clusters)?;

        let converged = match config.convergence {
            // both sides are sorted, so element-wise equality is multiset equality
            ConvergenceCheck::CentroidMultiset => new_centroids == centroids,
            ConvergenceCheck::Membership => {
                let partition = canonical_partition(&labels, k);
                let same = prev_partition.as_ref() == Some(&partition);
                prev_partition = Some(partition);
                same
            }
        };

        debug!(
            "  Iteration {}: inertia = {:.6}, time = {:.4}s",
            n_iterations,
            inertia(&centroids, &clusters),
            iter_start.elapsed().as_secs_f64()
        );

        if converged {
            log!(level, "Converged after {} iterations", n_iterations);

            // clusters were assigned against `centroids`, which match the
            // recomputed means, so index alignment holds
            return Ok(ClusteringState {
                centroids,
                clusters,
                labels,
                n_iterations,
            });
        }

        centroids = new_centroids;
    }
}
