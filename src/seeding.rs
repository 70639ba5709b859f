use crate::distance::min_squared_distance;
use crate::error::KMeansError;
use crate::point::Point;
use rand::Rng;

/// Discrete distribution over indices, keyed by non-negative weights.
///
/// Stores the running prefix sum of the weights, scaled so the largest finite
/// weight is 1; the sum then stays finite for any finite weights. A draw picks
/// `u ~ Uniform[0, total)` and binary-searches the first prefix strictly
/// greater than `u`, so zero-weight entries are never selected.
///
/// `+inf` weights dominate every finite one: if any are present a draw picks
/// uniformly among them.
#[derive(Debug, Clone)]
pub struct CumulativeWeights {
    cumulative: Vec<f64>,
    infinite: Vec<usize>,
}

impl CumulativeWeights {
    /// Build the prefix sums. Negative and NaN weights count as 0.
    pub fn new<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let weights: Vec<f64> = weights.into_iter().collect();

        let infinite = weights
            .iter()
            .enumerate()
            .filter(|(_, &w)| w == f64::INFINITY)
            .map(|(i, _)| i)
            .collect();

        let scale = weights
            .iter()
            .copied()
            .filter(|w| w.is_finite() && *w > 0.0)
            .fold(0.0f64, f64::max);

        let mut total = 0.0f64;
        let cumulative = weights
            .iter()
            .map(|&w| {
                if w.is_finite() && w > 0.0 {
                    total += w / scale;
                }
                total
            })
            .collect();

        Self {
            cumulative,
            infinite,
        }
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Sum of the finite weights, relative to the largest one.
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Draw one index. `None` if the total weight is zero.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if !self.infinite.is_empty() {
            return Some(self.infinite[rng.gen_range(0..self.infinite.len())]);
        }

        let total = self.total();
        if !(total.is_finite() && total > 0.0) {
            return None;
        }

        let u = rng.gen_range(0.0..total);
        let idx = self.cumulative.partition_point(|&c| c <= u);

        // u < total, so idx is in range unless rounding pushes it to the end
        Some(idx.min(self.cumulative.len() - 1))
    }
}

/// Pick `num_seeds` initial centroids from `data` with k-means++ weighting.
///
/// The first seed is drawn uniformly. Each further seed is drawn with
/// probability proportional to its squared distance from the nearest seed
/// already chosen. The returned seeds are sorted by [`Point`] order.
///
/// If every remaining weight is zero (all points coincide with chosen seeds,
/// which needs `num_seeds` above the number of distinct points) the draw
/// falls back to a uniform pick.
pub fn choose_seeds<R: Rng + ?Sized>(
    data: &[Point],
    num_seeds: usize,
    rng: &mut R,
) -> Result<Vec<Point>, KMeansError> {
    if data.is_empty() {
        return Err(KMeansError::EmptyPointSet);
    }

    if num_seeds == 0 {
        return Err(KMeansError::InvalidK(
            "number of seeds must be greater than 0".to_string(),
        ));
    }

    if num_seeds > data.len() {
        return Err(KMeansError::InsufficientData(format!(
            "Number of samples ({}) is less than the number of seeds ({})",
            data.len(),
            num_seeds
        )));
    }

    let mut seeds = Vec::with_capacity(num_seeds);
    seeds.push(data[rng.gen_range(0..data.len())]);

    while seeds.len() < num_seeds {
        let weights =
            CumulativeWeights::new(data.iter().map(|p| min_squared_distance(p, &seeds)));

        let idx = match weights.sample(rng) {
            Some(idx) => idx,
            None => rng.gen_range(0..data.len()),
        };
        seeds.push(data[idx]);
    }

    seeds.sort();
    Ok(seeds)
}
