//! Parallel batch simplification
//!
//! Simplifiers are stateless, so independent polylines can be processed on
//! rayon's pool without coordination. Small batches run on the calling thread.

use crate::LineSimplifier;
use linesimp_core::{validate_tolerance, Error, Polyline, Result};
use log::debug;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// Thread configuration for batch simplification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Worker threads for a dedicated pool (None = rayon's global pool)
    pub num_threads: Option<usize>,
    /// Batches shorter than this run sequentially
    pub min_parallel_len: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            min_parallel_len: 4,
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run batches on a dedicated pool with this many threads
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    pub fn with_min_parallel_len(mut self, min_parallel_len: usize) -> Self {
        self.min_parallel_len = min_parallel_len;
        self
    }
}

/// Simplify every polyline in `polylines` with the default [`BatchConfig`].
///
/// Output order matches input order. Any error aborts the batch.
pub fn simplify_batch<S>(simplifier: &S, polylines: &[Polyline], epsilon: f64) -> Result<Vec<Polyline>>
where
    S: LineSimplifier + Sync + ?Sized,
{
    simplify_batch_with(simplifier, polylines, epsilon, &BatchConfig::default())
}

/// Simplify every polyline in `polylines` using `config` to pick the pool
pub fn simplify_batch_with<S>(
    simplifier: &S,
    polylines: &[Polyline],
    epsilon: f64,
    config: &BatchConfig,
) -> Result<Vec<Polyline>>
where
    S: LineSimplifier + Sync + ?Sized,
{
    validate_tolerance(epsilon)?;

    if polylines.len() < config.min_parallel_len {
        return polylines
            .iter()
            .map(|polyline| simplifier.simplify(polyline, epsilon))
            .collect();
    }

    let run = || {
        polylines
            .par_iter()
            .map(|polyline| simplifier.simplify(polyline, epsilon))
            .collect::<Result<Vec<_>>>()
    };

    let result = match config.num_threads {
        Some(num_threads) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .thread_name(|index| format!("linesimp-batch-{}", index))
                .build()
                .map_err(|e| Error::Algorithm(format!("Failed to create thread pool: {}", e)))?;
            pool.install(run)
        }
        None => run(),
    }?;

    debug!(
        "batch: simplified {} polylines in parallel (threads = {:?})",
        polylines.len(),
        config.num_threads
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DouglasPeuckerSimplifier, VisvalingamSimplifier, WeightedVisvalingamSimplifier};
    use linesimp_core::Point2d;

    fn wave(n: usize, phase: f64) -> Polyline {
        (0..n)
            .map(|i| {
                let x = i as f64 * 0.1;
                Point2d::new(x, (x + phase).sin())
            })
            .collect()
    }

    fn batch(count: usize) -> Vec<Polyline> {
        (0..count).map(|i| wave(200, i as f64 * 0.3)).collect()
    }

    #[test]
    fn test_batch_config() {
        let config = BatchConfig::new().with_threads(2).with_min_parallel_len(10);
        assert_eq!(config.num_threads, Some(2));
        assert_eq!(config.min_parallel_len, 10);
        assert_eq!(BatchConfig::default().num_threads, None);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let polylines = batch(16);
        let simplifier = DouglasPeuckerSimplifier::new();
        let parallel = simplify_batch(&simplifier, &polylines, 0.05).unwrap();
        let sequential: Vec<Polyline> = polylines
            .iter()
            .map(|p| simplifier.simplify(p, 0.05).unwrap())
            .collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_dedicated_pool() {
        let polylines = batch(8);
        let simplifier = VisvalingamSimplifier::new();
        let config = BatchConfig::new().with_threads(2).with_min_parallel_len(1);
        let pooled = simplify_batch_with(&simplifier, &polylines, 0.01, &config).unwrap();
        let global = simplify_batch(&simplifier, &polylines, 0.01).unwrap();
        assert_eq!(pooled, global);
    }

    #[test]
    fn test_small_batch_runs_sequentially() {
        let polylines = batch(2);
        let config = BatchConfig::new().with_min_parallel_len(100);
        let result =
            simplify_batch_with(&DouglasPeuckerSimplifier::new(), &polylines, 0.05, &config)
                .unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_empty_batch() {
        let result = simplify_batch(&DouglasPeuckerSimplifier::new(), &[], 1.0).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_invalid_tolerance_aborts() {
        let polylines = batch(4);
        let result = simplify_batch(&DouglasPeuckerSimplifier::new(), &polylines, -1.0);
        assert_eq!(result, Err(Error::InvalidTolerance(-1.0)));
    }

    #[test]
    fn test_error_in_batch_aborts() {
        // Weights only fit polylines of three points
        let simplifier = WeightedVisvalingamSimplifier::new(vec![1.0; 3]);
        let mut polylines = batch(6);
        polylines[3] = wave(3, 0.0);
        let result = simplify_batch(&simplifier, &polylines, 0.1);
        assert!(matches!(result, Err(Error::WeightCountMismatch { .. })));
    }
}
