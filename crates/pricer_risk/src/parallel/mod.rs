//! Rayon-based parallelisation utilities.
//!
//! Work is split with `par_iter` so results come back in index order
//! without any locking or post-sort.

use rayon::prelude::*;

/// Minimum number of items handed to a single Rayon task.
///
/// One closed-form evaluation is far cheaper than a task split, so items
/// are grouped before being stolen by other workers.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Default book size from which parallel evaluation is used.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1_000;

/// Parallel map preserving input order.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `batch_size` - Minimum items per Rayon task
/// * `mapper` - Function to apply to each item
///
/// # Returns
///
/// Vector of mapped results, `result[i] = mapper(&items[i])`.
pub fn parallel_map<T, R, F>(items: &[T], batch_size: usize, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items
        .par_iter()
        .with_min_len(batch_size.max(1))
        .map(mapper)
        .collect()
}

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum items per Rayon task
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that parallelises every non-empty batch.
    pub fn always() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, 1)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_map_preserves_order() {
        let items: Vec<i32> = (0..1000).collect();
        let doubled: Vec<i32> = parallel_map(&items, 8, |&x| x * 2);

        assert_eq!(doubled.len(), 1000);
        for (i, value) in doubled.iter().enumerate() {
            assert_eq!(*value, 2 * i as i32);
        }
    }

    #[test]
    fn test_parallel_map_zero_batch_size() {
        let items = [1, 2, 3];
        assert_eq!(parallel_map(&items, 0, |&x| x + 1), vec![2, 3, 4]);
    }

    #[test]
    fn test_parallel_map_empty() {
        let items: Vec<f64> = Vec::new();
        assert!(parallel_map(&items, 4, |&x| x).is_empty());
    }

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_parallel_config_clamps_batch_size() {
        assert_eq!(ParallelConfig::new(0, 10).batch_size, 1);
    }

    #[test]
    fn test_should_parallelize() {
        let config = ParallelConfig::new(16, 100);
        assert!(!config.should_parallelize(50));
        assert!(config.should_parallelize(100));
        assert!(config.should_parallelize(1000));
        assert!(ParallelConfig::always().should_parallelize(1));
    }
}
