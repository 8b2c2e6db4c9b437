//! Train/test splitting for holdout evaluation.

use crate::error::{CareCostError, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Validates split parameters and returns `(n_train, n_test)`.
fn validate_split_inputs(n_samples: usize, test_size: f64) -> Result<(usize, usize)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(CareCostError::InvalidParameter {
            param: "test_size".to_string(),
            value: test_size.to_string(),
            constraint: "strictly between 0 and 1".to_string(),
        });
    }

    let n_test = (n_samples as f64 * test_size).round() as usize;
    let n_train = n_samples.saturating_sub(n_test);

    if n_test == 0 || n_train == 0 {
        return Err(CareCostError::InvalidParameter {
            param: "test_size".to_string(),
            value: test_size.to_string(),
            constraint: format!(
                "a split of {n_samples} samples with non-empty train and test sets (got n_train={n_train}, n_test={n_test})"
            ),
        });
    }

    Ok((n_train, n_test))
}

/// Deterministic permutation of `0..n_samples` for the given seed.
fn shuffle_indices(n_samples: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);
    indices
}

/// Splits `items` into shuffled train and test sets.
///
/// The same seed always produces the same split.
///
/// # Examples
///
/// ```
/// use carecost::model_selection::train_test_split;
///
/// let items: Vec<u32> = (0..10).collect();
/// let (train, test) = train_test_split(&items, 0.2, 42).expect("valid split");
/// assert_eq!(train.len(), 8);
/// assert_eq!(test.len(), 2);
/// ```
///
/// # Errors
///
/// Returns `InvalidParameter` if `test_size` is outside (0, 1) or the split
/// would leave either side empty.
pub fn train_test_split<T: Clone>(items: &[T], test_size: f64, seed: u64) -> Result<(Vec<T>, Vec<T>)> {
    let (n_train, _) = validate_split_inputs(items.len(), test_size)?;

    let indices = shuffle_indices(items.len(), seed);
    let train = indices[..n_train].iter().map(|&i| items[i].clone()).collect();
    let test = indices[n_train..].iter().map(|&i| items[i].clone()).collect();

    Ok((train, test))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_test_split_basic() {
        let items: Vec<usize> = (0..10).collect();
        let (train, test) = train_test_split(&items, 0.2, 42).expect("Split should succeed");

        assert_eq!(train.len(), 8, "Training set should have 8 samples");
        assert_eq!(test.len(), 2, "Test set should have 2 samples");
    }

    #[test]
    fn test_train_test_split_is_partition() {
        let items: Vec<usize> = (0..25).collect();
        let (train, test) = train_test_split(&items, 0.3, 7).expect("Split should succeed");

        let mut all: Vec<usize> = train.into_iter().chain(test).collect();
        all.sort_unstable();
        assert_eq!(all, items);
    }

    #[test]
    fn test_train_test_split_reproducibility() {
        let items: Vec<usize> = (0..20).collect();
        let first = train_test_split(&items, 0.25, 42).expect("First split should succeed");
        let second = train_test_split(&items, 0.25, 42).expect("Second split should succeed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_train_test_split_seed_changes_order() {
        let items: Vec<usize> = (0..50).collect();
        let (_, test_a) = train_test_split(&items, 0.2, 1).expect("split");
        let (_, test_b) = train_test_split(&items, 0.2, 2).expect("split");
        assert_ne!(test_a, test_b);
    }

    #[test]
    fn test_train_test_split_invalid_size() {
        let items: Vec<usize> = (0..10).collect();
        assert!(train_test_split(&items, 0.0, 42).is_err());
        assert!(train_test_split(&items, 1.0, 42).is_err());
        assert!(train_test_split(&items, f64::NAN, 42).is_err());
    }

    #[test]
    fn test_train_test_split_empty_side() {
        let items: Vec<usize> = (0..3).collect();
        let err = train_test_split(&items, 0.1, 42).expect_err("test set would be empty");
        assert!(matches!(err, CareCostError::InvalidParameter { .. }));
    }
}
