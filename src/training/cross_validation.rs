//! Cross-validation harness
//!
//! Folds are contiguous over the dataset's row order. The engine shuffles
//! rows once with the configured seed before any evaluation, so the same
//! seed reproduces the same folds and every (subset, k) pair is scored on
//! identical partitions.

use crate::dataset::Dataset;
use crate::error::{Result, SearchError};
use crate::training::metrics::root_mean_squared_error;

/// A single train/test split
#[derive(Debug, Clone)]
pub struct CVSplit {
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
    pub fold_idx: usize,
}

/// K-fold splitter over an already-ordered row sequence
#[derive(Debug, Clone, Copy)]
pub struct CrossValidator {
    n_splits: usize,
}

impl CrossValidator {
    pub fn new(n_splits: usize) -> Self {
        Self { n_splits }
    }

    /// Partition `n_samples` rows into contiguous folds of as-equal-as-
    /// possible size; the last fold absorbs the remainder.
    pub fn split(&self, n_samples: usize) -> Result<Vec<CVSplit>> {
        if self.n_splits < 2 {
            return Err(SearchError::ConfigError(
                "fold count must be at least 2".to_string(),
            ));
        }
        let base = n_samples / self.n_splits;
        if base == 0 {
            return Err(SearchError::Computation(format!(
                "fold count ({}) leaves an empty fold for {} rows",
                self.n_splits, n_samples
            )));
        }

        let mut splits = Vec::with_capacity(self.n_splits);
        for fold_idx in 0..self.n_splits {
            let start = fold_idx * base;
            let end = if fold_idx == self.n_splits - 1 {
                n_samples
            } else {
                start + base
            };
            let test_indices: Vec<usize> = (start..end).collect();
            let train_indices: Vec<usize> = (0..start).chain(end..n_samples).collect();
            splits.push(CVSplit {
                train_indices,
                test_indices,
                fold_idx,
            });
        }
        Ok(splits)
    }
}

/// RMSE of predictions against the target values of the given rows.
///
/// Pairs where the actual target is missing or the prediction is
/// non-finite are dropped; a fold with no usable pairs is a computation
/// error.
fn rmse_over_rows(
    dataset: &Dataset,
    target: &str,
    test_rows: &[usize],
    predictions: &[f64],
) -> Result<f64> {
    if test_rows.len() != predictions.len() {
        return Err(SearchError::Shape {
            expected: format!("{} predictions", test_rows.len()),
            actual: format!("{} predictions", predictions.len()),
        });
    }
    let target_col = dataset.column(target)?;

    let mut actual = Vec::with_capacity(test_rows.len());
    let mut predicted = Vec::with_capacity(test_rows.len());
    for (&row, &p) in test_rows.iter().zip(predictions.iter()) {
        if let Some(a) = target_col[row].as_f64() {
            if p.is_finite() {
                actual.push(a);
                predicted.push(p);
            }
        }
    }
    root_mean_squared_error(&actual, &predicted)
}

/// K-fold evaluation: train/predict on each fold with the supplied
/// function and report the mean per-fold RMSE.
pub fn cross_validate<F>(
    dataset: &Dataset,
    target: &str,
    n_folds: usize,
    mut predict: F,
) -> Result<f64>
where
    F: FnMut(&[usize], &[usize]) -> Result<Vec<f64>>,
{
    let splits = CrossValidator::new(n_folds).split(dataset.n_rows())?;

    let mut fold_errors = Vec::with_capacity(splits.len());
    for split in &splits {
        let predictions = predict(&split.train_indices, &split.test_indices)?;
        fold_errors.push(rmse_over_rows(
            dataset,
            target,
            &split.test_indices,
            &predictions,
        )?);
    }
    Ok(fold_errors.iter().sum::<f64>() / fold_errors.len() as f64)
}

/// Single holdout evaluation: train on the first three quarters of the
/// row order, score RMSE on the rest.
pub fn holdout_rmse<F>(dataset: &Dataset, target: &str, mut predict: F) -> Result<f64>
where
    F: FnMut(&[usize], &[usize]) -> Result<Vec<f64>>,
{
    let n = dataset.n_rows();
    let split_at = n * 3 / 4;
    if split_at == 0 || split_at == n {
        return Err(SearchError::Computation(format!(
            "dataset of {} rows cannot be split into train and test partitions",
            n
        )));
    }
    let train_indices: Vec<usize> = (0..split_at).collect();
    let test_indices: Vec<usize> = (split_at..n).collect();
    let predictions = predict(&train_indices, &test_indices)?;
    rmse_over_rows(dataset, target, &test_indices, &predictions)
}
