//! Nearest-neighbor regressor
//!
//! Ranks training rows by aggregate distance on a feature subset and
//! predicts the target as the mean of the k nearest. Sorting is stable,
//! so distance ties resolve by the prior seeded row order and repeated
//! runs with the same seed rank identically.

use crate::dataset::{Dataset, Value};
use crate::error::{Result, SearchError};
use crate::training::distance::aggregate_distance;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// K-nearest-neighbor averaging predictor
#[derive(Debug, Clone, Copy)]
pub struct KnnRegressor {
    k: usize,
}

impl KnnRegressor {
    /// Create a predictor with the given neighbor count (k ≥ 1)
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(SearchError::InvalidParameter {
                name: "k".to_string(),
                value: "0".to_string(),
                reason: "neighbor count must be at least 1".to_string(),
            });
        }
        Ok(Self { k })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Predict the target for every test row from the k nearest training
    /// rows on the given feature subset (parallelized over test rows).
    ///
    /// k larger than the training-row count is clamped. Training rows
    /// with a missing target are never candidate neighbors.
    pub fn predict(
        &self,
        dataset: &Dataset,
        features: &[String],
        target: &str,
        train_rows: &[usize],
        test_rows: &[usize],
    ) -> Result<Vec<f64>> {
        let feature_cols: Vec<&[Value]> = features
            .iter()
            .map(|name| dataset.column(name))
            .collect::<Result<Vec<_>>>()?;
        let target_col = dataset.column(target)?;

        let candidates: Vec<(usize, f64)> = train_rows
            .iter()
            .filter_map(|&row| target_col[row].as_f64().map(|t| (row, t)))
            .collect();
        if candidates.is_empty() {
            return Err(SearchError::Computation(
                "no training rows with a known target value".to_string(),
            ));
        }

        let k_eff = self.k.min(candidates.len());

        let predictions: Vec<f64> = test_rows
            .par_iter()
            .map(|&query| {
                let mut ranked: Vec<(f64, f64)> = candidates
                    .iter()
                    .map(|&(row, t)| (aggregate_distance(&feature_cols, query, row), t))
                    .collect();
                // Stable sort keeps the shuffled row order for ties
                ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

                ranked[..k_eff].iter().map(|(_, t)| t).sum::<f64>() / k_eff as f64
            })
            .collect();

        debug!(
            target_column = target,
            n_features = features.len(),
            k = k_eff,
            mean_prediction = predictions.iter().sum::<f64>() / predictions.len().max(1) as f64,
            "nearest-neighbor predictions computed"
        );

        Ok(predictions)
    }
}
