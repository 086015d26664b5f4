//! Hyperparameter search loop
//!
//! Drives the predictor and the cross-validation harness across the
//! Cartesian product of feature subsets and neighbor counts, tracking the
//! minimum-error configuration per subset and overall.

use crate::config::SearchConfig;
use crate::dataset::Dataset;
use crate::error::{Result, SearchError};
use crate::optimizer::combinations::generate_combinations;
use crate::preprocessing::encoder::DummyEncoder;
use crate::preprocessing::validate::resolve_training_columns;
use crate::training::cross_validation::{cross_validate, holdout_rmse};
use crate::training::knn::KnnRegressor;
use crate::training::linear_models::fit_predict_rows;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Separator joining feature names into a subset identifier
pub const FEATURE_NAME_SEPARATOR: &str = "__";

/// Best nearest-neighbor configuration found by the search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnnReport {
    pub feature_names: String,
    pub rmse: f64,
    pub k_neighbors_qty: usize,
    pub k_folds_qty: usize,
    pub k_fold_cross_validation_toggle: bool,
}

/// Model type plus error, before any subset search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelScore {
    pub model_type: String,
    pub rmse: f64,
}

/// Best configuration after subset search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimisedScore {
    pub model_type: String,
    pub feature_names: String,
    pub rmse: f64,
    pub k_neighbors_qty: usize,
    pub k_folds_qty: usize,
    pub k_fold_cross_validation_toggle: bool,
}

/// Linear-model branch: baseline over all training columns plus the
/// best-subset outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearReport {
    #[serde(rename = "pre-hyperparameter-optimisation")]
    pub pre_optimisation: ModelScore,
    #[serde(rename = "post-hyperparameter-optimisation")]
    pub post_optimisation: OptimisedScore,
}

/// Results mapping returned to the caller, keyed by model type.
/// A branch is `null` when that model type was not requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub linear: Option<LinearReport>,
    pub knn: Option<KnnReport>,
}

/// Evaluation and hyperparameter search engine.
///
/// Validates and transforms the dataset once, shuffles rows with the
/// configured seed, then scores every (feature subset, k) pair against
/// the shared read-only dataset.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the full evaluation: validation, transformation, shuffle, and
    /// the search over requested model types.
    pub fn run(&self, dataset: &mut Dataset) -> Result<SearchResults> {
        let mut training_columns = resolve_training_columns(dataset, &self.config)?;

        if !self.config.multi_class_columns.is_empty() {
            let mut encoder = DummyEncoder::new();
            encoder.fit_transform(
                dataset,
                &self.config.multi_class_columns,
                &mut training_columns,
            )?;
        }

        dataset.shuffle_rows(self.config.seed);

        let combos = generate_combinations(&training_columns, self.config.min_combination_len);
        if combos.is_empty() {
            return Err(SearchError::ConfigError(
                "no candidate feature combinations to search".to_string(),
            ));
        }
        info!(
            n_combinations = combos.len(),
            n_training_columns = training_columns.len(),
            "search space enumerated"
        );

        let knn = if self.config.use_knn {
            Some(self.search_knn(dataset, &combos)?)
        } else {
            None
        };

        let linear = if self.config.use_linear {
            Some(self.search_linear(dataset, &training_columns, &combos)?)
        } else {
            None
        };

        Ok(SearchResults { linear, knn })
    }

    /// Score a nearest-neighbor model for one subset and k
    fn evaluate_knn(&self, dataset: &Dataset, features: &[String], k: usize) -> Result<f64> {
        let model = KnnRegressor::new(k)?;
        let target = self.config.target_column.as_str();
        let predict = |train: &[usize], test: &[usize]| {
            model.predict(dataset, features, target, train, test)
        };
        if self.config.use_kfold {
            cross_validate(dataset, target, self.config.fold_count, predict)
        } else {
            holdout_rmse(dataset, target, predict)
        }
    }

    /// Score a linear model for one subset
    fn evaluate_linear(&self, dataset: &Dataset, features: &[String]) -> Result<f64> {
        let target = self.config.target_column.as_str();
        let predict = |train: &[usize], test: &[usize]| {
            fit_predict_rows(dataset, features, target, train, test)
        };
        if self.config.use_kfold {
            cross_validate(dataset, target, self.config.fold_count, predict)
        } else {
            holdout_rmse(dataset, target, predict)
        }
    }

    /// Outer loop over subsets, inner loop over k in 1..=k_max
    fn search_knn(&self, dataset: &Dataset, combos: &[Vec<String>]) -> Result<KnnReport> {
        if self.config.k_max == 0 {
            return Err(SearchError::InvalidParameter {
                name: "k_max".to_string(),
                value: "0".to_string(),
                reason: "the neighbor-count search range must contain at least k = 1".to_string(),
            });
        }

        let mut best: Option<(f64, String, usize)> = None;
        for features in combos {
            let subset_name = features.join(FEATURE_NAME_SEPARATOR);

            // Minimum error and the k achieving it, for this subset
            let mut subset_best: Option<(f64, usize)> = None;
            for k in 1..=self.config.k_max {
                let rmse = self.evaluate_knn(dataset, features, k)?;
                if subset_best.map_or(true, |(min_rmse, _)| rmse < min_rmse) {
                    subset_best = Some((rmse, k));
                }
            }
            let (subset_rmse, subset_k) = subset_best.ok_or_else(|| {
                SearchError::Computation("empty neighbor-count search range".to_string())
            })?;
            debug!(
                subset = %subset_name,
                rmse = subset_rmse,
                k = subset_k,
                "best neighbor count for subset"
            );

            if best
                .as_ref()
                .map_or(true, |(min_rmse, _, _)| subset_rmse < *min_rmse)
            {
                best = Some((subset_rmse, subset_name, subset_k));
            }
        }

        let (rmse, feature_names, k) = best.ok_or_else(|| {
            SearchError::ConfigError("no candidate feature combinations to search".to_string())
        })?;
        Ok(KnnReport {
            feature_names,
            rmse,
            k_neighbors_qty: k,
            k_folds_qty: self.config.fold_count,
            k_fold_cross_validation_toggle: self.config.use_kfold,
        })
    }

    /// Linear path: baseline over all training columns, then one
    /// evaluation per subset
    fn search_linear(
        &self,
        dataset: &Dataset,
        training_columns: &[String],
        combos: &[Vec<String>],
    ) -> Result<LinearReport> {
        let baseline_rmse = self.evaluate_linear(dataset, training_columns)?;
        debug!(rmse = baseline_rmse, "linear baseline over all training columns");

        let mut best: Option<(f64, String)> = None;
        for features in combos {
            let rmse = self.evaluate_linear(dataset, features)?;
            if best.as_ref().map_or(true, |(min_rmse, _)| rmse < *min_rmse) {
                best = Some((rmse, features.join(FEATURE_NAME_SEPARATOR)));
            }
        }
        let (rmse, feature_names) = best.ok_or_else(|| {
            SearchError::ConfigError("no candidate feature combinations to search".to_string())
        })?;

        Ok(LinearReport {
            pre_optimisation: ModelScore {
                model_type: "linear".to_string(),
                rmse: baseline_rmse,
            },
            post_optimisation: OptimisedScore {
                model_type: "linear".to_string(),
                feature_names,
                rmse,
                k_neighbors_qty: 1,
                k_folds_qty: self.config.fold_count,
                k_fold_cross_validation_toggle: self.config.use_kfold,
            },
        })
    }
}
