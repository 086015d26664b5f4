//! Run configuration for the search engine

use serde::{Deserialize, Serialize};

/// Immutable configuration for one evaluation/search run.
///
/// Owned by the caller (CLI or config layer); the engine only reads it.
/// An empty `training_columns` list means "all dataset columns except the
/// target", resolved during validation in dataset column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Name of the column being predicted
    pub target_column: String,
    /// Candidate feature columns (empty = all except target)
    pub training_columns: Vec<String>,
    /// Columns to expand into one-hot dummy columns before training
    pub multi_class_columns: Vec<String>,
    /// Minimum size of any feature combination considered
    pub min_combination_len: usize,
    /// Number of cross-validation folds
    pub fold_count: usize,
    /// Upper bound of the neighbor-count search range (k in 1..=k_max)
    pub k_max: usize,
    /// Evaluate the linear-regression path
    pub use_linear: bool,
    /// Evaluate the nearest-neighbor path
    pub use_knn: bool,
    /// Use k-fold cross-validation instead of a single holdout split
    pub use_kfold: bool,
    /// Require a categorical (integral) target column
    pub use_logistic_target: bool,
    /// Seed for the one-time row shuffle; folds derive from this order
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target_column: String::new(),
            training_columns: Vec::new(),
            multi_class_columns: Vec::new(),
            min_combination_len: 1,
            fold_count: 10,
            k_max: 20,
            use_linear: false,
            use_knn: true,
            use_kfold: true,
            use_logistic_target: false,
            seed: 1,
        }
    }
}

impl SearchConfig {
    /// Create a configuration for the given target column
    pub fn new(target_column: impl Into<String>) -> Self {
        Self {
            target_column: target_column.into(),
            ..Default::default()
        }
    }

    /// Set the candidate training columns
    pub fn with_training_columns(mut self, columns: Vec<String>) -> Self {
        self.training_columns = columns;
        self
    }

    /// Set the columns to one-hot encode
    pub fn with_multi_class_columns(mut self, columns: Vec<String>) -> Self {
        self.multi_class_columns = columns;
        self
    }

    /// Set the minimum feature-combination length
    pub fn with_min_combination_len(mut self, len: usize) -> Self {
        self.min_combination_len = len;
        self
    }

    /// Set the number of folds
    pub fn with_fold_count(mut self, folds: usize) -> Self {
        self.fold_count = folds;
        self
    }

    /// Set the neighbor-count search upper bound
    pub fn with_k_max(mut self, k_max: usize) -> Self {
        self.k_max = k_max;
        self
    }

    /// Toggle the linear-model path
    pub fn with_linear(mut self, enabled: bool) -> Self {
        self.use_linear = enabled;
        self
    }

    /// Toggle the nearest-neighbor path
    pub fn with_knn(mut self, enabled: bool) -> Self {
        self.use_knn = enabled;
        self
    }

    /// Toggle k-fold cross-validation
    pub fn with_kfold(mut self, enabled: bool) -> Self {
        self.use_kfold = enabled;
        self
    }

    /// Require an integral (categorical) target column
    pub fn with_logistic_target(mut self, enabled: bool) -> Self {
        self.use_logistic_target = enabled;
        self
    }

    /// Set the shuffle seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
