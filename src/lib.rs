//! predsearch - model evaluation and hyperparameter search over tabular data
//!
//! This crate answers "which feature combination and hyperparameter
//! setting best predicts a target column" for a fixed dataset. It
//! evaluates distance-weighted nearest-neighbor averaging and linear
//! regression, searches the Cartesian product of feature subsets and the
//! neighbor count k for the minimum RMSE, and validates/transforms input
//! columns (defaulting, categorical-target type checks, one-hot
//! expansion) before any training happens.
//!
//! # Modules
//!
//! - [`dataset`] - Ordered tabular container with a typed value model
//! - [`preprocessing`] - Column validation, dummy encoding, scaling
//! - [`training`] - Distance, nearest-neighbor and linear models, error
//!   metrics, cross-validation harness
//! - [`optimizer`] - Feature-subset enumeration and the search loop
//!
//! CLI parsing, file loading, plotting, and result printing are external
//! collaborators: they build a [`config::SearchConfig`] and a
//! [`dataset::Dataset`], call [`optimizer::SearchEngine::run`], and
//! consume the returned [`optimizer::SearchResults`].

pub mod config;
pub mod dataset;
pub mod error;
pub mod optimizer;
pub mod preprocessing;
pub mod training;

pub use error::{Result, SearchError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::SearchConfig;
    pub use crate::dataset::{Column, Dataset, Value};
    pub use crate::error::{Result, SearchError};
    pub use crate::optimizer::{
        generate_combinations, KnnReport, LinearReport, SearchEngine, SearchResults,
        FEATURE_NAME_SEPARATOR,
    };
    pub use crate::preprocessing::{resolve_training_columns, DummyEncoder, Scaler};
    pub use crate::training::{
        cross_validate, holdout_rmse, mean_absolute_error, mean_squared_error,
        root_mean_squared_error, scalar_distance, CrossValidator, KnnRegressor, LinearRegression,
        MISSING_DISTANCE,
    };
}
