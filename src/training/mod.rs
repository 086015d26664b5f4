//! Model training and evaluation
//!
//! Distance computation, the nearest-neighbor regressor, ordinary least
//! squares, regression error metrics, and the k-fold cross-validation
//! harness.

pub mod cross_validation;
pub mod distance;
pub mod knn;
pub mod linear_models;
pub mod metrics;

pub use cross_validation::{cross_validate, holdout_rmse, CVSplit, CrossValidator};
pub use distance::{scalar_distance, MISSING_DISTANCE};
pub use knn::KnnRegressor;
pub use linear_models::LinearRegression;
pub use metrics::{mean_absolute_error, mean_squared_error, root_mean_squared_error};
