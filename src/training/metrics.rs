//! Regression error metrics

use crate::error::{Result, SearchError};

fn check_pairs(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.len() != predicted.len() {
        return Err(SearchError::Shape {
            expected: format!("{} predicted values", actual.len()),
            actual: format!("{} predicted values", predicted.len()),
        });
    }
    if actual.is_empty() {
        return Err(SearchError::Computation(
            "error metric over an empty pair set".to_string(),
        ));
    }
    Ok(())
}

/// MAE = mean of |actual − predicted|
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_pairs(actual, predicted)?;
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();
    Ok(sum / actual.len() as f64)
}

/// MSE = mean of (actual − predicted)²
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_pairs(actual, predicted)?;
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    Ok(sum / actual.len() as f64)
}

/// RMSE = sqrt(MSE)
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    Ok(mean_squared_error(actual, predicted)?.sqrt())
}
