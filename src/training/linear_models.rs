//! Linear model implementation

use crate::dataset::Dataset;
use crate::error::{Result, SearchError};
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// Solve symmetric positive-definite system Ax = b using Cholesky decomposition
fn cholesky_solve(a: &Array2<f64>, b: &Array1<f64>) -> Option<Array1<f64>> {
    let n = a.nrows();
    if n != a.ncols() || n != b.len() {
        return None;
    }

    // A = L * L^T
    let mut l = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let mut sum = 0.0;
            for k in 0..j {
                sum += l[[i, k]] * l[[j, k]];
            }
            if i == j {
                let diag = a[[i, i]] - sum;
                if diag <= 0.0 {
                    return None; // not positive definite
                }
                l[[i, j]] = diag.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }

    // Forward substitution: L * y = b
    let mut y = Array1::zeros(n);
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..i {
            sum += l[[i, j]] * y[j];
        }
        y[i] = (b[i] - sum) / l[[i, i]];
    }

    // Backward substitution: L^T * x = y
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += l[[j, i]] * x[j];
        }
        x[i] = (y[i] - sum) / l[[i, i]];
    }

    Some(x)
}

/// Gauss-Jordan matrix inversion fallback for near-singular systems
fn matrix_inverse(m: &Array2<f64>) -> Option<Array2<f64>> {
    let n = m.nrows();
    if n != m.ncols() {
        return None;
    }

    // Augmented matrix [M | I]
    let mut aug = Array2::zeros((n, 2 * n));
    for i in 0..n {
        for j in 0..n {
            aug[[i, j]] = m[[i, j]];
        }
        aug[[i, n + i]] = 1.0;
    }

    for col in 0..n {
        // Partial pivot
        let mut max_row = col;
        for row in col + 1..n {
            if aug[[row, col]].abs() > aug[[max_row, col]].abs() {
                max_row = row;
            }
        }
        if max_row != col {
            for j in 0..2 * n {
                let tmp = aug[[col, j]];
                aug[[col, j]] = aug[[max_row, j]];
                aug[[max_row, j]] = tmp;
            }
        }
        if aug[[col, col]].abs() < 1e-10 {
            return None;
        }
        let pivot = aug[[col, col]];
        for j in 0..2 * n {
            aug[[col, j]] /= pivot;
        }
        for row in 0..n {
            if row != col {
                let factor = aug[[row, col]];
                for j in 0..2 * n {
                    aug[[row, j]] -= factor * aug[[col, j]];
                }
            }
        }
    }

    let mut inv = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            inv[[i, j]] = aug[[i, n + j]];
        }
    }
    Some(inv)
}

/// Solve least squares via normal equations: (X^T X) w = X^T y.
/// Cholesky first, Gauss-Jordan fallback.
fn solve_least_squares(x: &Array2<f64>, y: &Array1<f64>) -> Option<Array1<f64>> {
    let xtx = x.t().dot(x);
    let xty = x.t().dot(y);

    if let Some(result) = cholesky_solve(&xtx, &xty) {
        return Some(result);
    }
    matrix_inverse(&xtx).map(|inv| inv.dot(&xty))
}

/// Ordinary-least-squares linear regression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Fitted coefficients (weights)
    pub coefficients: Option<Array1<f64>>,
    /// Fitted intercept (bias)
    pub intercept: Option<f64>,
    /// Whether model is fitted
    pub is_fitted: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            is_fitted: false,
        }
    }

    /// Fit the model to training data
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<&mut Self> {
        let n_samples = x.nrows();
        if n_samples != y.len() {
            return Err(SearchError::Shape {
                expected: format!("y length = {}", n_samples),
                actual: format!("y length = {}", y.len()),
            });
        }
        if n_samples == 0 {
            return Err(SearchError::Computation(
                "cannot fit a linear model on zero rows".to_string(),
            ));
        }

        // Center data so the intercept falls out of the means
        let x_mean = x.mean_axis(Axis(0)).ok_or_else(|| {
            SearchError::Computation("failed to compute feature means".to_string())
        })?;
        let y_mean = y.mean().unwrap_or(0.0);
        let x_centered = x - &x_mean.clone().insert_axis(Axis(0));
        let y_centered = y - y_mean;

        let coefficients = solve_least_squares(&x_centered, &y_centered).ok_or_else(|| {
            SearchError::Computation("matrix is singular, cannot solve least squares".to_string())
        })?;

        self.intercept = Some(y_mean - coefficients.dot(&x_mean));
        self.coefficients = Some(coefficients);
        self.is_fitted = true;
        Ok(self)
    }

    /// Make predictions
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let coefficients = self
            .coefficients
            .as_ref()
            .ok_or(SearchError::ModelNotFitted)?;
        let intercept = self.intercept.unwrap_or(0.0);
        Ok(x.dot(coefficients) + intercept)
    }
}

/// Fit an OLS model on the training rows and predict every test row of a
/// dataset, restricted to the given feature subset.
///
/// Rows with any missing value among the features or target are dropped
/// from training; test rows with a missing feature value predict as NaN
/// (the harness drops non-finite predictions from the error pairs).
pub fn fit_predict_rows(
    dataset: &Dataset,
    features: &[String],
    target: &str,
    train_rows: &[usize],
    test_rows: &[usize],
) -> Result<Vec<f64>> {
    let feature_cols = features
        .iter()
        .map(|name| dataset.column(name))
        .collect::<Result<Vec<_>>>()?;
    let target_col = dataset.column(target)?;

    let mut x_data = Vec::new();
    let mut y_data = Vec::new();
    for &row in train_rows {
        let Some(t) = target_col[row].as_f64() else {
            continue;
        };
        let values: Option<Vec<f64>> = feature_cols.iter().map(|col| col[row].as_f64()).collect();
        if let Some(values) = values {
            x_data.extend(values);
            y_data.push(t);
        }
    }
    if y_data.is_empty() {
        return Err(SearchError::Computation(
            "no fully-observed training rows for the linear model".to_string(),
        ));
    }

    let x = Array2::from_shape_vec((y_data.len(), features.len()), x_data).map_err(|e| {
        SearchError::Shape {
            expected: format!("{}x{} design matrix", y_data.len(), features.len()),
            actual: e.to_string(),
        }
    })?;
    let y = Array1::from_vec(y_data);

    let mut model = LinearRegression::new();
    model.fit(&x, &y)?;

    let coefficients = model
        .coefficients
        .as_ref()
        .ok_or(SearchError::ModelNotFitted)?;
    let intercept = model.intercept.unwrap_or(0.0);

    let predictions = test_rows
        .iter()
        .map(|&row| {
            let values: Option<Vec<f64>> =
                feature_cols.iter().map(|col| col[row].as_f64()).collect();
            match values {
                Some(values) => {
                    values
                        .iter()
                        .zip(coefficients.iter())
                        .map(|(v, c)| v * c)
                        .sum::<f64>()
                        + intercept
                }
                None => f64::NAN,
            }
        })
        .collect();

    Ok(predictions)
}
