//! Feature scaling

use crate::dataset::{Dataset, Value};
use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Parameters for one fitted column
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScalerParams {
    center: f64, // mean
    scale: f64,  // sample standard deviation
}

/// Z-score scaler: (x − mean) / std per column.
///
/// Missing values are passed through untouched; the statistics are
/// computed over non-missing values only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    params: Vec<(String, ScalerParams)>,
    is_fitted: bool,
}

impl Default for Scaler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scaler {
    pub fn new() -> Self {
        Self {
            params: Vec::new(),
            is_fitted: false,
        }
    }

    /// Fit the scaler to the named columns
    pub fn fit(&mut self, dataset: &Dataset, columns: &[String]) -> Result<&mut Self> {
        self.params.clear();
        for name in columns {
            let values = dataset.column(name)?;
            let present: Vec<f64> = values.iter().filter_map(|v| v.as_f64()).collect();
            if present.is_empty() {
                return Err(SearchError::Computation(format!(
                    "column '{}' has no values to scale",
                    name
                )));
            }
            let n = present.len() as f64;
            let mean = present.iter().sum::<f64>() / n;
            let scale = if present.len() < 2 {
                1.0
            } else {
                let variance =
                    present.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
                let std = variance.sqrt();
                if std > 0.0 {
                    std
                } else {
                    1.0
                }
            };
            self.params
                .push((name.clone(), ScalerParams { center: mean, scale }));
        }
        self.is_fitted = true;
        Ok(self)
    }

    /// Scale the fitted columns in place
    pub fn transform(&self, dataset: &mut Dataset) -> Result<()> {
        if !self.is_fitted {
            return Err(SearchError::ModelNotFitted);
        }
        for (name, params) in &self.params {
            let position = dataset
                .column_index(name)
                .ok_or_else(|| SearchError::FeatureNotFound(name.clone()))?;
            let original = dataset.remove_column(name)?;
            let scaled: Vec<Value> = original
                .values
                .iter()
                .map(|v| match v.as_f64() {
                    Some(x) => Value::Real((x - params.center) / params.scale),
                    None => Value::Missing,
                })
                .collect();
            dataset.insert_columns(
                position,
                vec![crate::dataset::Column::new(name.clone(), scaled)],
            )?;
        }
        Ok(())
    }

    /// Fit and transform in one step
    pub fn fit_transform(&mut self, dataset: &mut Dataset, columns: &[String]) -> Result<()> {
        self.fit(dataset, columns)?;
        self.transform(dataset)
    }
}
