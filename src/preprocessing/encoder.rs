//! Categorical-to-dummy column encoding

use crate::dataset::{Column, Dataset, Value};
use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// One-hot encoder for multi-class columns.
///
/// Each designated column is replaced in place by one binary column per
/// distinct category, in ascending category order, named by the first
/// three characters of the original column name plus the category value
/// (`cylinders` with category 3 becomes `cyl_3`). The training-column
/// list is updated contiguously where the original column stood, so
/// overall column order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DummyEncoder {
    // Column name -> distinct categories in ascending order
    mappings: Vec<(String, Vec<Value>)>,
    is_fitted: bool,
}

impl Default for DummyEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyEncoder {
    pub fn new() -> Self {
        Self {
            mappings: Vec::new(),
            is_fitted: false,
        }
    }

    /// Collect the distinct categories of each column to encode.
    ///
    /// Columns absent from the dataset are skipped, which makes a second
    /// pass over an already-transformed dataset a no-op.
    pub fn fit(&mut self, dataset: &Dataset, columns: &[String]) -> Result<&mut Self> {
        self.mappings.clear();
        for name in columns {
            if dataset.column_index(name).is_none() {
                continue;
            }
            let values = dataset.column(name)?;
            let mut categories: Vec<Value> =
                values.iter().copied().filter(|v| !v.is_missing()).collect();
            categories.sort_by(|a, b| a.compare(b));
            categories.dedup();
            self.mappings.push((name.clone(), categories));
        }
        self.is_fitted = true;
        Ok(self)
    }

    /// Replace each fitted column with its dummy columns and substitute
    /// the new names into the training-column list in place.
    pub fn transform(
        &self,
        dataset: &mut Dataset,
        training_columns: &mut Vec<String>,
    ) -> Result<()> {
        if !self.is_fitted {
            return Err(SearchError::ModelNotFitted);
        }

        for (name, categories) in &self.mappings {
            let Some(position) = dataset.column_index(name) else {
                continue;
            };
            let original = dataset.remove_column(name)?;
            let prefix: String = name.chars().take(3).collect();

            let mut dummies = Vec::with_capacity(categories.len());
            for category in categories {
                let dummy_name = format!("{}_{}", prefix, category);
                let values: Vec<Value> = original
                    .values
                    .iter()
                    .map(|v| Value::Integer(if v == category { 1 } else { 0 }))
                    .collect();
                dummies.push(Column::new(dummy_name, values));
            }
            let dummy_names: Vec<String> = dummies.iter().map(|c| c.name.clone()).collect();
            dataset.insert_columns(position, dummies)?;

            if let Some(train_pos) = training_columns.iter().position(|c| c == name) {
                training_columns.splice(train_pos..train_pos + 1, dummy_names);
            }
        }

        Ok(())
    }

    /// Fit and transform in one step
    pub fn fit_transform(
        &mut self,
        dataset: &mut Dataset,
        columns: &[String],
        training_columns: &mut Vec<String>,
    ) -> Result<()> {
        self.fit(dataset, columns)?;
        self.transform(dataset, training_columns)
    }
}
