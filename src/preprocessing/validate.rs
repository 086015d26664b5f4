//! Pre-search column validation
//!
//! Fails fast before any search work begins: configuration and
//! type-constraint violations surface here, never mid-search.

use crate::config::SearchConfig;
use crate::dataset::Dataset;
use crate::error::{Result, SearchError};

/// Resolve and validate the training-column list for a run.
///
/// An empty configured list defaults to every dataset column except the
/// target, preserving dataset column order. The resolved list must be at
/// least as long as the minimum combination length, and when a logistic
/// (categorical) target is requested the target column must hold only
/// integral values.
pub fn resolve_training_columns(dataset: &Dataset, config: &SearchConfig) -> Result<Vec<String>> {
    let target = dataset.column(&config.target_column)?;

    let training: Vec<String> = if config.training_columns.is_empty() {
        dataset
            .column_names()
            .into_iter()
            .filter(|name| *name != config.target_column)
            .collect()
    } else {
        for name in &config.training_columns {
            dataset.column(name)?;
        }
        config.training_columns.clone()
    };

    if training.is_empty() {
        return Err(SearchError::ConfigError(
            "no training columns available after excluding the target column".to_string(),
        ));
    }

    if training.len() < config.min_combination_len {
        return Err(SearchError::ConfigError(format!(
            "minimum combination length ({}) exceeds available training columns ({})",
            config.min_combination_len,
            training.len()
        )));
    }

    if config.use_logistic_target {
        let non_integral = target.iter().any(|v| !v.is_integer());
        if non_integral {
            return Err(SearchError::TypeConstraint(format!(
                "target column '{}' must hold integral categories for a logistic target",
                config.target_column
            )));
        }
    }

    Ok(training)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Column;

    fn five_column_dataset() -> Dataset {
        Dataset::new(vec![
            Column::from_f64("col1", &[1.1, 1.1, 1.1]),
            Column::from_f64("col2", &[f64::NAN, f64::NAN, f64::NAN]),
            Column::from_f64("col3", &[2.2, 2.2, 2.2]),
            Column::from_i64("col4", &[2, 2, 2]),
            Column::from_f64("col5", &[f64::NAN, f64::NAN, f64::NAN]),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_training_columns_default_to_all_but_target() {
        let ds = five_column_dataset();
        let config = SearchConfig::new("col4");
        let training = resolve_training_columns(&ds, &config).unwrap();
        assert_eq!(training, vec!["col1", "col2", "col3", "col5"]);
    }

    #[test]
    fn test_min_combination_length_violation() {
        let ds = five_column_dataset();
        let config = SearchConfig::new("col4")
            .with_training_columns(vec!["col1".to_string(), "col2".to_string()])
            .with_min_combination_len(3);
        let result = resolve_training_columns(&ds, &config);
        assert!(matches!(result, Err(SearchError::ConfigError(_))));
    }

    #[test]
    fn test_logistic_target_requires_integral_values() {
        let ds = five_column_dataset();

        // col4 is integral, accepted
        let config = SearchConfig::new("col4").with_logistic_target(true);
        assert!(resolve_training_columns(&ds, &config).is_ok());

        // col3 is real-valued, rejected
        let config = SearchConfig::new("col3").with_logistic_target(true);
        let result = resolve_training_columns(&ds, &config);
        assert!(matches!(result, Err(SearchError::TypeConstraint(_))));
    }

    #[test]
    fn test_unknown_target_column() {
        let ds = five_column_dataset();
        let config = SearchConfig::new("nope");
        assert!(matches!(
            resolve_training_columns(&ds, &config),
            Err(SearchError::FeatureNotFound(_))
        ));
    }

    #[test]
    fn test_unknown_training_column() {
        let ds = five_column_dataset();
        let config =
            SearchConfig::new("col4").with_training_columns(vec!["col1".to_string(), "ghost".to_string()]);
        assert!(matches!(
            resolve_training_columns(&ds, &config),
            Err(SearchError::FeatureNotFound(_))
        ));
    }
}
