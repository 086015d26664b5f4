//! Integration test: full search end-to-end

use predsearch::prelude::*;

/// Synthetic car-listings dataset: mpg falls with weight and rises with
/// model year; acceleration is weakly informative and has gaps.
fn car_dataset() -> Dataset {
    let n = 60;
    let weight: Vec<f64> = (0..n).map(|i| 1500.0 + ((i * 53) % 97) as f64 * 25.0).collect();
    let model_year: Vec<f64> = (0..n).map(|i| 70.0 + (i % 13) as f64).collect();
    let acceleration: Vec<f64> = (0..n)
        .map(|i| {
            if i % 9 == 0 {
                f64::NAN
            } else {
                10.0 + ((i * 31) % 17) as f64 * 0.5
            }
        })
        .collect();
    let mpg: Vec<f64> = weight
        .iter()
        .zip(model_year.iter())
        .enumerate()
        .map(|(i, (w, y))| 55.0 - w / 100.0 + (y - 70.0) * 0.7 + ((i * 7) % 5) as f64 * 0.3)
        .collect();

    Dataset::new(vec![
        Column::from_f64("weight", &weight),
        Column::from_f64("model-year", &model_year),
        Column::from_f64("acceleration", &acceleration),
        Column::from_f64("mpg", &mpg),
    ])
    .unwrap()
}

#[test]
fn test_linear_and_knn_requested_together() {
    let mut ds = car_dataset();
    let config = SearchConfig::new("mpg")
        .with_fold_count(10)
        .with_k_max(20)
        .with_linear(true)
        .with_seed(1);

    let results = SearchEngine::new(config).run(&mut ds).unwrap();

    let knn = results.knn.as_ref().expect("knn branch present");
    assert!(knn.rmse.is_finite() && knn.rmse >= 0.0);
    assert!((1..=20).contains(&knn.k_neighbors_qty));
    assert_eq!(knn.k_folds_qty, 10);
    assert!(knn.k_fold_cross_validation_toggle);
    assert!(!knn.feature_names.is_empty());

    let linear = results.linear.as_ref().expect("linear branch present");
    assert!(linear.pre_optimisation.rmse.is_finite() && linear.pre_optimisation.rmse >= 0.0);
    assert!(linear.post_optimisation.rmse.is_finite() && linear.post_optimisation.rmse >= 0.0);
    assert_eq!(linear.post_optimisation.model_type, "linear");
    assert_eq!(linear.post_optimisation.k_folds_qty, 10);
}

#[test]
fn test_unrequested_branches_are_null() {
    let mut ds = car_dataset();
    let config = SearchConfig::new("mpg").with_fold_count(5).with_k_max(3).with_seed(1);
    let results = SearchEngine::new(config).run(&mut ds).unwrap();

    assert!(results.knn.is_some());
    assert!(results.linear.is_none());

    let json = serde_json::to_value(&results).unwrap();
    assert!(json["linear"].is_null());
    assert!(json.get("knn").is_some());
}

#[test]
fn test_subset_identifier_joins_feature_names() {
    let mut ds = car_dataset();
    let config = SearchConfig::new("mpg")
        .with_fold_count(5)
        .with_k_max(3)
        .with_min_combination_len(3)
        .with_seed(1);
    let results = SearchEngine::new(config).run(&mut ds).unwrap();

    // Only one combination of size 3 exists, so the winner is known
    let knn = results.knn.unwrap();
    assert_eq!(
        knn.feature_names,
        ["weight", "model-year", "acceleration"].join(FEATURE_NAME_SEPARATOR)
    );
}

#[test]
fn test_dummy_encoded_search() {
    // Categorical cylinders column expanded before the search
    let cylinders: Vec<i64> = (0..40).map(|i| [4, 6, 8][i % 3]).collect();
    let mpg: Vec<f64> = cylinders.iter().map(|&c| 45.0 - 3.0 * c as f64).collect();
    let mut ds = Dataset::new(vec![
        Column::from_i64("cylinders", &cylinders),
        Column::from_f64("mpg", &mpg),
    ])
    .unwrap();

    let config = SearchConfig::new("mpg")
        .with_multi_class_columns(vec!["cylinders".to_string()])
        .with_fold_count(4)
        .with_k_max(3)
        .with_seed(1);
    let results = SearchEngine::new(config).run(&mut ds).unwrap();

    assert_eq!(ds.column_names(), vec!["cyl_4", "cyl_6", "cyl_8", "mpg"]);
    let knn = results.knn.unwrap();
    // mpg is fully determined by cylinders, so some dummy subset predicts
    // with near-zero error
    assert!(knn.rmse < 1e-9, "rmse = {}", knn.rmse);
    assert!(knn.feature_names.contains("cyl_"));
}

#[test]
fn test_fold_count_exceeding_rows_fails() {
    let mut ds = Dataset::new(vec![
        Column::from_f64("x", &[1.0, 2.0, 3.0]),
        Column::from_f64("y", &[1.0, 2.0, 3.0]),
    ])
    .unwrap();
    let config = SearchConfig::new("y").with_fold_count(10).with_k_max(2).with_seed(1);
    let result = SearchEngine::new(config).run(&mut ds);
    assert!(matches!(result, Err(SearchError::Computation(_))));
}
