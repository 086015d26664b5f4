//! Pairwise scalar distance with a missing-value sentinel

use crate::dataset::Value;

/// Distance substituted when either compared value is missing.
///
/// Must exceed any legitimate aggregate distance the dataset can produce,
/// so rows with missing values sort last among neighbors without being
/// excluded from consideration and without breaking any comparison.
pub const MISSING_DISTANCE: f64 = 1.0e12;

/// One-dimensional Euclidean distance between two values.
///
/// Non-missing pair: |a − b|. Either value missing: [`MISSING_DISTANCE`].
pub fn scalar_distance(a: Value, b: Value) -> f64 {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => (x - y).abs(),
        _ => MISSING_DISTANCE,
    }
}

/// Aggregate distance between two observations over a feature subset:
/// the sum of per-feature scalar distances. `features` holds one column
/// slice per feature; both row indices must be in bounds.
pub fn aggregate_distance(features: &[&[Value]], row_a: usize, row_b: usize) -> f64 {
    features
        .iter()
        .map(|col| scalar_distance(col[row_a], col[row_b]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_absolute_difference() {
        assert_eq!(scalar_distance(Value::Real(7.5), Value::Real(2.5)), 5.0);
        assert_eq!(scalar_distance(Value::Integer(2), Value::Integer(5)), 3.0);
        assert_eq!(scalar_distance(Value::Integer(4), Value::Real(4.0)), 0.0);
    }

    #[test]
    fn test_missing_value_yields_sentinel() {
        assert_eq!(scalar_distance(Value::Missing, Value::Real(1.0)), MISSING_DISTANCE);
        assert_eq!(scalar_distance(Value::Real(1.0), Value::Missing), MISSING_DISTANCE);
        assert_eq!(scalar_distance(Value::Missing, Value::Missing), MISSING_DISTANCE);
    }

    #[test]
    fn test_sentinel_dominates_finite_distances() {
        // Any plausible dataset distance stays well below the sentinel
        assert!(scalar_distance(Value::Real(-1.0e6), Value::Real(1.0e6)) < MISSING_DISTANCE);
    }

    #[test]
    fn test_aggregate_sums_per_feature_distances() {
        let f1 = [Value::Real(1.0), Value::Real(4.0)];
        let f2 = [Value::Real(10.0), Value::Real(12.0)];
        let features: Vec<&[Value]> = vec![&f1, &f2];
        assert_eq!(aggregate_distance(&features, 0, 1), 3.0 + 2.0);
    }
}
