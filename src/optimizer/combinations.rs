//! Feature-subset enumeration

use tracing::error;

/// Enumerate every combination (order-insensitive, no repeats) of the
/// features with size `min_len..=features.len()`, flattened into one
/// sequence: smaller sizes first, lexicographic by input order within a
/// size.
///
/// A minimum length exceeding the feature count is reported as a
/// diagnostic and yields an empty sequence, so callers can detect the
/// no-candidates condition without aborting. The sequence size grows
/// combinatorially with the feature count; bounding it is the caller's
/// responsibility.
pub fn generate_combinations(features: &[String], min_len: usize) -> Vec<Vec<String>> {
    let n = features.len();
    if min_len > n {
        error!(
            min_len,
            n_features = n,
            "minimum combination length exceeds the number of features"
        );
        return Vec::new();
    }
    let min_len = min_len.max(1);

    let mut combos = Vec::new();
    for size in min_len..=n {
        push_combinations_of_size(features, size, &mut combos);
    }
    combos
}

fn push_combinations_of_size(features: &[String], size: usize, out: &mut Vec<Vec<String>>) {
    let n = features.len();
    let mut indices: Vec<usize> = (0..size).collect();
    loop {
        out.push(indices.iter().map(|&i| features[i].clone()).collect());

        // Advance to the next lexicographic index combination
        let mut i = size;
        loop {
            if i == 0 {
                return;
            }
            i -= 1;
            if indices[i] != i + n - size {
                break;
            }
            if i == 0 {
                return;
            }
        }
        indices[i] += 1;
        for j in i + 1..size {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_three_features_min_two() {
        let combos = generate_combinations(&names(&["A", "B", "C"]), 2);
        assert_eq!(
            combos,
            vec![
                names(&["A", "B"]),
                names(&["A", "C"]),
                names(&["B", "C"]),
                names(&["A", "B", "C"]),
            ]
        );
    }

    #[test]
    fn test_min_one_includes_singletons_first() {
        let combos = generate_combinations(&names(&["A", "B"]), 1);
        assert_eq!(
            combos,
            vec![names(&["A"]), names(&["B"]), names(&["A", "B"])]
        );
    }

    #[test]
    fn test_min_equal_to_count_yields_single_full_set() {
        let combos = generate_combinations(&names(&["A", "B", "C"]), 3);
        assert_eq!(combos, vec![names(&["A", "B", "C"])]);
    }

    #[test]
    fn test_violation_yields_empty_sequence() {
        let combos = generate_combinations(&names(&["A", "B"]), 3);
        assert!(combos.is_empty());
    }

    #[test]
    fn test_combination_count_for_four_features() {
        // C(4,2) + C(4,3) + C(4,4) = 6 + 4 + 1
        let combos = generate_combinations(&names(&["a", "b", "c", "d"]), 2);
        assert_eq!(combos.len(), 11);
    }
}
