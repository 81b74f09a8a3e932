//! Set relationships between two parsed lists.

use serde::Serialize;
use thiserror::Error;

/// Validation failure raised before any comparison is computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("Please enter values for both lists.")]
    EmptyList,
}

/// Result of comparing list A with list B.
///
/// Membership is a presence test: every occurrence of a value in A is
/// common as soon as B holds that value once. This is not a multiset
/// intersection, so `common` can be longer than either side's share of B.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Values of A present in B, in A's order, A's duplicates kept.
    pub common: Vec<String>,
    /// Values of A absent from B.
    pub unique_to_a: Vec<String>,
    /// Values of B absent from A.
    pub unique_to_b: Vec<String>,
}

/// Compares two lists. Fails when either side is empty.
pub fn compare(list_a: &[String], list_b: &[String]) -> Result<Comparison, CompareError> {
    if list_a.is_empty() || list_b.is_empty() {
        return Err(CompareError::EmptyList);
    }

    let (common, unique_to_a): (Vec<String>, Vec<String>) = list_a
        .iter()
        .cloned()
        .partition(|value| list_b.contains(value));
    let unique_to_b = list_b
        .iter()
        .filter(|value| !list_a.contains(value))
        .cloned()
        .collect();

    Ok(Comparison {
        common,
        unique_to_a,
        unique_to_b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_disjoint_and_shared_values() {
        let result = compare(&list(&["a", "b"]), &list(&["b", "c"])).unwrap();
        assert_eq!(result.common, list(&["b"]));
        assert_eq!(result.unique_to_a, list(&["a"]));
        assert_eq!(result.unique_to_b, list(&["c"]));
    }

    #[test]
    fn test_presence_semantics_keep_every_occurrence_in_a() {
        let result = compare(&list(&["x", "y", "x"]), &list(&["x"])).unwrap();
        assert_eq!(result.common, list(&["x", "x"]));
        assert_eq!(result.unique_to_a, list(&["y"]));
        assert!(result.unique_to_b.is_empty());
    }

    #[test]
    fn test_empty_side_fails_validation() {
        assert_eq!(
            compare(&[], &list(&["a"])).unwrap_err(),
            CompareError::EmptyList
        );
        assert_eq!(
            compare(&list(&["a"]), &[]).unwrap_err(),
            CompareError::EmptyList
        );
        assert_eq!(compare(&[], &[]).unwrap_err(), CompareError::EmptyList);
    }

    #[test]
    fn test_case_sensitive_equality() {
        let result = compare(&list(&["Apple"]), &list(&["apple"])).unwrap();
        assert!(result.common.is_empty());
        assert_eq!(result.unique_to_a, list(&["Apple"]));
        assert_eq!(result.unique_to_b, list(&["apple"]));
    }

    proptest! {
        #[test]
        fn every_item_lands_in_exactly_one_bucket(
            a in prop::collection::vec("[a-e]", 1..20),
            b in prop::collection::vec("[a-e]", 1..20),
        ) {
            let result = compare(&a, &b).unwrap();
            prop_assert_eq!(result.common.len() + result.unique_to_a.len(), a.len());
            for value in &a {
                let in_common = result.common.contains(value);
                let in_unique = result.unique_to_a.contains(value);
                prop_assert!(in_common != in_unique);
            }
            for value in &b {
                let in_common = a.contains(value);
                let in_unique = result.unique_to_b.contains(value);
                prop_assert!(in_common != in_unique);
            }
        }
    }
}
