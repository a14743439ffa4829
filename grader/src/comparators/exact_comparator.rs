//! A comparator that requires strict value equality.
//!
//! Useful for problems whose outputs are purely integral or textual, where
//! no floating-point tolerance should be granted: `2` and `2.0` are
//! different values here.

use crate::traits::comparator::{Comparison, ValueComparator};
use sandbox::CaseValue;
use serde_json::Value;

pub struct ExactComparator;

impl ValueComparator for ExactComparator {
    fn compare(&self, expected: &Value, actual: &CaseValue) -> Comparison {
        let matched = matches!(actual, CaseValue::Json(value) if value == expected);
        Comparison {
            matched,
            expected: expected.to_string(),
            actual: actual.display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compare(expected: Value, actual: CaseValue) -> Comparison {
        ExactComparator.compare(&expected, &actual)
    }

    #[test]
    fn test_exact_match() {
        assert!(compare(json!([0, 1]), CaseValue::Json(json!([0, 1]))).matched);
        assert!(compare(json!({"k": "v"}), CaseValue::Json(json!({"k": "v"}))).matched);
    }

    #[test]
    fn test_no_numeric_tolerance() {
        assert!(!compare(json!(2.5), CaseValue::Json(json!(2.4999999))).matched);
    }

    #[test]
    fn test_undefined_fails() {
        let result = compare(json!(1), CaseValue::Undefined);
        assert!(!result.matched);
        assert_eq!(result.actual, "undefined");
    }
}
