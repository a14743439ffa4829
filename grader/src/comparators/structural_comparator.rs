//! The default comparator: recursive structural equality.
//!
//! Scalars must be equal; sequences must have equal length with pairwise
//! equal elements in order; mappings must have equal key sets with pairwise
//! equal values, key order irrelevant. Numbers compare exactly when both
//! sides are integral and within a small epsilon otherwise, so an expected
//! `"2.50000"` accepts a computed `2.5`.

use crate::traits::comparator::{Comparison, ValueComparator};
use sandbox::CaseValue;
use serde_json::Value;

pub struct StructuralComparator {
    epsilon: f64,
}

impl StructuralComparator {
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl Default for StructuralComparator {
    fn default() -> Self {
        Self { epsilon: 1e-6 }
    }
}

impl ValueComparator for StructuralComparator {
    fn compare(&self, expected: &Value, actual: &CaseValue) -> Comparison {
        let matched = match actual {
            CaseValue::Json(value) => values_match(expected, value, self.epsilon),
            // `undefined` and unserializable returns never match a literal.
            _ => false,
        };
        Comparison {
            matched,
            expected: expected.to_string(),
            actual: actual.display(),
        }
    }
}

fn values_match(expected: &Value, actual: &Value, epsilon: f64) -> bool {
    match (expected, actual) {
        (Value::Number(e), Value::Number(a)) => numbers_match(e, a, epsilon),
        (Value::Array(e), Value::Array(a)) => {
            e.len() == a.len()
                && e.iter()
                    .zip(a.iter())
                    .all(|(x, y)| values_match(x, y, epsilon))
        }
        (Value::Object(e), Value::Object(a)) => {
            e.len() == a.len()
                && e.iter()
                    .all(|(key, value)| a.get(key).is_some_and(|w| values_match(value, w, epsilon)))
        }
        _ => expected == actual,
    }
}

fn numbers_match(expected: &serde_json::Number, actual: &serde_json::Number, epsilon: f64) -> bool {
    if let (Some(e), Some(a)) = (expected.as_i64(), actual.as_i64()) {
        return e == a;
    }
    match (expected.as_f64(), actual.as_f64()) {
        (Some(e), Some(a)) => (e - a).abs() <= epsilon,
        _ => expected == actual,
    }
}
