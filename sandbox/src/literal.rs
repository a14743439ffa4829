//! Parsing of test-case literal text.
//!
//! Test cases store their inputs and expected outputs as textual literal
//! expressions (`"[2,7,11,15], 9"`, `"[0,1]"`). The literal grammar is JSON:
//! an input is a comma-separated sequence of JSON values forming the
//! positional argument list, an output is a single JSON value. Parsing here
//! keeps problem data out of the interpreter entirely.

use crate::error::LiteralError;
use serde_json::Value;

/// Parse a test case's `input` text as a positional argument list.
///
/// The text is wrapped in `[...]` and parsed as one JSON array, so
/// `"[2,7,11,15], 9"` yields two arguments and an empty string yields a
/// zero-argument call.
pub fn parse_argument_list(input: &str) -> Result<Vec<Value>, LiteralError> {
    let wrapped = format!("[{}]", input.trim());
    serde_json::from_str(&wrapped).map_err(|source| LiteralError::Malformed {
        text: input.to_string(),
        source,
    })
}

/// Parse a test case's `output` text as the single expected return value.
pub fn parse_value(text: &str) -> Result<Value, LiteralError> {
    serde_json::from_str(text.trim()).map_err(|source| LiteralError::Malformed {
        text: text.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_and_scalar_arguments() {
        let args = parse_argument_list("[2,7,11,15], 9").unwrap();
        assert_eq!(args, vec![json!([2, 7, 11, 15]), json!(9)]);
    }

    #[test]
    fn test_single_argument() {
        let args = parse_argument_list("\"hello\"").unwrap();
        assert_eq!(args, vec![json!("hello")]);
    }

    #[test]
    fn test_empty_input_is_zero_arguments() {
        assert!(parse_argument_list("").unwrap().is_empty());
        assert!(parse_argument_list("   ").unwrap().is_empty());
    }

    #[test]
    fn test_nested_structures() {
        let args = parse_argument_list("{\"a\": [1, 2]}, [[3], [4]]").unwrap();
        assert_eq!(args, vec![json!({"a": [1, 2]}), json!([[3], [4]])]);
    }

    #[test]
    fn test_malformed_argument_list() {
        assert!(parse_argument_list("[1, 2,").is_err());
        assert!(parse_argument_list("nums => nums").is_err());
    }

    #[test]
    fn test_expected_value() {
        assert_eq!(parse_value("[0,1]").unwrap(), json!([0, 1]));
        assert_eq!(parse_value(" true ").unwrap(), json!(true));
        assert_eq!(parse_value("2.50000").unwrap(), json!(2.5));
    }

    #[test]
    fn test_malformed_expected_value() {
        assert!(parse_value("").is_err());
        assert!(parse_value("[0,1], [2,3]").is_err());
    }
}
