use sandbox::CaseValue;
use serde_json::Value;

/// Result of comparing one case's actual value against its expected value.
///
/// The renderings are compact JSON (`[0,1]`) or the sandbox's spelling of a
/// non-value (`undefined`), ready for the `Expected X, got Y` diff line.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub matched: bool,
    pub expected: String,
    pub actual: String,
}

/// ValueComparator is a strategy trait for judging a single test case.
/// Each implementation provides a specific notion of equality between the
/// expected literal and the value the candidate's entry point returned.
pub trait ValueComparator: Send + Sync {
    /// Compare one case, producing the match flag and both renderings.
    ///
    /// - `expected`: the parsed expected literal.
    /// - `actual`: what the sandboxed call returned.
    fn compare(&self, expected: &Value, actual: &CaseValue) -> Comparison;
}
