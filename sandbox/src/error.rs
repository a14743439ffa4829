use thiserror::Error;

/// The candidate source contains no recognizable entry point.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no entry-point function found in source")]
    NoEntryPoint,
}

/// A test case's literal text could not be parsed.
#[derive(Debug, Error)]
pub enum LiteralError {
    #[error("malformed literal `{text}`: {source}")]
    Malformed {
        text: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure of one isolated case execution. Each variant is attributable to
/// the candidate's code and becomes a single failed-case verdict; none of
/// them abort the grading run.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The case exceeded its wall-clock budget.
    #[error("execution exceeded the {0}ms budget")]
    Timeout(u64),
    /// The candidate threw, failed to evaluate, or tripped a runtime limit.
    #[error("{0}")]
    Runtime(String),
    /// The call harness itself could not be assembled.
    #[error("failed to build call harness: {0}")]
    Harness(String),
}
