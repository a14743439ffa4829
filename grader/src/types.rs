//! Core data structures shared across the grader.

use serde::Serialize;

/// Overall outcome of one grading run: accepted iff every case passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Accepted,
    Failed,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Accepted => "Accepted",
            Verdict::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of one executed test case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    /// 1-based case number, matching the order of the problem's test cases.
    pub number: usize,
    pub passed: bool,
    /// The log line reported for this case.
    pub message: String,
}
