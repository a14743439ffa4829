//! # Run Report Module
//!
//! Serializable result of one grading run: the verdict, the ordered
//! per-case log, and the structured case outcomes. [`RunReportResponse`]
//! wraps a report in the success/message envelope callers present to users.

use crate::types::{CaseOutcome, Verdict};
use serde::Serialize;

/// Final report of one grading run.
///
/// - `verdict`: `Accepted` iff every case passed.
/// - `log`: ordered, one line per executed case, or the single resolver
///   line when no entry point was found.
/// - `cases`: structured per-case outcomes in the same order as `log`.
/// - `created_at`: RFC 3339 timestamp of when the report was produced.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub verdict: Verdict,
    pub log: Vec<String>,
    pub cases: Vec<CaseOutcome>,
    pub created_at: String,
}

impl RunReport {
    pub fn accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}

/// The response envelope for grading results.
#[derive(Debug, Serialize)]
pub struct RunReportResponse {
    success: bool,
    message: String,
    data: RunReport,
}

impl From<RunReport> for RunReportResponse {
    fn from(report: RunReport) -> Self {
        RunReportResponse {
            success: true,
            message: "Grading complete.".to_string(),
            data: report,
        }
    }
}
