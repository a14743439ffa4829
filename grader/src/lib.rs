//! # Grader Library
//!
//! Core logic for grading coding-interview submissions. A submission is a
//! block of candidate JavaScript; grading resolves its entry point, executes
//! it against the problem's literal test cases in the sandbox, compares each
//! result structurally, and folds the per-case outcomes into a single
//! Accepted/Failed verdict.
//!
//! ## Key Concepts
//! - **GradingJob**: one run of one source blob against one problem's cases.
//! - **Comparators**: pluggable equality strategies (structural by default).
//! - **Run vs submit**: `run` only reports; `submit` re-grades and persists a
//!   submission row only when the verdict is Accepted.

pub mod comparators;
pub mod error;
pub mod report;
pub mod traits;
pub mod types;

use crate::comparators::structural_comparator::StructuralComparator;
use crate::error::GraderError;
use crate::report::RunReport;
use crate::traits::comparator::ValueComparator;
use crate::types::{CaseOutcome, Verdict};

use chrono::Utc;
use db::models::problem::{self, TestCase};
use db::models::submission::{self, SubmissionStatus};
use sandbox::{literal, resolver, ExecError, ExecutionLimits};
use sea_orm::DatabaseConnection;
use serde_json::Value;

/// The single log line reported when the resolver finds nothing callable.
pub const NO_ENTRY_POINT_MESSAGE: &str = "Could not find function name in code.";

/// Represents one grading run of a candidate's source against a problem's
/// test cases.
///
/// Defaults to the structural comparator and the standard execution limits;
/// both can be overridden builder-style before calling [`run`](Self::run).
pub struct GradingJob<'a> {
    code: String,
    cases: Vec<TestCase>,
    limits: ExecutionLimits,
    comparator: Box<dyn ValueComparator + Send + Sync + 'a>,
}

impl<'a> GradingJob<'a> {
    /// Create a new grading job for `code` against the given cases.
    pub fn new(code: impl Into<String>, cases: Vec<TestCase>) -> Self {
        Self {
            code: code.into(),
            cases,
            limits: ExecutionLimits::default(),
            comparator: Box::new(StructuralComparator::default()),
        }
    }

    /// Set a custom comparator strategy for this job.
    pub fn with_comparator<C: ValueComparator + 'a>(mut self, comparator: C) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Override the per-case execution limits.
    pub fn with_limits(mut self, limits: ExecutionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Run the grading process.
    ///
    /// # Steps
    /// 1. Parses every case's literals up front; a malformed definition is
    ///    the problem's data failing, not the candidate's, and aborts with
    ///    [`GraderError::InvalidTestCase`].
    /// 2. Resolves the entry point; absence short-circuits to a Failed
    ///    report whose only log line is [`NO_ENTRY_POINT_MESSAGE`].
    /// 3. Executes each case in its own sandboxed context and compares the
    ///    result. Candidate failures (thrown errors, timeouts) fail that
    ///    case only; the remaining cases still execute.
    /// 4. The verdict is a strict AND over the per-case outcomes.
    pub async fn run(self) -> Result<RunReport, GraderError> {
        let parsed = parse_cases(&self.cases)?;

        let entry_point = match resolver::resolve_entry_point(&self.code) {
            Ok(name) => name,
            Err(_) => {
                return Ok(RunReport {
                    verdict: Verdict::Failed,
                    log: vec![NO_ENTRY_POINT_MESSAGE.to_string()],
                    cases: Vec::new(),
                    created_at: Utc::now().to_rfc3339(),
                });
            }
        };

        let mut log = Vec::with_capacity(parsed.len());
        let mut outcomes = Vec::with_capacity(parsed.len());
        let mut all_passed = true;

        for (number, args, expected) in &parsed {
            let (passed, message) =
                match sandbox::run_case(&self.code, &entry_point, args, &self.limits).await {
                    Ok(actual) => {
                        let comparison = self.comparator.compare(expected, &actual);
                        if comparison.matched {
                            (true, format!("Test Case {number}: Passed"))
                        } else {
                            (
                                false,
                                format!(
                                    "Test Case {number}: Failed. Expected {}, got {}",
                                    comparison.expected, comparison.actual
                                ),
                            )
                        }
                    }
                    Err(ExecError::Timeout(budget_ms)) => (
                        false,
                        format!("Test Case {number}: Failed. Timed out after {budget_ms}ms"),
                    ),
                    Err(err) => (
                        false,
                        format!("Test Case {number}: Failed. Runtime error: {err}"),
                    ),
                };

            all_passed &= passed;
            outcomes.push(CaseOutcome {
                number: *number,
                passed,
                message: message.clone(),
            });
            log.push(message);
        }

        let verdict = if all_passed {
            Verdict::Accepted
        } else {
            Verdict::Failed
        };

        Ok(RunReport {
            verdict,
            log,
            cases: outcomes,
            created_at: Utc::now().to_rfc3339(),
        })
    }
}

fn parse_cases(cases: &[TestCase]) -> Result<Vec<(usize, Vec<Value>, Value)>, GraderError> {
    let mut parsed = Vec::with_capacity(cases.len());
    for (index, case) in cases.iter().enumerate() {
        let number = index + 1;
        let args =
            literal::parse_argument_list(&case.input).map_err(|e| GraderError::InvalidTestCase {
                number,
                message: e.to_string(),
            })?;
        let expected =
            literal::parse_value(&case.output).map_err(|e| GraderError::InvalidTestCase {
                number,
                message: e.to_string(),
            })?;
        parsed.push((number, args, expected));
    }
    Ok(parsed)
}

/// Opaque metadata attached to a persisted submission. The grader stores
/// what the caller supplies and computes none of it.
#[derive(Debug, Clone, Default)]
pub struct SubmissionMeta {
    pub execution_time_ms: Option<i64>,
    pub score: Option<i64>,
}

/// Result of a submit action: the grading report, plus the persisted row's
/// ID when the verdict was Accepted.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub report: RunReport,
    pub submission_id: Option<i64>,
}

/// Grade `code` against the problem stored under `slug` ("Run": never
/// persists anything).
pub async fn run_against_problem(
    db: &DatabaseConnection,
    slug: &str,
    code: &str,
) -> Result<RunReport, GraderError> {
    let problem = problem::Model::get_by_slug(db, slug)
        .await?
        .ok_or_else(|| GraderError::ProblemNotFound(slug.to_string()))?;
    let cases = problem
        .test_cases()
        .map_err(|e| GraderError::CorruptTestCases {
            slug: problem.slug.clone(),
            message: e.to_string(),
        })?;
    GradingJob::new(code, cases).run().await
}

/// Grade `code` against `problem` and, only on an Accepted verdict, persist
/// a submission row through the persistence collaborator.
///
/// A Failed re-grade persists nothing and returns `submission_id: None`.
/// Identical accepted code submitted twice creates two rows; deduplication
/// is left to the store's own policy.
pub async fn submit(
    db: &DatabaseConnection,
    user_id: i64,
    problem: &problem::Model,
    code: &str,
    language: &str,
    meta: SubmissionMeta,
) -> Result<SubmitOutcome, GraderError> {
    let cases = problem
        .test_cases()
        .map_err(|e| GraderError::CorruptTestCases {
            slug: problem.slug.clone(),
            message: e.to_string(),
        })?;

    let report = GradingJob::new(code, cases).run().await?;
    if !report.accepted() {
        return Ok(SubmitOutcome {
            report,
            submission_id: None,
        });
    }

    let row = submission::Model::create(
        db,
        user_id,
        problem.id,
        code,
        language,
        SubmissionStatus::Accepted,
        meta.execution_time_ms,
        meta.score,
    )
    .await?;
    tracing::info!(
        submission_id = row.id,
        problem = %problem.slug,
        "accepted submission persisted"
    );

    Ok(SubmitOutcome {
        report,
        submission_id: Some(row.id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SUM: &str = "const twoSum = (nums, target) => { \
        const m = new Map(); \
        for (let i = 0; i < nums.length; i++) { \
        const c = target - nums[i]; \
        if (m.has(c)) return [m.get(c), i]; \
        m.set(nums[i], i); } };";

    fn case(input: &str, output: &str) -> TestCase {
        TestCase {
            input: input.into(),
            output: output.into(),
        }
    }

    #[tokio::test]
    async fn test_two_sum_accepted() {
        let report = GradingJob::new(TWO_SUM, vec![case("[2,7,11,15], 9", "[0,1]")])
            .run()
            .await
            .unwrap();

        assert_eq!(report.verdict, Verdict::Accepted);
        assert_eq!(report.log, vec!["Test Case 1: Passed".to_string()]);
    }

    #[tokio::test]
    async fn test_two_sum_duplicate_elements() {
        let report = GradingJob::new(TWO_SUM, vec![case("[3,3], 6", "[0,1]")])
            .run()
            .await
            .unwrap();

        assert_eq!(report.verdict, Verdict::Accepted);
    }

    #[tokio::test]
    async fn test_empty_body_reports_undefined() {
        let report = GradingJob::new(
            "const twoSum = (nums, target) => {};",
            vec![case("[2,7,11,15], 9", "[0,1]")],
        )
        .run()
        .await
        .unwrap();

        assert_eq!(report.verdict, Verdict::Failed);
        assert_eq!(
            report.log,
            vec!["Test Case 1: Failed. Expected [0,1], got undefined".to_string()]
        );
    }

    #[tokio::test]
    async fn test_no_entry_point() {
        let report = GradingJob::new("const answer = 42;", vec![case("[1], 1", "[0]")])
            .run()
            .await
            .unwrap();

        assert_eq!(report.verdict, Verdict::Failed);
        assert_eq!(report.log, vec![NO_ENTRY_POINT_MESSAGE.to_string()]);
        assert!(report.cases.is_empty());
    }

    #[tokio::test]
    async fn test_throwing_case_does_not_stop_the_others() {
        let code = "const pick = (nums) => { \
            if (nums[0] === 13) { throw new Error(\"unlucky\"); } \
            return [0, 1]; };";
        let report = GradingJob::new(
            code,
            vec![
                case("[1,2]", "[0,1]"),
                case("[13]", "[0,1]"),
                case("[2,3]", "[0,1]"),
            ],
        )
        .run()
        .await
        .unwrap();

        assert_eq!(report.verdict, Verdict::Failed);
        assert_eq!(report.log.len(), 3);
        assert_eq!(report.log[0], "Test Case 1: Passed");
        assert!(report.log[1].starts_with("Test Case 2: Failed. Runtime error:"));
        assert!(report.log[1].contains("unlucky"));
        assert_eq!(report.log[2], "Test Case 3: Passed");
    }

    #[tokio::test]
    async fn test_verdict_is_strict_and_over_cases() {
        let report = GradingJob::new(
            TWO_SUM,
            vec![case("[2,7,11,15], 9", "[0,1]"), case("[3,3], 6", "[1,0]")],
        )
        .run()
        .await
        .unwrap();

        assert_eq!(report.verdict, Verdict::Failed);
        assert!(report.cases[0].passed);
        assert!(!report.cases[1].passed);
    }

    #[tokio::test]
    async fn test_rerunning_identical_code_is_deterministic() {
        let cases = vec![case("[2,7,11,15], 9", "[0,1]"), case("[3,3], 6", "[0,1]")];

        let first = GradingJob::new(TWO_SUM, cases.clone()).run().await.unwrap();
        let second = GradingJob::new(TWO_SUM, cases).run().await.unwrap();

        assert_eq!(first.verdict, second.verdict);
        assert_eq!(first.log, second.log);
    }

    #[tokio::test]
    async fn test_global_mutation_does_not_leak_across_cases() {
        let code = "var seen = 0; const count = () => { seen += 1; return seen; };";
        let report = GradingJob::new(code, vec![case("", "1"), case("", "1")])
            .run()
            .await
            .unwrap();

        assert_eq!(report.verdict, Verdict::Accepted);
    }

    #[tokio::test]
    async fn test_malformed_input_literal_aborts_the_run() {
        let err = GradingJob::new(TWO_SUM, vec![case("[1, 2,", "[0,1]")])
            .run()
            .await
            .unwrap_err();

        match err {
            GraderError::InvalidTestCase { number, .. } => assert_eq!(number, 1),
            other => panic!("expected InvalidTestCase, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_expected_literal_aborts_the_run() {
        let err = GradingJob::new(TWO_SUM, vec![case("[1], 1", "not a literal")])
            .run()
            .await
            .unwrap_err();

        assert!(matches!(err, GraderError::InvalidTestCase { number: 1, .. }));
    }

    #[tokio::test]
    async fn test_infinite_loop_fails_within_bounds() {
        let started = std::time::Instant::now();
        let report = GradingJob::new(
            "const spin = (n) => { while (true) {} };",
            vec![case("1", "1")],
        )
        .with_limits(ExecutionLimits {
            wall_time_ms: 300,
            loop_iteration_limit: 500_000,
            recursion_limit: 512,
        })
        .run()
        .await
        .unwrap();

        assert_eq!(report.verdict, Verdict::Failed);
        assert!(report.log[0].starts_with("Test Case 1: Failed."));
        // Bounded: either the wall clock or the loop limit stopped it.
        assert!(started.elapsed() < std::time::Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_zero_arg_entry_point() {
        let report = GradingJob::new(
            "function answer() { return {\"value\": 42}; }",
            vec![case("", "{\"value\": 42}")],
        )
        .run()
        .await
        .unwrap();

        assert_eq!(report.verdict, Verdict::Accepted);
    }
}
