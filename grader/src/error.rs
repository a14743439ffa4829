use thiserror::Error;

/// Errors that abort a grading run.
///
/// Candidate-attributable failures (thrown errors, timeouts, mismatches) are
/// never represented here; they are caught per case and become log lines.
/// These variants cover the problem's own data and the persistence layer.
#[derive(Debug, Error)]
pub enum GraderError {
    /// A test case's literal text failed to parse. The literals are the
    /// problem's data, so this is a data-integrity failure of the run, not a
    /// failed case.
    #[error("invalid test case {number}: {message}")]
    InvalidTestCase { number: usize, message: String },

    /// The problem provider has no problem under the given slug.
    #[error("problem `{0}` not found")]
    ProblemNotFound(String),

    /// The problem's stored test-case definitions are not valid JSON.
    #[error("problem `{slug}` has corrupt test-case definitions: {message}")]
    CorruptTestCases { slug: String, message: String },

    /// Persistence collaborator failure.
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}
