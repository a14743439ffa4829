/// Resource limits applied to each case's interpreter context.
///
/// `wall_time_ms` bounds the user-visible latency of one case. The
/// interpreter-level caps bound the context itself, so a worker abandoned by
/// the wall-clock timeout still terminates.
#[derive(Debug, Clone)]
pub struct ExecutionLimits {
    /// Wall-clock budget per case, in milliseconds.
    pub wall_time_ms: u64,
    /// Total loop iterations the interpreter will execute before aborting.
    pub loop_iteration_limit: u64,
    /// Call-stack depth the interpreter will allow.
    pub recursion_limit: usize,
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        Self {
            wall_time_ms: 2000,
            loop_iteration_limit: 10_000_000,
            recursion_limit: 512,
        }
    }
}
