//! # Sandbox Library
//!
//! Isolated, time-bounded execution of candidate JavaScript for the grader.
//! Each test case evaluates the candidate source plus a generated call
//! harness inside a fresh interpreter context with runtime limits, so one
//! case can neither observe another case's state nor hang the grading run.
//!
//! ## Key Concepts
//! - **Entry-point resolution**: AST-based lookup of the single top-level
//!   callable a submission must define ([`resolver`]).
//! - **Literal parsing**: test-case inputs and expected outputs are parsed
//!   as JSON literals before anything reaches the interpreter ([`literal`]).
//! - **Case execution**: [`run_case`] evaluates one call and reports the
//!   result value, `undefined`, or a per-case failure.

pub mod error;
pub mod limits;
pub mod literal;
pub mod resolver;

pub use error::{ExecError, LiteralError, ResolveError};
pub use limits::ExecutionLimits;

use boa_engine::{Context, Source};
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

/// Result value of one isolated case execution.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseValue {
    /// The entry point returned a JSON-representable value.
    Json(Value),
    /// The entry point returned `undefined`.
    Undefined,
    /// The entry point returned something JSON cannot carry (a function, a
    /// symbol, a cyclic structure that stringified to nothing).
    Unserializable,
}

impl CaseValue {
    /// Compact rendering used in diff messages.
    pub fn display(&self) -> String {
        match self {
            CaseValue::Json(value) => value.to_string(),
            CaseValue::Undefined => "undefined".to_string(),
            CaseValue::Unserializable => "[unserializable value]".to_string(),
        }
    }
}

// Harness results come back as a NUL-prefixed string. `JSON.stringify` output
// can never start with a NUL, so the channel is unambiguous.
const SENTINEL_UNDEFINED: &str = "\u{0}undefined";
const SENTINEL_UNSERIALIZABLE: &str = "\u{0}unserializable";
const SENTINEL_JSON: &str = "\u{0}json:";

/// Execute the candidate source and one call of its entry point inside a
/// fresh, limit-bounded interpreter context.
///
/// The evaluation runs on a blocking worker wrapped in a wall-clock timeout;
/// an abandoned worker is wound down by the context's loop-iteration limit.
/// Every failure mode is returned as an [`ExecError`] for this case only.
pub async fn run_case(
    source: &str,
    entry_point: &str,
    args: &[Value],
    limits: &ExecutionLimits,
) -> Result<CaseValue, ExecError> {
    let script = harness_script(source, entry_point, args)?;
    let limits = limits.clone();
    let budget_ms = limits.wall_time_ms;

    let worker = tokio::task::spawn_blocking(move || eval_in_fresh_context(&script, &limits));

    match timeout(Duration::from_millis(budget_ms), worker).await {
        Err(_) => {
            tracing::warn!(budget_ms, entry_point, "case execution timed out");
            Err(ExecError::Timeout(budget_ms))
        }
        Ok(Err(join_err)) => Err(ExecError::Runtime(join_err.to_string())),
        Ok(Ok(outcome)) => outcome,
    }
}

/// Build the script evaluated for one case: the candidate source, a
/// statement separator, then an IIFE calling the entry point.
///
/// Arguments are re-serialized from already-parsed values, so the only raw
/// text that ever reaches the interpreter is the candidate source itself.
fn harness_script(source: &str, entry_point: &str, args: &[Value]) -> Result<String, ExecError> {
    let mut rendered = Vec::with_capacity(args.len());
    for arg in args {
        rendered.push(serde_json::to_string(arg).map_err(|e| ExecError::Harness(e.to_string()))?);
    }

    Ok(format!(
        "{source}\n;(function () {{ \
         var __result = {entry_point}({call_args}); \
         if (__result === undefined) {{ return \"\\u0000undefined\"; }} \
         var __encoded = JSON.stringify(__result); \
         if (__encoded === undefined) {{ return \"\\u0000unserializable\"; }} \
         return \"\\u0000json:\" + __encoded; \
         }})()",
        call_args = rendered.join(", ")
    ))
}

fn eval_in_fresh_context(script: &str, limits: &ExecutionLimits) -> Result<CaseValue, ExecError> {
    let mut context = Context::default();
    context
        .runtime_limits_mut()
        .set_loop_iteration_limit(limits.loop_iteration_limit);
    context
        .runtime_limits_mut()
        .set_recursion_limit(limits.recursion_limit);

    let value = context
        .eval(Source::from_bytes(script))
        .map_err(|err| ExecError::Runtime(err.to_string()))?;

    let encoded = value
        .to_string(&mut context)
        .map_err(|err| ExecError::Runtime(err.to_string()))?
        .to_std_string_escaped();

    decode_sentinel(&encoded)
}

fn decode_sentinel(encoded: &str) -> Result<CaseValue, ExecError> {
    if encoded == SENTINEL_UNDEFINED {
        return Ok(CaseValue::Undefined);
    }
    if encoded == SENTINEL_UNSERIALIZABLE {
        return Ok(CaseValue::Unserializable);
    }
    if let Some(payload) = encoded.strip_prefix(SENTINEL_JSON) {
        let value = serde_json::from_str(payload)
            .map_err(|e| ExecError::Runtime(format!("result decoding failed: {e}")))?;
        return Ok(CaseValue::Json(value));
    }
    Err(ExecError::Runtime(
        "candidate result did not come from the call harness".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn limits() -> ExecutionLimits {
        ExecutionLimits::default()
    }

    #[tokio::test]
    async fn test_returns_number() {
        let value = run_case(
            "function add(a, b) { return a + b; }",
            "add",
            &[json!(1), json!(2)],
            &limits(),
        )
        .await
        .unwrap();
        assert_eq!(value, CaseValue::Json(json!(3)));
    }

    #[tokio::test]
    async fn test_returns_array() {
        let value = run_case(
            "const twoSum = (nums, target) => { \
             const m = new Map(); \
             for (let i = 0; i < nums.length; i++) { \
             const c = target - nums[i]; \
             if (m.has(c)) return [m.get(c), i]; \
             m.set(nums[i], i); } };",
            "twoSum",
            &[json!([2, 7, 11, 15]), json!(9)],
            &limits(),
        )
        .await
        .unwrap();
        assert_eq!(value, CaseValue::Json(json!([0, 1])));
    }

    #[tokio::test]
    async fn test_undefined_return() {
        let value = run_case("function noop() {}", "noop", &[], &limits())
            .await
            .unwrap();
        assert_eq!(value, CaseValue::Undefined);
    }

    #[tokio::test]
    async fn test_unserializable_return() {
        let value = run_case(
            "function give() { return function () {}; }",
            "give",
            &[],
            &limits(),
        )
        .await
        .unwrap();
        assert_eq!(value, CaseValue::Unserializable);
    }

    #[tokio::test]
    async fn test_thrown_error_is_runtime_failure() {
        let err = run_case(
            "function boom() { throw new Error(\"nope\"); }",
            "boom",
            &[],
            &limits(),
        )
        .await
        .unwrap_err();
        match err {
            ExecError::Runtime(message) => assert!(message.contains("nope")),
            other => panic!("expected runtime error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_state_does_not_leak_between_cases() {
        let source = "var calls = 0; function count() { calls += 1; return calls; }";
        let first = run_case(source, "count", &[], &limits()).await.unwrap();
        let second = run_case(source, "count", &[], &limits()).await.unwrap();
        assert_eq!(first, CaseValue::Json(json!(1)));
        assert_eq!(second, CaseValue::Json(json!(1)));
    }

    #[tokio::test]
    async fn test_wall_clock_timeout() {
        // The loop limit stays finite so the abandoned worker terminates
        // (runtime shutdown waits for in-flight blocking tasks); the heavy
        // loop body guarantees the wall clock still fires first.
        let spin_limits = ExecutionLimits {
            wall_time_ms: 200,
            loop_iteration_limit: 1_000_000,
            recursion_limit: 512,
        };
        let err = run_case(
            "function spin() { while (true) { JSON.stringify([1, 2, 3, 4]); } }",
            "spin",
            &[],
            &spin_limits,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ExecError::Timeout(200)));
    }

    #[tokio::test]
    async fn test_loop_iteration_limit_stops_runaway_code() {
        let tight = ExecutionLimits {
            wall_time_ms: 10_000,
            loop_iteration_limit: 1_000,
            recursion_limit: 512,
        };
        let err = run_case(
            "function spin() { while (true) {} }",
            "spin",
            &[],
            &tight,
        )
        .await
        .unwrap_err();
        match err {
            ExecError::Runtime(message) => {
                assert!(message.to_lowercase().contains("loop"), "got: {message}")
            }
            other => panic!("expected runtime-limit error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_string_arguments_round_trip() {
        let value = run_case(
            "const shout = (s) => s.toUpperCase() + \"!\";",
            "shout",
            &[json!("hi")],
            &limits(),
        )
        .await
        .unwrap();
        assert_eq!(value, CaseValue::Json(json!("HI!")));
    }
}
