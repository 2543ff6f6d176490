//! Runtime error types for the Lazel interpreter.

use thiserror::Error;

use crate::diagnostics::runtime;

/// Runtime error with a stable error code and rendered message.
///
/// Every runtime error aborts the whole program; there is no recovery
/// inside the evaluator.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct RuntimeError {
    /// Error code (E4xxx series)
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

impl RuntimeError {
    /// Create a new runtime error
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Name not bound in any enclosing environment frame
    pub fn unbound_name(name: &str) -> Self {
        Self::new(runtime::UNBOUND_NAME, format!("unbound name: {}", name))
    }

    /// Primitive applied to a non-number operand
    pub fn type_mismatch(operator: &str, operand_kind: &str) -> Self {
        Self::new(
            runtime::TYPE_MISMATCH,
            format!(
                "type mismatch in `{}`: expected a number, got `{}`",
                operator, operand_kind
            ),
        )
    }

    /// A value that takes no arguments was applied to some
    pub fn not_applicable(kind: &str) -> Self {
        Self::new(
            runtime::TYPE_MISMATCH,
            format!("cannot apply arguments to a value of kind `{}`", kind),
        )
    }

    /// Record applied to something other than a field name
    pub fn invalid_projection() -> Self {
        Self::new(
            runtime::TYPE_MISMATCH,
            "a record can only be applied to a field name",
        )
    }

    /// Division by zero error
    pub fn division_by_zero() -> Self {
        Self::new(runtime::DIVISION_BY_ZERO, "division by zero")
    }

    /// Field projection with a name the record does not have
    pub fn unknown_field(field: &str) -> Self {
        Self::new(runtime::UNKNOWN_FIELD, format!("unknown field: {}", field))
    }

    /// Arity mismatch error
    pub fn arity_mismatch(expected: usize, got: usize) -> Self {
        Self::new(
            runtime::ARITY_MISMATCH,
            format!("expected {} arguments, got {}", expected, got),
        )
    }

    /// A binding's computation demanded its own not-yet-computed value
    pub fn evaluation_cycle(binding: &str) -> Self {
        Self::new(
            runtime::EVALUATION_CYCLE,
            format!("evaluation cycle detected while forcing `{}`", binding),
        )
    }

    /// The configured evaluation depth ceiling was reached
    pub fn depth_exceeded(limit: usize) -> Self {
        Self::new(
            runtime::DEPTH_EXCEEDED,
            format!("evaluation depth limit exceeded ({})", limit),
        )
    }
}
