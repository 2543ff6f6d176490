//! Lazel
//!
//! Lazel is a small, dynamically-checked, lazily-evaluated functional
//! expression language: lambdas, records with mutually-visible lazy fields,
//! a short-circuiting conditional, and a fixed set of numeric primitives.

pub mod cli;
pub mod diagnostics;
pub mod interpreter;
pub mod parser;
pub mod runner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::diagnostics::{Diagnostic, Severity, Span};
    pub use crate::interpreter::{format_value, Interpreter, RuntimeError, Value};
    pub use crate::parser::ast::*;
}
