//! Abstract Syntax Tree definitions for Lazel
//!
//! The AST is an immutable tree: every node owns its children exclusively.
//! Nodes carry a unique id and their source span.

use crate::diagnostics::Span;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for AST nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Generate a new unique node ID
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete Lazel program: a single top-level expression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: NodeId,
    pub span: Span,
    pub expr: Expr,
}

/// Expressions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
    /// Integer literal
    IntLit { id: NodeId, span: Span, value: i64 },

    /// Float literal
    FloatLit { id: NodeId, span: Span, value: f64 },

    /// Name reference
    Ident {
        id: NodeId,
        span: Span,
        name: String,
    },

    /// Anonymous function: `λ(a, b): body`
    Lambda {
        id: NodeId,
        span: Span,
        params: Vec<String>,
        body: Box<Expr>,
    },

    /// Application by juxtaposition: `f a b`
    ///
    /// One node covers a whole run of juxtaposed atoms; the evaluator
    /// consumes the argument list front to back, which is what makes
    /// application left-associative.
    Apply {
        id: NodeId,
        span: Span,
        callee: Box<Expr>,
        args: Vec<Expr>,
    },

    /// Record literal: `[a=1, b=2]`; `[]` evaluates to the empty value
    Record {
        id: NodeId,
        span: Span,
        fields: Vec<FieldInit>,
    },

    /// Conditional: `cond c t e`
    Cond {
        id: NodeId,
        span: Span,
        condition: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
}

impl Expr {
    /// The source span of this expression
    pub fn span(&self) -> &Span {
        match self {
            Expr::IntLit { span, .. }
            | Expr::FloatLit { span, .. }
            | Expr::Ident { span, .. }
            | Expr::Lambda { span, .. }
            | Expr::Apply { span, .. }
            | Expr::Record { span, .. }
            | Expr::Cond { span, .. } => span,
        }
    }
}

/// One labeled field initializer in a record literal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldInit {
    pub id: NodeId,
    pub span: Span,
    pub name: String,
    pub expr: Expr,
}
