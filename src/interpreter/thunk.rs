//! Deferred, memoized computations for lazy evaluation.

use std::cell::RefCell;
use std::rc::Rc;

use crate::parser::ast::Expr;

use super::environment::Env;
use super::value::Value;

/// The memo cell of a thunk.
///
/// `InProgress` marks a force that has started but not completed; reaching
/// it again on the same call path is a genuine evaluation cycle (a binding
/// whose value depends on its own not-yet-computed result).
#[derive(Debug, Clone)]
pub enum ThunkState {
    /// Not yet demanded: the expression and the environment it closes over
    Deferred { expr: Rc<Expr>, env: Env },
    /// Currently being forced somewhere up the call stack
    InProgress,
    /// Forced; the memo cell is write-once
    Forced(Value),
}

/// A deferred computation, evaluated at most once when first demanded.
#[derive(Debug)]
pub struct Thunk {
    state: RefCell<ThunkState>,
}

impl Thunk {
    /// A thunk that will evaluate `expr` under `env` when first forced
    pub fn deferred(expr: Rc<Expr>, env: Env) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(ThunkState::Deferred { expr, env }),
        })
    }

    /// A thunk that is already a value (root-environment primitives)
    pub fn forced(value: Value) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(ThunkState::Forced(value)),
        })
    }

    /// Whether this thunk has been forced to a value
    pub fn is_forced(&self) -> bool {
        matches!(*self.state.borrow(), ThunkState::Forced(_))
    }

    pub(crate) fn state(&self) -> &RefCell<ThunkState> {
        &self.state
    }
}
