//! Interpreter for Lazel programs
//!
//! Call-by-need tree evaluation: record fields and function arguments are
//! bound as memoized thunks and forced only when first demanded. The
//! evaluator is single-threaded and keeps no state across programs.

mod builtins;
mod environment;
mod error;
mod thunk;
mod value;

pub use builtins::{Builtin, BUILTINS};
pub use environment::Env;
pub use error::RuntimeError;
pub use thunk::{Thunk, ThunkState};
pub use value::{format_value, Number, Value};

use std::rc::Rc;

use crate::parser::ast::{Expr, FieldInit, Program};

/// Default ceiling on nested evaluation depth.
///
/// The language has no iteration construct, so recursion is its only loop;
/// depth is bounded explicitly so that divergent recursion fails with a
/// reported error instead of overflowing the native stack.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Tree-walking evaluator
pub struct Interpreter {
    root: Env,
    depth: usize,
    max_depth: usize,
    primitive_calls: usize,
}

impl Interpreter {
    /// Create an interpreter with the default depth ceiling
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Create an interpreter with a specific depth ceiling
    pub fn with_max_depth(max_depth: usize) -> Self {
        let root = Env::root();
        builtins::install(&root);
        Self {
            root,
            depth: 0,
            max_depth,
            primitive_calls: 0,
        }
    }

    /// The root environment holding the primitives
    pub fn root_env(&self) -> &Env {
        &self.root
    }

    /// Number of primitive invocations performed so far.
    ///
    /// Memoization makes this observable: a field referenced through two
    /// different paths still pays for its computation once.
    pub fn primitive_calls(&self) -> usize {
        self.primitive_calls
    }

    /// Evaluate a whole program under the root environment
    pub fn eval_program(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        let env = self.root.clone();
        self.eval_expr(&program.expr, &env)
    }

    /// Evaluate one expression under an environment
    pub fn eval_expr(&mut self, expr: &Expr, env: &Env) -> Result<Value, RuntimeError> {
        if self.depth >= self.max_depth {
            return Err(RuntimeError::depth_exceeded(self.max_depth));
        }
        self.depth += 1;
        let result = self.eval_inner(expr, env);
        self.depth -= 1;
        result
    }

    fn eval_inner(&mut self, expr: &Expr, env: &Env) -> Result<Value, RuntimeError> {
        match expr {
            Expr::IntLit { value, .. } => Ok(Value::Number(Number::Int(*value))),
            Expr::FloatLit { value, .. } => Ok(Value::Number(Number::Float(*value))),
            Expr::Ident { name, .. } => {
                let thunk = env
                    .lookup(name)
                    .ok_or_else(|| RuntimeError::unbound_name(name))?;
                self.force(&thunk, name)
            }
            Expr::Lambda { params, body, .. } => Ok(Value::Closure {
                params: params.clone(),
                body: Rc::new((**body).clone()),
                env: env.clone(),
            }),
            Expr::Apply { callee, args, .. } => self.eval_apply(callee, args, env),
            Expr::Record { fields, .. } => Ok(self.eval_record(fields, env)),
            Expr::Cond {
                condition,
                then_expr,
                else_expr,
                ..
            } => {
                // Only the selected branch is evaluated
                let chosen = if self.eval_expr(condition, env)?.is_truthy() {
                    then_expr
                } else {
                    else_expr
                };
                self.eval_expr(chosen, env)
            }
        }
    }

    /// Apply a value to a run of juxtaposed arguments, front to back.
    ///
    /// Each step consumes as many arguments as the current value needs:
    /// a closure or primitive takes its full parameter count (exact arity,
    /// no partial application), a record projects one field name. The
    /// result then continues with whatever arguments remain, which is what
    /// makes `r n v` a left-associative field chain.
    fn eval_apply(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        env: &Env,
    ) -> Result<Value, RuntimeError> {
        let mut value = self.eval_expr(callee, env)?;
        let mut index = 0;

        while index < args.len() {
            let remaining = args.len() - index;
            value = match value {
                Value::Closure {
                    params,
                    body,
                    env: captured,
                } => {
                    if remaining < params.len() {
                        return Err(RuntimeError::arity_mismatch(params.len(), remaining));
                    }
                    // Arguments close over the caller's environment, not
                    // the closure's own
                    let frame = captured.child();
                    for (param, arg) in params.iter().zip(&args[index..index + params.len()]) {
                        frame.define(
                            param.clone(),
                            Thunk::deferred(Rc::new(arg.clone()), env.clone()),
                        );
                    }
                    index += params.len();
                    self.eval_expr(&body, &frame)?
                }
                Value::Builtin(builtin) => {
                    if remaining < builtin.arity {
                        return Err(RuntimeError::arity_mismatch(builtin.arity, remaining));
                    }
                    // Primitives are strict in both arguments
                    let mut operands = Vec::with_capacity(builtin.arity);
                    for arg in &args[index..index + builtin.arity] {
                        operands.push(self.eval_expr(arg, env)?);
                    }
                    index += builtin.arity;
                    self.primitive_calls += 1;
                    builtin.run(&operands)?
                }
                Value::Record(record) => {
                    let field = match &args[index] {
                        Expr::Ident { name, .. } => name,
                        _ => return Err(RuntimeError::invalid_projection()),
                    };
                    let thunk = record
                        .lookup_local(field)
                        .ok_or_else(|| RuntimeError::unknown_field(field))?;
                    index += 1;
                    self.force(&thunk, field)?
                }
                other => return Err(RuntimeError::not_applicable(other.kind())),
            };
        }

        Ok(value)
    }

    /// Construct a record value.
    ///
    /// The frame exists before any initializer runs, so a field's thunk can
    /// capture the frame that will contain its own slot; fields may
    /// reference each other and themselves.
    fn eval_record(&mut self, fields: &[FieldInit], env: &Env) -> Value {
        if fields.is_empty() {
            return Value::Empty;
        }
        let frame = env.child();
        for field in fields {
            frame.define(
                field.name.clone(),
                Thunk::deferred(Rc::new(field.expr.clone()), frame.clone()),
            );
        }
        Value::Record(frame)
    }

    /// Force a thunk, memoizing the result in its write-once cell.
    ///
    /// `binding` names what is being forced, for cycle reports.
    pub fn force(&mut self, thunk: &Thunk, binding: &str) -> Result<Value, RuntimeError> {
        let (expr, env) = {
            let mut state = thunk.state().borrow_mut();
            match &*state {
                ThunkState::Forced(value) => return Ok(value.clone()),
                ThunkState::InProgress => return Err(RuntimeError::evaluation_cycle(binding)),
                ThunkState::Deferred { expr, env } => {
                    let pending = (Rc::clone(expr), env.clone());
                    *state = ThunkState::InProgress;
                    pending
                }
            }
        };

        let value = self.eval_expr(&expr, &env)?;
        *thunk.state().borrow_mut() = ThunkState::Forced(value.clone());
        Ok(value)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
