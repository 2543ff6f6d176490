//! The fixed primitive registry: `add`, `minus`, `mult`, `div`.
//!
//! Primitives are ordinary names bound in the root environment. They are
//! strict in both arguments and require numbers.

use std::fmt;

use super::environment::Env;
use super::error::RuntimeError;
use super::thunk::Thunk;
use super::value::{Number, Value};

/// A native two-argument numeric primitive
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: usize,
    f: fn(&[Value]) -> Result<Value, RuntimeError>,
}

impl Builtin {
    /// Apply the primitive to exactly `arity` evaluated arguments
    pub fn run(&self, args: &[Value]) -> Result<Value, RuntimeError> {
        (self.f)(args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<builtin:{}>", self.name)
    }
}

/// Every primitive in the language
pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "add",
        arity: 2,
        f: add,
    },
    Builtin {
        name: "minus",
        arity: 2,
        f: minus,
    },
    Builtin {
        name: "mult",
        arity: 2,
        f: mult,
    },
    Builtin {
        name: "div",
        arity: 2,
        f: div,
    },
];

/// Bind every primitive into `env`
pub fn install(env: &Env) {
    for builtin in BUILTINS {
        env.define(builtin.name, Thunk::forced(Value::Builtin(*builtin)));
    }
}

fn expect_number(operator: &'static str, value: &Value) -> Result<Number, RuntimeError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(RuntimeError::type_mismatch(operator, other.kind())),
    }
}

fn add(args: &[Value]) -> Result<Value, RuntimeError> {
    let a = expect_number("add", &args[0])?;
    let b = expect_number("add", &args[1])?;
    Ok(Value::Number(a.add(b)))
}

fn minus(args: &[Value]) -> Result<Value, RuntimeError> {
    let a = expect_number("minus", &args[0])?;
    let b = expect_number("minus", &args[1])?;
    Ok(Value::Number(a.sub(b)))
}

fn mult(args: &[Value]) -> Result<Value, RuntimeError> {
    let a = expect_number("mult", &args[0])?;
    let b = expect_number("mult", &args[1])?;
    Ok(Value::Number(a.mul(b)))
}

fn div(args: &[Value]) -> Result<Value, RuntimeError> {
    let a = expect_number("div", &args[0])?;
    let b = expect_number("div", &args[1])?;
    if b.is_zero() {
        return Err(RuntimeError::division_by_zero());
    }
    Ok(Value::Number(a.div(b)))
}
