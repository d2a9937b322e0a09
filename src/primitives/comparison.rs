//! Comparison primitives: `=`, `<`, `>`.
//!
//! All three are fixed 2-arity and return the `#t`/`#f` symbols (there is
//! no separate Boolean tag in this value model — see spec.md §3).

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{falsehood, truth, Value};
use std::rc::Rc;

fn two_integers(args: &Value, context: &'static str) -> Result<(i64, i64), EvalError> {
    let items = args.to_vec()?;
    if items.len() != 2 {
        return Err(EvalError::arity(context, "2", items.len()));
    }
    match (&items[0], &items[1]) {
        (Value::Integer(a), Value::Integer(b)) => Ok((*a, *b)),
        (Value::Integer(_), other) | (other, _) => {
            Err(EvalError::type_mismatch(context, "integer", other.type_name()))
        }
    }
}

fn bool_value(b: bool) -> Value {
    if b {
        truth()
    } else {
        falsehood()
    }
}

/// `(= a b)` — `#t` if both are equal integers; a type error otherwise.
pub fn numeric_eq(args: Value) -> Result<Value, EvalError> {
    let (a, b) = two_integers(&args, "=")?;
    Ok(bool_value(a == b))
}

pub fn less_than(args: Value) -> Result<Value, EvalError> {
    let (a, b) = two_integers(&args, "<")?;
    Ok(bool_value(a < b))
}

pub fn greater_than(args: Value) -> Result<Value, EvalError> {
    let (a, b) = two_integers(&args, ">")?;
    Ok(bool_value(a > b))
}

pub fn register(env: &Rc<Environment>) {
    env.define("=".into(), Value::Function(numeric_eq));
    env.define("<".into(), Value::Function(less_than));
    env.define(">".into(), Value::Function(greater_than));
}
