//! Arithmetic primitives: `+`, `-`, `*`.
//!
//! Grounded in the original interpreter's `add`/`mul`/`sub` (see
//! `examples/original_source/c_scheme.c`): each accepts either a proper
//! list of integers, or — the source's permissive quirk, preserved here
//! per spec.md §4.4 — a single bare `Integer` in place of the list.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn integers(args: &Value, context: &'static str) -> Result<Vec<i64>, EvalError> {
    args.to_vec()?
        .into_iter()
        .map(|v| match v {
            Value::Integer(n) => Ok(n),
            other => Err(EvalError::type_mismatch(context, "integer", other.type_name())),
        })
        .collect()
}

/// `(+ a b ...)` — sum of all arguments; empty list sums to 0.
pub fn add(args: Value) -> Result<Value, EvalError> {
    if let Value::Integer(n) = args {
        return Ok(Value::Integer(n));
    }
    let sum: i64 = integers(&args, "+")?.into_iter().sum();
    Ok(Value::Integer(sum))
}

/// `(* a b ...)` — product of all arguments; empty list multiplies to 1.
pub fn mul(args: Value) -> Result<Value, EvalError> {
    if let Value::Integer(n) = args {
        return Ok(Value::Integer(n));
    }
    let product: i64 = integers(&args, "*")?.into_iter().product();
    Ok(Value::Integer(product))
}

/// `(- a)` negates; `(- a b ...)` left-folds subtraction from `a`.
pub fn sub(args: Value) -> Result<Value, EvalError> {
    if let Value::Integer(n) = args {
        return Ok(Value::Integer(-n));
    }
    let nums = integers(&args, "-")?;
    let mut iter = nums.into_iter();
    let first = iter.next().ok_or_else(|| EvalError::arity("-", "at least 1", 0))?;
    let rest: Vec<i64> = iter.collect();
    if rest.is_empty() {
        return Ok(Value::Integer(-first));
    }
    Ok(Value::Integer(rest.into_iter().fold(first, |acc, n| acc - n)))
}

pub fn register(env: &Rc<Environment>) {
    env.define("+".into(), Value::Function(add));
    env.define("*".into(), Value::Function(mul));
    env.define("-".into(), Value::Function(sub));
}
