//! Structural equality primitive: `eq`.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{falsehood, truth, Value};
use std::rc::Rc;

/// `(eq a b)` — structural equality per `Value::eq`; never errors on a
/// tag mismatch, simply answers `#f`.
pub fn eq(args: Value) -> Result<Value, EvalError> {
    let items = args.to_vec()?;
    if items.len() != 2 {
        return Err(EvalError::arity("eq", "2", items.len()));
    }
    Ok(if items[0].eq(&items[1]) { truth() } else { falsehood() })
}

pub fn register(env: &Rc<Environment>) {
    env.define("eq".into(), Value::Function(eq));
}
