//! Pair-manipulation primitives: `cons`, `car`, `cdr`.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

/// `(cons head tail)`.
pub fn cons(args: Value) -> Result<Value, EvalError> {
    let items = args.to_vec()?;
    if items.len() != 2 {
        return Err(EvalError::arity("cons", "2", items.len()));
    }
    let mut it = items.into_iter();
    let head = it.next().unwrap();
    let tail = it.next().unwrap();
    Ok(Value::cons(head, tail))
}

/// `(car pair)` — fatal on a non-pair.
pub fn car(args: Value) -> Result<Value, EvalError> {
    let items = args.to_vec()?;
    if items.len() != 1 {
        return Err(EvalError::arity("car", "1", items.len()));
    }
    items[0].car()
}

/// `(cdr pair)` — fatal on a non-pair.
pub fn cdr(args: Value) -> Result<Value, EvalError> {
    let items = args.to_vec()?;
    if items.len() != 1 {
        return Err(EvalError::arity("cdr", "1", items.len()));
    }
    items[0].cdr()
}

pub fn register(env: &Rc<Environment>) {
    env.define("cons".into(), Value::Function(cons));
    env.define("car".into(), Value::Function(car));
    env.define("cdr".into(), Value::Function(cdr));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cons_builds_a_pair() {
        let args = Value::list(vec![Value::Integer(1), Value::Integer(2)]);
        let pair = cons(args).unwrap();
        assert!(matches!(pair.car().unwrap(), Value::Integer(1)));
        assert!(matches!(pair.cdr().unwrap(), Value::Integer(2)));
    }

    #[test]
    fn car_of_cons_round_trips() {
        let h = Value::Integer(7);
        let t = Value::Nil;
        let consed = Value::cons(h, t);
        let args = Value::list(vec![consed]);
        assert!(matches!(car(args).unwrap(), Value::Integer(7)));
    }

    #[test]
    fn car_on_non_pair_is_an_error() {
        let args = Value::list(vec![Value::Integer(1)]);
        assert!(car(args).is_err());
    }
}
