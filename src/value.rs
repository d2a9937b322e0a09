// ABOUTME: Value types representing Lisp data: the tagged-union runtime object model

use crate::env::Environment;
use crate::error::EvalError;
use std::rc::Rc;

/// A primitive procedure: a host-implemented callable over a single
/// argument-list `Value`, matching the original C interpreter's
/// `Object* (*function)(Object*)` signature.
pub type Primitive = fn(Value) -> Result<Value, EvalError>;

/// A runtime Lisp object.
///
/// Every alternative here is a leaf except `Pair`, which is the sole
/// composite: lists, association frames, and procedure representations
/// are all just particular shapes of right-nested `Pair`s (see the
/// constructors below and `Environment` in `env.rs`).
#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Character(char),
    String(Rc<str>),
    Symbol(Rc<str>),
    Pair(Rc<Value>, Rc<Value>),
    Nil,
    Function(Primitive),
    /// A compound procedure (closure): params, body sequence, captured env.
    Lambda {
        params: Rc<Value>,
        body: Rc<Value>,
        env: Rc<Environment>,
    },
}

impl Value {
    pub fn symbol(s: impl Into<Rc<str>>) -> Value {
        Value::Symbol(s.into())
    }

    pub fn string(s: impl Into<Rc<str>>) -> Value {
        Value::String(s.into())
    }

    pub fn cons(car: Value, cdr: Value) -> Value {
        Value::Pair(Rc::new(car), Rc::new(cdr))
    }

    /// Builds the right-nested list `(v1 v2 ... vn)` terminated by `Nil`.
    pub fn list(items: Vec<Value>) -> Value {
        items
            .into_iter()
            .rev()
            .fold(Value::Nil, |tail, head| Value::cons(head, tail))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Value::Pair(..))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// `Nil` is a list; a `Pair` whose cdr is a list is a list. Anything
    /// else (including an improper list's final atom) is not.
    pub fn is_list(&self) -> bool {
        match self {
            Value::Nil => true,
            Value::Pair(_, cdr) => cdr.is_list(),
            _ => false,
        }
    }

    /// Returns a human-readable name for the variant, used in type-error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Character(_) => "character",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Pair(..) => "pair",
            Value::Nil => "nil",
            Value::Function(_) => "primitive procedure",
            Value::Lambda { .. } => "compound procedure",
        }
    }

    pub fn car(&self) -> Result<Value, EvalError> {
        match self {
            Value::Pair(car, _) => Ok((**car).clone()),
            other => Err(EvalError::NotAPair {
                operation: "car",
                got: other.type_name(),
            }),
        }
    }

    pub fn cdr(&self) -> Result<Value, EvalError> {
        match self {
            Value::Pair(_, cdr) => Ok((**cdr).clone()),
            other => Err(EvalError::NotAPair {
                operation: "cdr",
                got: other.type_name(),
            }),
        }
    }

    pub fn cadr(&self) -> Result<Value, EvalError> {
        self.cdr()?.car()
    }

    pub fn caddr(&self) -> Result<Value, EvalError> {
        self.cdr()?.cdr()?.car()
    }

    pub fn cadddr(&self) -> Result<Value, EvalError> {
        self.cdr()?.cdr()?.cdr()?.car()
    }

    pub fn caadr(&self) -> Result<Value, EvalError> {
        self.cdr()?.car()?.car()
    }

    pub fn cdadr(&self) -> Result<Value, EvalError> {
        self.cdr()?.car()?.cdr()
    }

    pub fn cddr(&self) -> Result<Value, EvalError> {
        self.cdr()?.cdr()
    }

    /// Collects a proper list into a `Vec`, erroring on an improper tail.
    pub fn to_vec(&self) -> Result<Vec<Value>, EvalError> {
        let mut items = Vec::new();
        let mut cursor = self.clone();
        loop {
            match cursor {
                Value::Nil => return Ok(items),
                Value::Pair(car, cdr) => {
                    items.push((*car).clone());
                    cursor = (*cdr).clone();
                }
                other => {
                    return Err(EvalError::NotAPair {
                        operation: "list traversal",
                        got: other.type_name(),
                    })
                }
            }
        }
    }

    /// Structural equality: same tag and equal payload; `Nil` equals
    /// `Nil`; `Pair`s compare pairwise. Comparing across tags is simply
    /// `false`, never an error.
    pub fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Character(a), Value::Character(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Function(a), Value::Function(b)) => std::ptr::eq(*a as *const (), *b as *const ()),
            (Value::Pair(a_car, a_cdr), Value::Pair(b_car, b_cdr)) => {
                a_car.eq(b_car) && a_cdr.eq(b_cdr)
            }
            _ => false,
        }
    }

    /// Zips two proper lists pairwise, stopping at whichever runs out first.
    pub fn zip(a: &Value, b: &Value) -> Value {
        match (a, b) {
            (Value::Pair(a_car, a_cdr), Value::Pair(b_car, b_cdr)) => Value::cons(
                Value::cons((**a_car).clone(), (**b_car).clone()),
                Value::zip(a_cdr, b_cdr),
            ),
            _ => Value::Nil,
        }
    }
}

/// The canonical true symbol. `if` compares its test against this by `eq`.
pub fn truth() -> Value {
    Value::symbol("#t")
}

pub fn falsehood() -> Value {
    Value::symbol("#f")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_builds_right_nested_pairs_terminated_by_nil() {
        let l = Value::list(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
        assert!(l.is_list());
        assert_eq!(l.to_vec().unwrap().len(), 3);
    }

    #[test]
    fn empty_list_is_nil() {
        let l = Value::list(vec![]);
        assert!(matches!(l, Value::Nil));
    }

    #[test]
    fn car_cdr_roundtrip() {
        let p = Value::cons(Value::Integer(1), Value::Integer(2));
        assert!(matches!(p.car().unwrap(), Value::Integer(1)));
        assert!(matches!(p.cdr().unwrap(), Value::Integer(2)));
    }

    #[test]
    fn car_of_non_pair_errors() {
        assert!(Value::Integer(1).car().is_err());
    }

    #[test]
    fn eq_is_structural_for_pairs() {
        let a = Value::cons(Value::Integer(1), Value::Integer(2));
        let b = Value::cons(Value::Integer(1), Value::Integer(2));
        assert!(a.eq(&b));
    }

    #[test]
    fn eq_across_tags_is_false_not_error() {
        assert!(!Value::Integer(1).eq(&Value::string("1")));
    }

    #[test]
    fn eq_fails_for_unequal_pairs() {
        let a = Value::cons(Value::Integer(1), Value::Integer(2));
        let b = Value::cons(Value::Integer(1), Value::Integer(3));
        assert!(!a.eq(&b));
    }

    #[test]
    fn improper_list_is_not_a_list() {
        let improper = Value::cons(Value::Integer(1), Value::Integer(2));
        assert!(!improper.is_list());
    }

    #[test]
    fn zip_stops_at_shorter_list() {
        let params = Value::list(vec![Value::symbol("x"), Value::symbol("y")]);
        let args = Value::list(vec![Value::Integer(1)]);
        let zipped = Value::zip(&params, &args).to_vec().unwrap();
        assert_eq!(zipped.len(), 1);
    }

    #[test]
    fn composed_accessors() {
        let l = Value::list(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3),
            Value::Integer(4),
        ]);
        assert!(matches!(l.cadr().unwrap(), Value::Integer(2)));
        assert!(matches!(l.caddr().unwrap(), Value::Integer(3)));
        assert!(matches!(l.cadddr().unwrap(), Value::Integer(4)));
    }
}
