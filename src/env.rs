// ABOUTME: Environment module for managing variable bindings and scopes

use crate::value::{falsehood, truth, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A chain of association frames: the head is the innermost scope, the
/// `parent` link walks outward. The global environment is the frame with
/// no parent; there is no separate "empty environment" object — `lookup`
/// simply runs out of frames.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<Rc<str>, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a new global environment with no parent, pre-bound with
    /// the keyword symbols `#t`/`#f` (spec.md §4.2 lists these as
    /// "keyword symbols recognized by the evaluator", not primitives —
    /// they must resolve by lookup like any other self-evaluating name).
    pub fn global() -> Rc<Self> {
        let mut bindings = HashMap::new();
        bindings.insert(Rc::from("#t"), truth());
        bindings.insert(Rc::from("#f"), falsehood());
        Rc::new(Environment {
            bindings: RefCell::new(bindings),
            parent: None,
        })
    }

    /// Builds a frame from `params` zipped against `args` and conses it
    /// onto `parent`. Mirrors the original interpreter's
    /// `extend_environment`: if the lists differ in length, the shorter
    /// one controls and the rest are silently dropped. Callers that need
    /// arity enforcement (see `eval::apply`) check lengths beforehand.
    pub fn extend(params: &Value, args: &Value, parent: Rc<Environment>) -> Rc<Self> {
        let pairs = Value::zip(params, args)
            .to_vec()
            .expect("zip always terminates in Nil, never an improper tail");
        let mut bindings = HashMap::new();
        for pair in pairs {
            if let Value::Pair(name, value) = pair {
                if let Value::Symbol(name) = &*name {
                    bindings.insert(name.clone(), (*value).clone());
                }
            }
        }
        Rc::new(Environment {
            bindings: RefCell::new(bindings),
            parent: Some(parent),
        })
    }

    /// Walks the head frame for a binding whose key is `eq` to `symbol`;
    /// if absent, recurses on the parent. Returns `None` once the chain
    /// is exhausted (the "empty environment" case); `eval::eval` turns
    /// that into `EvalError::UnboundIdentifier`.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.lookup(name))
    }

    /// Update-or-insert in the innermost (this) frame only. Parents are
    /// never searched or modified — this is what gives REPL top-level
    /// redefinition its expected behavior and inner `define`s a local
    /// effect.
    pub fn define(&self, name: Rc<str>, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_and_lookup() {
        let env = Environment::global();
        env.define("x".into(), Value::Integer(42));
        assert!(matches!(env.lookup("x"), Some(Value::Integer(42))));
    }

    #[test]
    fn global_pre_binds_boolean_keyword_symbols() {
        let env = Environment::global();
        assert!(matches!(env.lookup("#t"), Some(Value::Symbol(s)) if &*s == "#t"));
        assert!(matches!(env.lookup("#f"), Some(Value::Symbol(s)) if &*s == "#f"));
    }

    #[test]
    fn unbound_symbol_is_none() {
        let env = Environment::global();
        assert!(env.lookup("undefined").is_none());
    }

    #[test]
    fn inner_define_shadows_without_mutating_parent() {
        let parent = Environment::global();
        parent.define("x".into(), Value::Integer(1));

        let child = Environment::extend(&Value::Nil, &Value::Nil, parent.clone());
        child.define("x".into(), Value::Integer(2));

        assert!(matches!(child.lookup("x"), Some(Value::Integer(2))));
        assert!(matches!(parent.lookup("x"), Some(Value::Integer(1))));
    }

    #[test]
    fn lookup_walks_to_parent() {
        let parent = Environment::global();
        parent.define("x".into(), Value::Integer(42));
        let child = Environment::extend(&Value::Nil, &Value::Nil, parent);
        assert!(matches!(child.lookup("x"), Some(Value::Integer(42))));
    }

    #[test]
    fn extend_zips_params_and_args() {
        let global = Environment::global();
        let params = Value::list(vec![Value::symbol("a"), Value::symbol("b")]);
        let args = Value::list(vec![Value::Integer(1), Value::Integer(2)]);
        let frame = Environment::extend(&params, &args, global);
        assert!(matches!(frame.lookup("a"), Some(Value::Integer(1))));
        assert!(matches!(frame.lookup("b"), Some(Value::Integer(2))));
    }

    #[test]
    fn extend_shorter_list_controls() {
        let global = Environment::global();
        let params = Value::list(vec![Value::symbol("a"), Value::symbol("b")]);
        let args = Value::list(vec![Value::Integer(1)]);
        let frame = Environment::extend(&params, &args, global);
        assert!(matches!(frame.lookup("a"), Some(Value::Integer(1))));
        assert!(frame.lookup("b").is_none());
    }

    #[test]
    fn redefine_in_same_frame_overwrites() {
        let env = Environment::global();
        env.define("x".into(), Value::Integer(1));
        env.define("x".into(), Value::Integer(2));
        assert!(matches!(env.lookup("x"), Some(Value::Integer(2))));
    }
}
