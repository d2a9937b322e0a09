//! Built-in procedures bound in the global environment.
//!
//! Each primitive is a host callable over a single argument-list `Value`
//! (see `Value::Function`), grouped into the same categories the
//! original interpreter and spec.md §4.4 describe: arithmetic,
//! comparison, equality, and pair manipulation.

use crate::env::Environment;
use std::rc::Rc;

mod arithmetic;
mod comparison;
mod equality;
mod pairs;

/// Registers every primitive procedure in the global environment.
pub fn register(env: &Rc<Environment>) {
    arithmetic::register(env);
    comparison::register(env);
    equality::register(env);
    pairs::register(env);
}
