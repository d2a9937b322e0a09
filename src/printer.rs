// ABOUTME: Printer - renders a Value as its external text representation

use crate::value::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Character(c) => write!(f, "{}", c),
            // No quotes added, per the Open Question resolution in
            // SPEC_FULL.md §4.1: the reader already stripped them.
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Nil => write!(f, "()"),
            Value::Function(_) => write!(f, "#<primitive-procedure>"),
            Value::Lambda { .. } => write!(f, "#<compound-procedure>"),
            Value::Pair(car, cdr) => {
                write!(f, "(")?;
                write!(f, "{}", car)?;
                let mut tail = &**cdr;
                loop {
                    match tail {
                        Value::Nil => break,
                        Value::Pair(next_car, next_cdr) => {
                            write!(f, " {}", next_car)?;
                            tail = next_cdr;
                        }
                        other => {
                            write!(f, " . {}", other)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}
