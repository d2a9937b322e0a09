// ABOUTME: Error types for reader and evaluation failures

use thiserror::Error;

/// Errors raised while tokenizing or parsing a line of source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("trailing input after expression: {0}")]
    TrailingInput(String),
}

/// Errors raised while evaluating a parsed expression.
#[derive(Error, Debug, Clone)]
pub enum EvalError {
    #[error("unbound identifier: {0}")]
    UnboundIdentifier(String),

    #[error("{operation}: called on non-pair value of type {got}")]
    NotAPair {
        operation: &'static str,
        got: &'static str,
    },

    #[error("{context}: expected {expected} argument(s), got {actual}")]
    ArityMismatch {
        context: String,
        expected: String,
        actual: usize,
    },

    #[error("{context}: expected {expected}, got {got}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    #[error("value is not a procedure: {got}")]
    NotCallable { got: &'static str },

    #[error("{form}: {message}")]
    MalformedSpecialForm { form: &'static str, message: String },
}

impl EvalError {
    pub fn arity(context: impl Into<String>, expected: impl Into<String>, actual: usize) -> Self {
        EvalError::ArityMismatch {
            context: context.into(),
            expected: expected.into(),
            actual,
        }
    }

    pub fn type_mismatch(context: &'static str, expected: &'static str, got: &'static str) -> Self {
        EvalError::TypeMismatch {
            context,
            expected,
            got,
        }
    }

    pub fn malformed(form: &'static str, message: impl Into<String>) -> Self {
        EvalError::MalformedSpecialForm {
            form,
            message: message.into(),
        }
    }
}

/// The REPL's propagation policy (spec.md §7) surfaces every turn's
/// failure, reader or evaluator, via one typed sum so `repl.rs` can print
/// a single diagnostic line and return to the prompt.
#[derive(Error, Debug, Clone)]
pub enum ReplError {
    #[error(transparent)]
    Reader(#[from] ReaderError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
