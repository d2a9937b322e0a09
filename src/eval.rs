// ABOUTME: Evaluator module for executing parsed expressions against an environment

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{truth, Value};
use std::rc::Rc;

/// Evaluates `expr` in `env`, dispatching on its shape per spec.md §4.5:
/// self-evaluating values, quoted forms, symbol lookup, `if`, `lambda`,
/// `define`, and application. Recurses directly on sub-expressions and
/// sequence bodies — no trampoline, no TCO guarantee (see SPEC_FULL.md §5).
pub fn eval(expr: Value, env: Rc<Environment>) -> Result<Value, EvalError> {
    match &expr {
        // Self-evaluating.
        Value::Integer(_) | Value::String(_) | Value::Nil => Ok(expr),
        Value::Character(_) | Value::Function(_) | Value::Lambda { .. } => Ok(expr),

        Value::Symbol(name) => env
            .lookup(name)
            .ok_or_else(|| EvalError::UnboundIdentifier(name.to_string())),

        Value::Pair(head, _) => match &**head {
            Value::Symbol(s) if &**s == "quote" => eval_quote(&expr),
            Value::Symbol(s) if &**s == "if" => eval_if(&expr, env),
            Value::Symbol(s) if &**s == "lambda" => eval_lambda(&expr, env),
            Value::Symbol(s) if &**s == "define" => eval_define(&expr, env),
            _ => eval_application(&expr, env),
        },
    }
}

/// `(quote X)` — returns `X` unevaluated.
fn eval_quote(expr: &Value) -> Result<Value, EvalError> {
    let args = expr.cdr()?;
    if !matches!(args.cdr()?, Value::Nil) {
        return Err(EvalError::malformed("quote", "expected exactly 1 argument"));
    }
    args.car()
}

/// `(if test consq alt?)` — only `#t` is true; everything else (including
/// `#f`) is false. A missing `alt` evaluates to `#f`.
fn eval_if(expr: &Value, env: Rc<Environment>) -> Result<Value, EvalError> {
    let args = expr.cdr()?;
    let items = args.to_vec()?;
    if items.len() != 2 && items.len() != 3 {
        return Err(EvalError::malformed("if", "expected 2 or 3 arguments"));
    }

    let test = eval(items[0].clone(), env.clone())?;
    if test.eq(&truth()) {
        eval(items[1].clone(), env)
    } else if let Some(alt) = items.get(2) {
        eval(alt.clone(), env)
    } else {
        Ok(crate::value::falsehood())
    }
}

/// `(lambda (p1 ... pn) body...)` — builds a closure capturing `env`.
fn eval_lambda(expr: &Value, env: Rc<Environment>) -> Result<Value, EvalError> {
    let args = expr.cdr()?;
    let params = args
        .car()
        .map_err(|_| EvalError::malformed("lambda", "expected a parameter list and a body"))?;
    if !params.is_list() || !params_are_symbols(&params)? {
        return Err(EvalError::malformed("lambda", "parameters must be a list of symbols"));
    }
    let body = args.cdr()?;
    if matches!(body, Value::Nil) {
        return Err(EvalError::malformed("lambda", "expected at least one body expression"));
    }
    Ok(Value::Lambda {
        params: Rc::new(params),
        body: Rc::new(body),
        env,
    })
}

fn params_are_symbols(params: &Value) -> Result<bool, EvalError> {
    Ok(params.to_vec()?.iter().all(|p| p.is_symbol()))
}

/// Two surface forms:
/// - `(define name value-expr)` — evaluate and bind in this frame.
/// - `(define (name p1 ... pn) body...)` — sugar for
///   `(define name (lambda (p1 ... pn) body...))`.
///
/// Returns `Nil` in both cases.
fn eval_define(expr: &Value, env: Rc<Environment>) -> Result<Value, EvalError> {
    let args = expr.cdr()?;
    let target = args
        .car()
        .map_err(|_| EvalError::malformed("define", "expected a name or function header"))?;

    match target {
        Value::Symbol(name) => {
            let value_expr = args.cadr()?;
            let value = eval(value_expr, env.clone())?;
            env.define(name, value);
            Ok(Value::Nil)
        }
        Value::Pair(..) => {
            let name = target.car()?;
            let name = match name {
                Value::Symbol(s) => s,
                other => {
                    return Err(EvalError::malformed(
                        "define",
                        format!("function name must be a symbol, got {}", other.type_name()),
                    ))
                }
            };
            let params = target.cdr()?;
            let body = args.cdr()?;
            if matches!(body, Value::Nil) {
                return Err(EvalError::malformed("define", "expected a function body"));
            }
            let lambda = Value::Lambda {
                params: Rc::new(params),
                body: Rc::new(body),
                env: env.clone(),
            };
            env.define(name, lambda);
            Ok(Value::Nil)
        }
        other => Err(EvalError::malformed(
            "define",
            format!("expected a symbol or list, got {}", other.type_name()),
        )),
    }
}

/// Evaluates every element of the list in `env`, operator position
/// included, left to right, then applies the result.
fn eval_application(expr: &Value, env: Rc<Environment>) -> Result<Value, EvalError> {
    let items = expr.to_vec()?;
    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        evaluated.push(eval(item, env.clone())?);
    }
    let mut iter = evaluated.into_iter();
    let func = iter.next().expect("application list is never empty");
    let args = Value::list(iter.collect());
    apply(func, args)
}

/// Applies `fn` to an argument-list `Value`.
///
/// - A primitive procedure invokes its host callable directly.
/// - A compound procedure extends its captured environment with params
///   bound to `args` (arity-checked, per spec.md §7.3's recommendation)
///   and evaluates its body sequence in that new environment.
/// - Anything else is `EvalError::NotCallable`.
pub fn apply(func: Value, args: Value) -> Result<Value, EvalError> {
    match func {
        Value::Function(f) => f(args),
        Value::Lambda { params, body, env } => {
            let param_count = params.to_vec()?.len();
            let arg_count = args.to_vec()?.len();
            if param_count != arg_count {
                return Err(EvalError::arity(
                    "procedure application",
                    param_count.to_string(),
                    arg_count,
                ));
            }
            let call_env = Environment::extend(&params, &args, env);
            eval_sequence(&body, call_env)
        }
        other => Err(EvalError::NotCallable {
            got: other.type_name(),
        }),
    }
}

/// Evaluates each expression in a proper-list sequence for side effects,
/// returning the value of the last. An empty sequence evaluates to `Nil`.
fn eval_sequence(exprs: &Value, env: Rc<Environment>) -> Result<Value, EvalError> {
    let items = exprs.to_vec()?;
    let Some((last, rest)) = items.split_last() else {
        return Ok(Value::Nil);
    };
    for item in rest {
        eval(item.clone(), env.clone())?;
    }
    eval(last.clone(), env)
}
