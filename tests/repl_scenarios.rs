// ABOUTME: End-to-end REPL scenarios - each line of source mapped to its printed value

use mini_scheme::env::Environment;
use mini_scheme::eval::eval;
use mini_scheme::primitives;
use mini_scheme::reader::read;
use std::rc::Rc;

fn fresh_env() -> Rc<Environment> {
    let env = Environment::global();
    primitives::register(&env);
    env
}

fn turn(src: &str, env: &Rc<Environment>) -> String {
    eval(read(src).unwrap(), env.clone()).unwrap().to_string()
}

#[test]
fn sum_of_three_integers() {
    let env = fresh_env();
    assert_eq!(turn("(+ 1 2 3)", &env), "6");
}

#[test]
fn define_then_call_squaring_function() {
    let env = fresh_env();
    assert_eq!(turn("(define (sq x) (* x x))", &env), "()");
    assert_eq!(turn("(sq 5)", &env), "25");
}

#[test]
fn immediately_invoked_lambda() {
    let env = fresh_env();
    assert_eq!(turn("((lambda (x y) (+ x y)) 3 4)", &env), "7");
}

#[test]
fn if_with_quoted_symbol_branches() {
    let env = fresh_env();
    assert_eq!(turn("(if (< 2 3) 'yes 'no)", &env), "yes");
}

#[test]
fn recursive_factorial_via_define() {
    let env = fresh_env();
    assert_eq!(
        turn("(define (fact n) (if (= n 0) 1 (* n (fact (- n 1)))))", &env),
        "()"
    );
    assert_eq!(turn("(fact 5)", &env), "120");
}

#[test]
fn cons_chain_prints_as_proper_list() {
    let env = fresh_env();
    assert_eq!(turn("(cons 1 (cons 2 (cons 3 '())))", &env), "(1 2 3)");
}

#[test]
fn empty_plus_is_zero_and_empty_times_is_one() {
    let env = fresh_env();
    assert_eq!(turn("(+)", &env), "0");
    assert_eq!(turn("(*)", &env), "1");
}

#[test]
fn if_without_alternate_is_hash_f_on_false_branch() {
    let env = fresh_env();
    assert_eq!(turn("(if (< 3 2) 1)", &env), "#f");
}

#[test]
fn repl_style_turn_by_turn_redefinition() {
    let env = fresh_env();
    assert_eq!(turn("(define x 1)", &env), "()");
    assert_eq!(turn("x", &env), "1");
    assert_eq!(turn("(define x 2)", &env), "()");
    assert_eq!(turn("x", &env), "2");
}

#[test]
fn error_turn_does_not_poison_the_environment() {
    let env = fresh_env();
    assert!(eval(read("undefined-name").unwrap(), env.clone()).is_err());
    // The environment is still usable for the next turn.
    assert_eq!(turn("(+ 1 1)", &env), "2");
}

#[test]
fn bare_boolean_keyword_symbols_are_not_unbound_identifiers() {
    let env = fresh_env();
    assert_eq!(turn("#t", &env), "#t");
    assert_eq!(turn("#f", &env), "#f");
    assert_eq!(turn("(define done #f)", &env), "()");
    assert_eq!(turn("done", &env), "#f");
    assert_eq!(turn("(define flag #t)", &env), "()");
    assert_eq!(turn("(if flag #t #f)", &env), "#t");
}
