#![cfg(feature = "derive")]
//! Tests for the `function!` procedural macro.
//!
//! - Closure form: `function!(|a, b| body)` declares the closure's parameter
//!   count as arity
//! - Path form: `function!(name, arity)` wraps a named Rust function and
//!   keeps its name

use fnkit::{Error, Result, Value, compose, curry, function};
use rstest::rstest;

// =============================================================================
// Closure form
// =============================================================================

#[rstest]
fn test_closure_arity_is_parameter_count() {
    let none = function!(|| Value::Null);
    let two = function!(|a, b| Value::array([a, b]));
    let three = function!(|_a: Value, _b: Value, c: Value| c);

    assert_eq!(none.arity(), 0);
    assert_eq!(two.arity(), 2);
    assert_eq!(three.arity(), 3);
}

#[rstest]
fn test_closure_binds_arguments_positionally() {
    let pow = function!(|base: Value, exponent: Value| {
        base.to_number().powf(exponent.to_number())
    });
    assert_eq!(
        pow.call([Value::from(5), Value::from(2)]).unwrap(),
        Value::from(25)
    );
}

#[rstest]
fn test_closure_missing_arguments_are_undefined() {
    let second = function!(|_first: Value, second: Value| second);
    assert_eq!(second.call([Value::from(1)]).unwrap(), Value::Undefined);
}

#[rstest]
fn test_closure_body_may_fail() {
    let checked = function!(|value: Value| -> Result<Value> {
        if value.is_nullish() {
            return Err(Error::Thrown(Value::from("missing")));
        }
        Ok(value)
    });
    assert_eq!(
        checked.call([Value::Null]).unwrap_err(),
        Error::Thrown(Value::from("missing"))
    );
}

#[rstest]
fn test_closure_captures_environment() {
    let prefix = String::from("Hello, ");
    let greet = function!(|name: Value| format!("{prefix}{name}"));
    assert_eq!(
        greet.call([Value::from("Ada")]).unwrap(),
        Value::from("Hello, Ada")
    );
}

#[rstest]
fn test_closure_functions_compose() {
    let pow = function!(|base: Value, exponent: Value| {
        base.to_number().powf(exponent.to_number())
    });
    let pair = function!(|n: Value| Value::array([n.to_number() + 1.0, 2.0]));
    let composed = compose(&[Value::from(pow), Value::from(pair)]).unwrap();
    assert_eq!(composed.call([Value::from(4)]).unwrap(), Value::from(25));
}

// =============================================================================
// Path form
// =============================================================================

fn add(first: Value, second: Value) -> f64 {
    first.to_number() + second.to_number()
}

fn divide(numerator: Value, denominator: Value) -> Result<Value> {
    let denominator = denominator.to_number();
    if denominator == 0.0 {
        return Err(Error::Thrown(Value::from("division by zero")));
    }
    Ok(Value::from(numerator.to_number() / denominator))
}

#[rstest]
fn test_path_form_keeps_name_and_arity() {
    let added = function!(add, 2);
    assert_eq!(added.name(), "add");
    assert_eq!(added.arity(), 2);
    assert_eq!(
        added.call([Value::from(1), Value::from(2)]).unwrap(),
        Value::from(3)
    );
}

#[rstest]
fn test_path_form_propagates_errors() {
    let divided = function!(divide, 2);
    assert!(divided.call([Value::from(1), Value::from(0)]).is_err());
    assert_eq!(
        divided.call([Value::from(9), Value::from(3)]).unwrap(),
        Value::from(3)
    );
}

#[rstest]
fn test_path_form_curries() {
    let curried = curry(&Value::from(function!(add, 2))).unwrap();
    let add_ten = curried.call([Value::from(10)]).unwrap();
    assert_eq!(
        add_ten
            .as_function()
            .unwrap()
            .call([Value::from(5)])
            .unwrap(),
        Value::from(15)
    );
}
