//! Conditional application.
//!
//! Predicates are judged by truthiness, so a predicate may return any value.

use crate::error::Result;
use crate::function::{argument, expect_function};
use crate::value::Value;

/// Calls `on_true(...parameters)` when `predicate(...parameters)` is truthy,
/// `on_false(...parameters)` otherwise.
///
/// # Errors
///
/// Returns `InvalidArgument` when any of the three functions is not
/// callable; they are checked in parameter order.
pub fn condition(
    predicate: &Value,
    on_true: &Value,
    on_false: &Value,
    parameters: &[Value],
) -> Result<Value> {
    let predicate = expect_function("predicate", predicate)?;
    let on_true = expect_function("onTrue", on_true)?;
    let on_false = expect_function("onFalse", on_false)?;

    if predicate.call(parameters.iter().cloned())?.is_truthy() {
        on_true.call(parameters.iter().cloned())
    } else {
        on_false.call(parameters.iter().cloned())
    }
}

/// Calls `on_true(...parameters)` when the predicate holds, otherwise
/// returns the first parameter unchanged.
///
/// # Errors
///
/// Returns `InvalidArgument` when `predicate` or `on_true` is not callable.
pub fn when(predicate: &Value, on_true: &Value, parameters: &[Value]) -> Result<Value> {
    let predicate = expect_function("predicate", predicate)?;
    let on_true = expect_function("onTrue", on_true)?;

    if predicate.call(parameters.iter().cloned())?.is_truthy() {
        on_true.call(parameters.iter().cloned())
    } else {
        Ok(argument(parameters, 0))
    }
}

/// Returns the first parameter unchanged when the predicate holds,
/// otherwise calls `on_false(...parameters)`.
///
/// # Errors
///
/// Returns `InvalidArgument` when `predicate` or `on_false` is not callable.
pub fn unless(predicate: &Value, on_false: &Value, parameters: &[Value]) -> Result<Value> {
    let predicate = expect_function("predicate", predicate)?;
    let on_false = expect_function("onFalse", on_false)?;

    if predicate.call(parameters.iter().cloned())?.is_truthy() {
        Ok(argument(parameters, 0))
    } else {
        on_false.call(parameters.iter().cloned())
    }
}

/// Returns the truthiness of `predicate(...parameters)` as a boolean.
///
/// # Errors
///
/// Returns `InvalidArgument` when `predicate` is not callable.
pub fn satisfies(predicate: &Value, parameters: &[Value]) -> Result<Value> {
    let predicate = expect_function("predicate", predicate)?;
    Ok(Value::from(
        predicate.call(parameters.iter().cloned())?.is_truthy(),
    ))
}
