//! Helpers around side effects and plain values.

use crate::error::{Error, Result};
use crate::function::{Function, expect_function, expect_functions};
use crate::value::Value;

/// Returns the value unchanged.
pub fn identity(value: Value) -> Value {
    value
}

/// Fails with [`Error::Thrown`] carrying `value`.
///
/// # Errors
///
/// Always.
pub fn raise(value: Value) -> Result<Value> {
    Err(Error::Thrown(value))
}

/// Calls `predicate(parameter)` for its side effect and returns `parameter`.
///
/// # Errors
///
/// Returns `InvalidArgument` when `predicate` is not callable, or whatever
/// the predicate fails with.
pub fn effect(predicate: &Value, parameter: Value) -> Result<Value> {
    let predicate = expect_function("predicate", predicate)?;
    predicate.call([parameter.clone()])?;
    Ok(parameter)
}

/// Calls `predicate(...parameters)` and returns `value` regardless of the
/// predicate's result.
///
/// # Errors
///
/// Returns `InvalidArgument` when `predicate` is not callable, or whatever
/// the predicate fails with.
pub fn enforce(predicate: &Value, value: Value, parameters: &[Value]) -> Result<Value> {
    let predicate = expect_function("predicate", predicate)?;
    predicate.call(parameters.iter().cloned())?;
    Ok(value)
}

/// Builds a function that applies every predicate to the same parameters
/// and returns the results as an array.
///
/// # Errors
///
/// Returns `InvalidArgument` when any predicate is not callable.
pub fn extract(predicates: &[Value]) -> Result<Function> {
    let predicates = expect_functions("predicates", predicates)?;
    Ok(Function::named("extract", 0, move |parameters| {
        predicates
            .iter()
            .map(|predicate| predicate.call(parameters.iter().cloned()))
            .collect()
    }))
}
