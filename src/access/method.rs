//! Calling functions stored under a property.

use crate::error::{Error, Result};
use crate::function::{Function, expect_function};
use crate::value::Value;

fn resolve(method: &Value, object: &Value) -> Result<Function> {
    if !object.has_property(method) {
        tracing::debug!(method = %method, receiver = %object.type_tag(), "method not found");
        return Err(Error::invalid_argument("method", "a property of \"object\""));
    }
    expect_function("method", &object.property(method))
}

/// Calls `object[method](...parameters)`.
///
/// # Errors
///
/// Returns `InvalidArgument` when the property does not exist or is not
/// callable, or whatever the method fails with.
pub fn invoke(method: &Value, object: &Value, parameters: &[Value]) -> Result<Value> {
    resolve(method, object)?.call(parameters.iter().cloned())
}

/// Same call as [`invoke`]. The curried builtin fires once the method
/// name and receiver are known, while `invoke` also waits for a parameter.
///
/// # Errors
///
/// Same as [`invoke`].
pub fn method(method: &Value, object: &Value, parameters: &[Value]) -> Result<Value> {
    invoke(method, object, parameters)
}

/// Captures a method name and parameters, returning a function that calls
/// the method on whatever object it receives.
pub fn trigger(method: &Value, parameters: &[Value]) -> Function {
    let method = method.clone();
    let parameters: Vec<Value> = parameters.to_vec();
    Function::named("trigger", 1, move |arguments| {
        let object = arguments.first().cloned().unwrap_or_default();
        invoke(&method, &object, &parameters)
    })
}
