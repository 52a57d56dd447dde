//! Optional-chained property reads.

use crate::error::{Error, Result};
use crate::value::{Shape, Value, is_like};

/// Reads a property, or walks a path when `properties` is array-like.
///
/// A nullish or primitive step yields `Undefined` rather than failing.
pub fn prop(properties: &Value, value: &Value) -> Value {
    match properties.array_like_elements() {
        Some(path) => path
            .iter()
            .fold(value.clone(), |current, key| current.property(key)),
        None => value.property(properties),
    }
}

/// Reads several properties or paths from the same value.
///
/// # Errors
///
/// Returns `InvalidArgument` when `properties` is not array-like.
pub fn props(properties: &Value, value: &Value) -> Result<Value> {
    let Some(entries) = properties.array_like_elements() else {
        return Err(Error::invalid_argument(
            "properties",
            "an array-like of property keys or paths",
        ));
    };
    Ok(entries.iter().map(|entry| prop(entry, value)).collect())
}

/// Checks that a property exists, the way `key in value` does.
///
/// For an array-like path, every step must exist on an object-like value
/// and the result is the truthiness of the value finally reached.
pub fn has_prop(properties: &Value, value: &Value) -> bool {
    match properties.array_like_elements() {
        Some(path) => path
            .iter()
            .fold(value.clone(), |current, key| {
                if is_like(Shape::Object, &current) && current.has_property(key) {
                    current.property(key)
                } else {
                    Value::Undefined
                }
            })
            .is_truthy(),
        None => is_like(Shape::Object, value) && value.has_property(properties),
    }
}

/// Checks several properties or paths on the same value.
///
/// # Errors
///
/// Returns `InvalidArgument` when `properties` is not array-like.
pub fn has_props(properties: &Value, value: &Value) -> Result<Value> {
    let Some(entries) = properties.array_like_elements() else {
        return Err(Error::invalid_argument(
            "properties",
            "an array-like of property keys or paths",
        ));
    };
    Ok(entries
        .iter()
        .map(|entry| Value::from(has_prop(entry, value)))
        .collect())
}
