//! Builders that produce new objects.

use crate::error::{Error, Result};
use crate::value::{Object, Value};

/// Returns a copy of `object` with each key transformed by the function
/// stored under the same key in `by`.
///
/// Keys without a transformer, and transformers returning a nullish value,
/// keep the original value.
///
/// # Errors
///
/// Returns `InvalidArgument` when `object` is not an object or a
/// transformer is neither callable nor nullish. Failures of a transformer
/// propagate.
pub fn modify(by: &Value, object: &Value) -> Result<Value> {
    let Some(entries) = object.as_object() else {
        return Err(Error::invalid_argument("object", "an object"));
    };

    let mut modified = Object::with_capacity(entries.len());
    for (key, value) in entries {
        let updated = match by.property(&Value::from(key.as_str())) {
            Value::Function(transform) => transform.call([value.clone()])?,
            transform if transform.is_nullish() => Value::Undefined,
            _ => return Err(Error::invalid_argument("by", "an object of functions")),
        };
        let updated = if updated.is_nullish() {
            value.clone()
        } else {
            updated
        };
        modified.insert(key.clone(), updated);
    }
    Ok(Value::from(modified))
}

/// Builds an object from keys and values.
///
/// A string key yields `{ key: values }`. An array-like list of keys is
/// zipped with the indexed elements of `values`; missing values read as
/// `Undefined`.
///
/// # Errors
///
/// Returns `InvalidArgument` when `keys` is neither a string nor an
/// array-like.
pub fn object_of(keys: &Value, values: &Value) -> Result<Value> {
    if let Value::String(key) = keys {
        return Ok(Value::object([(key.to_string(), values.clone())]));
    }

    let Some(keys) = keys.array_like_elements() else {
        return Err(Error::invalid_argument("keys", "a string or an array-like"));
    };
    Ok(Value::object(keys.iter().enumerate().map(|(index, key)| {
        (key.to_property_key(), values.property(&Value::from(index)))
    })))
}
