//! Element and entry lookup in collections.

use crate::error::{Error, Result};
use crate::value::{Value, relative_index};

/// Reads the content stored under `key`.
///
/// | receiver | rule |
/// |----------|------|
/// | Array    | element at `key`; negative keys count from the end |
/// | Map      | value whose key equals `key` under SameValueZero |
/// | Object   | own key, coerced to a string |
///
/// A missing element or entry is `Undefined`.
///
/// # Errors
///
/// Returns `Unsupported` for any other receiver.
pub fn field(key: &Value, object: &Value) -> Result<Value> {
    match object {
        Value::Array(items) => Ok(relative_index(key, items.len())
            .and_then(|index| items.get(index).cloned())
            .unwrap_or_default()),
        Value::Map(entries) => Ok(entries
            .iter()
            .find(|(existing, _)| existing.same_value_zero(key))
            .map(|(_, value)| value.clone())
            .unwrap_or_default()),
        Value::Object(entries) => Ok(entries
            .get(&key.to_property_key())
            .cloned()
            .unwrap_or_default()),
        other => Err(Error::Unsupported {
            operation: "Getter",
            type_tag: other.type_tag(),
        }),
    }
}

/// Reads several fields from the same collection.
///
/// # Errors
///
/// Returns `InvalidArgument` when `keys` is not array-like, or the first
/// error of [`field`].
pub fn fields(keys: &Value, object: &Value) -> Result<Value> {
    let Some(keys) = keys.array_like_elements() else {
        return Err(Error::invalid_argument("keys", "an array-like of field keys"));
    };
    keys.iter().map(|key| field(key, object)).collect()
}

/// Checks whether a collection holds `key`.
///
/// Arrays check their elements, maps and sets their keys, objects their own
/// keys.
///
/// # Errors
///
/// Returns `Unsupported` for any other receiver.
pub fn has_field(key: &Value, object: &Value) -> Result<bool> {
    match object {
        Value::Array(items) | Value::Set(items) => {
            Ok(items.iter().any(|item| item.same_value_zero(key)))
        }
        Value::Map(entries) => Ok(entries
            .iter()
            .any(|(existing, _)| existing.same_value_zero(key))),
        Value::Object(entries) => Ok(entries.contains_key(&key.to_property_key())),
        other => Err(Error::Unsupported {
            operation: "Lookup",
            type_tag: other.type_tag(),
        }),
    }
}

/// Checks several keys against the same collection.
///
/// # Errors
///
/// Returns `InvalidArgument` when `keys` is not array-like, or the first
/// error of [`has_field`].
pub fn has_fields(keys: &Value, object: &Value) -> Result<Value> {
    let Some(keys) = keys.array_like_elements() else {
        return Err(Error::invalid_argument("keys", "an array-like of field keys"));
    };
    keys.iter()
        .map(|key| has_field(key, object).map(Value::from))
        .collect()
}

/// Checks whether a collection contains `value` among its values.
///
/// # Errors
///
/// Returns `Unsupported` unless the receiver is an array or a map.
pub fn includes(value: &Value, object: &Value) -> Result<bool> {
    match object {
        Value::Array(items) => Ok(items.iter().any(|item| item.same_value_zero(value))),
        Value::Map(entries) => Ok(entries
            .iter()
            .any(|(_, existing)| existing.same_value_zero(value))),
        other => Err(Error::Unsupported {
            operation: "Lookup",
            type_tag: other.type_tag(),
        }),
    }
}
