//! Built-in methods of arrays, strings, maps and sets.
//!
//! These are what `invoke`, `method` and `trigger` find when asked for a
//! method by name on a non-object receiver, e.g. `invoke("at", array, 1)`.
//! Each lookup returns a fresh [`Function`] bound to the receiver.

use crate::function::{Function, argument};

use super::{TypeTag, Value};

pub(super) fn method(receiver: &Value, name: &str) -> Option<Function> {
    let function = match (receiver.type_tag(), name) {
        (TypeTag::Array | TypeTag::String, "at") => {
            bound(name, 1, receiver.clone(), |receiver, arguments| {
                let length = receiver.array_like_length_or_chars();
                relative_index(&argument(arguments, 0), length)
                    .map_or(Value::Undefined, |index| receiver.property(&Value::from(index)))
            })
        }
        (TypeTag::Array, "includes") => bound(name, 1, receiver.clone(), |receiver, arguments| {
            let target = argument(arguments, 0);
            let items = receiver.as_array().unwrap_or_default();
            Value::from(items.iter().any(|item| item.same_value_zero(&target)))
        }),
        (TypeTag::Array, "indexOf") => bound(name, 1, receiver.clone(), |receiver, arguments| {
            let target = argument(arguments, 0);
            let items = receiver.as_array().unwrap_or_default();
            items
                .iter()
                .position(|item| item == &target)
                .map_or(Value::from(-1), Value::from)
        }),
        (TypeTag::Array, "join") => bound(name, 1, receiver.clone(), |receiver, arguments| {
            let separator = match argument(arguments, 0) {
                Value::Undefined => ",".to_owned(),
                other => other.to_string(),
            };
            let items = receiver.as_array().unwrap_or_default();
            let parts: Vec<String> = items
                .iter()
                .map(|item| {
                    if item.is_nullish() {
                        String::new()
                    } else {
                        item.to_string()
                    }
                })
                .collect();
            Value::from(parts.join(&separator))
        }),
        (TypeTag::Array, "slice") => bound(name, 2, receiver.clone(), |receiver, arguments| {
            let items = receiver.as_array().unwrap_or_default();
            let start = relative_bound(&argument(arguments, 0), items.len(), 0);
            let end = relative_bound(&argument(arguments, 1), items.len(), items.len());
            Value::array(items.get(start..end.max(start)).unwrap_or_default().to_vec())
        }),
        (TypeTag::String, "includes") => bound(name, 1, receiver.clone(), |receiver, arguments| {
            let needle = argument(arguments, 0).to_string();
            Value::from(receiver.as_str().is_some_and(|text| text.contains(&needle)))
        }),
        (TypeTag::String, "toUpperCase") => bound(name, 0, receiver.clone(), |receiver, _| {
            Value::from(receiver.as_str().unwrap_or_default().to_uppercase())
        }),
        (TypeTag::String, "toLowerCase") => bound(name, 0, receiver.clone(), |receiver, _| {
            Value::from(receiver.as_str().unwrap_or_default().to_lowercase())
        }),
        (TypeTag::String, "trim") => bound(name, 0, receiver.clone(), |receiver, _| {
            Value::from(receiver.as_str().unwrap_or_default().trim())
        }),
        (TypeTag::Map, "get") => bound(name, 1, receiver.clone(), |receiver, arguments| {
            let key = argument(arguments, 0);
            match receiver {
                Value::Map(entries) => entries
                    .iter()
                    .find(|(existing, _)| existing.same_value_zero(&key))
                    .map(|(_, value)| value.clone())
                    .unwrap_or_default(),
                _ => Value::Undefined,
            }
        }),
        (TypeTag::Map | TypeTag::Set, "has") => {
            bound(name, 1, receiver.clone(), |receiver, arguments| {
                let key = argument(arguments, 0);
                Value::from(match receiver {
                    Value::Map(entries) => {
                        entries.iter().any(|(existing, _)| existing.same_value_zero(&key))
                    }
                    Value::Set(items) => items.iter().any(|item| item.same_value_zero(&key)),
                    _ => false,
                })
            })
        }
        _ => return None,
    };
    Some(function)
}

fn bound<F>(name: &str, arity: usize, receiver: Value, body: F) -> Function
where
    F: Fn(&Value, &[Value]) -> Value + 'static,
{
    Function::named(name, arity, move |arguments| Ok(body(&receiver, arguments.as_slice())))
}

impl Value {
    fn array_like_length_or_chars(&self) -> usize {
        match self {
            Self::String(text) => text.chars().count(),
            other => other.array_like_length().unwrap_or(0),
        }
    }
}

/// Resolves an `at`-style index: negative values count from the end.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn relative_index(index: &Value, length: usize) -> Option<usize> {
    let number = index.to_number();
    let integral = if number.is_nan() { 0.0 } else { number.trunc() };
    let resolved = if integral < 0.0 {
        length as f64 + integral
    } else {
        integral
    };
    (resolved >= 0.0 && resolved < length as f64).then(|| resolved as usize)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn relative_bound(index: &Value, length: usize, default: usize) -> usize {
    if matches!(index, Value::Undefined) {
        return default;
    }
    let number = index.to_number();
    let integral = if number.is_nan() { 0.0 } else { number.trunc() };
    let resolved = if integral < 0.0 {
        (length as f64 + integral).max(0.0)
    } else {
        integral.min(length as f64)
    };
    resolved as usize
}
