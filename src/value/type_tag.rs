//! Shape classification for dynamic values.
//!
//! [`classify`] maps every [`Value`] onto the closed [`TypeTag`] set, and
//! [`is_like`] answers the capability questions the engines and accessors
//! ask before dispatching: can this be called, spread, iterated, or read as
//! an object?

use std::fmt;

use super::Value;

/// The closed set of value shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// The absent value.
    Undefined,
    /// The empty value.
    Null,
    /// `true` or `false`.
    Boolean,
    /// A double precision number.
    Number,
    /// An immutable string.
    String,
    /// An ordered sequence of values.
    Array,
    /// A record with insertion-ordered string keys.
    Object,
    /// A keyed collection with arbitrary value keys.
    Map,
    /// A collection of distinct values.
    Set,
    /// A callable value.
    Function,
}

impl TypeTag {
    /// Returns the tag's display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Map => "Map",
            Self::Set => "Set",
            Self::Function => "Function",
        }
    }

    /// Returns `true` for shapes that are not primitives.
    pub const fn is_compound(self) -> bool {
        matches!(
            self,
            Self::Array | Self::Object | Self::Map | Self::Set | Self::Function
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Capabilities a value may be "like", independent of its exact tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Callable values.
    Function,
    /// Arrays, and objects carrying a non-negative integer `length` key.
    Array,
    /// Values supporting sequential iteration: arrays, strings, maps, sets.
    Iterable,
    /// Every non-primitive value.
    Object,
}

/// Classifies a value into its [`TypeTag`].
///
/// # Examples
///
/// ```rust
/// use fnkit::{TypeTag, Value, classify};
///
/// assert_eq!(classify(&Value::from("hello")), TypeTag::String);
/// assert_eq!(classify(&Value::array([1, 2])), TypeTag::Array);
/// ```
pub const fn classify(value: &Value) -> TypeTag {
    match value {
        Value::Undefined => TypeTag::Undefined,
        Value::Null => TypeTag::Null,
        Value::Boolean(_) => TypeTag::Boolean,
        Value::Number(_) => TypeTag::Number,
        Value::String(_) => TypeTag::String,
        Value::Array(_) => TypeTag::Array,
        Value::Object(_) => TypeTag::Object,
        Value::Map(_) => TypeTag::Map,
        Value::Set(_) => TypeTag::Set,
        Value::Function(_) => TypeTag::Function,
    }
}

/// Returns `true` if the value has the given capability.
///
/// An object with a numeric `length` key is array-like but not iterable, so
/// it cannot be spread. A string is iterable but not array-like, so it is
/// never spread.
///
/// # Examples
///
/// ```rust
/// use fnkit::{Shape, Value, is_like};
///
/// let array_like = Value::object([("length", Value::from(2))]);
/// assert!(is_like(Shape::Array, &array_like));
/// assert!(!is_like(Shape::Iterable, &array_like));
/// ```
pub fn is_like(shape: Shape, value: &Value) -> bool {
    match shape {
        Shape::Function => matches!(value, Value::Function(_)),
        Shape::Array => match value {
            Value::Array(_) => true,
            Value::Object(object) => object
                .get("length")
                .and_then(Value::as_number)
                .is_some_and(|length| length >= 0.0 && length.fract() == 0.0),
            _ => false,
        },
        Shape::Iterable => matches!(
            value,
            Value::Array(_) | Value::String(_) | Value::Map(_) | Value::Set(_)
        ),
        Shape::Object => classify(value).is_compound(),
    }
}

/// Returns `true` if the value can be called.
pub const fn is_callable(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}
