//! Dynamically typed values.
//!
//! [`Value`] is the currency of every fnkit function: arguments, results and
//! intermediate composition values are all `Value`s. Compound variants share
//! their storage through [`Rc`], so cloning a value is cheap and values are
//! never mutated in place.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::{TypeTag, Value};
//!
//! let point = Value::object([("x", 1), ("y", 2)]);
//! assert_eq!(point.type_tag(), TypeTag::Object);
//! assert_eq!(point.property(&Value::from("x")), Value::from(1));
//!
//! let items = Value::array(["a", "b", "c"]);
//! assert_eq!(items.property(&Value::from("length")), Value::from(3));
//! ```

mod intrinsics;
#[cfg(feature = "serde")]
mod serde;
mod type_tag;

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::function::Function;

pub(crate) use intrinsics::relative_index;
pub use type_tag::{Shape, TypeTag, classify, is_callable, is_like};

/// The storage of [`Value::Object`]: string keys in insertion order.
pub type Object = IndexMap<String, Value>;

/// A dynamically typed value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The empty value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double precision number.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// An ordered sequence.
    Array(Rc<[Value]>),
    /// A record with insertion-ordered string keys.
    Object(Rc<Object>),
    /// A keyed collection; keys are distinct under SameValueZero.
    Map(Rc<[(Value, Value)]>),
    /// A collection of values distinct under SameValueZero.
    Set(Rc<[Value]>),
    /// A callable value.
    Function(Function),
}

impl Value {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an array from anything convertible into values.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Creates an object from key/value pairs. Later duplicates overwrite
    /// earlier ones but keep the first insertion position.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Object(Rc::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    /// Creates a map from key/value pairs, merging keys equal under
    /// SameValueZero.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Self>,
        V: Into<Self>,
    {
        let mut collected: Vec<(Self, Self)> = Vec::new();
        for (key, value) in entries {
            let (key, value) = (key.into(), value.into());
            match collected
                .iter_mut()
                .find(|(existing, _)| existing.same_value_zero(&key))
            {
                Some(entry) => entry.1 = value,
                None => collected.push((key, value)),
            }
        }
        Self::Map(collected.into())
    }

    /// Creates a set, dropping values equal under SameValueZero to an
    /// earlier one.
    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        let mut collected: Vec<Self> = Vec::new();
        for item in items {
            let item = item.into();
            if !collected
                .iter()
                .any(|existing| existing.same_value_zero(&item))
            {
                collected.push(item);
            }
        }
        Self::Set(collected.into())
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the [`TypeTag`] of this value.
    pub const fn type_tag(&self) -> TypeTag {
        classify(self)
    }

    /// Returns `true` for `Undefined` and `Null`.
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns the truthiness of the value.
    ///
    /// `Undefined`, `Null`, `false`, `0`, `NaN` and the empty string are
    /// falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(boolean) => *boolean,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Map(_) | Self::Set(_) | Self::Function(_) => {
                true
            }
        }
    }

    /// Returns the boolean if this is a `Boolean`.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is an `Object`.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the function if this is a `Function`.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Converts the value to a number the way arithmetic coercion does.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Boolean(boolean) => f64::from(u8::from(*boolean)),
            Self::Number(number) => *number,
            Self::String(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            _ => f64::NAN,
        }
    }

    /// Converts the value to the string used as an object key.
    pub fn to_property_key(&self) -> String {
        match self {
            Self::String(text) => text.to_string(),
            other => other.to_string(),
        }
    }

    /// SameValueZero equality: `NaN` equals `NaN`, `0` equals `-0`, and
    /// compound values are equal only when they share storage.
    pub fn same_value_zero(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) => {
                left == right || (left.is_nan() && right.is_nan())
            }
            (Self::Array(left), Self::Array(right)) | (Self::Set(left), Self::Set(right)) => {
                Rc::ptr_eq(left, right)
            }
            (Self::Object(left), Self::Object(right)) => Rc::ptr_eq(left, right),
            (Self::Map(left), Self::Map(right)) => Rc::ptr_eq(left, right),
            _ => self == other,
        }
    }

    // =========================================================================
    // Property access
    // =========================================================================

    /// Reads a property the way `value?.[key]` does.
    ///
    /// Arrays and strings expose indexes and `length`, maps and sets expose
    /// `size`, functions expose `length` and `name`, objects expose their
    /// keys. Built-in methods such as `at`, `get` or `toUpperCase` are
    /// returned as functions bound to the receiver. Anything else reads as
    /// `Undefined`.
    pub fn property(&self, key: &Self) -> Self {
        let found = match self {
            Self::Undefined | Self::Null | Self::Boolean(_) | Self::Number(_) => None,
            Self::Array(items) => match array_index(key) {
                Some(index) => Some(items.get(index).cloned().unwrap_or_default()),
                None if key.is_key("length") => Some(Self::from(items.len())),
                None => None,
            },
            Self::String(text) => match array_index(key) {
                Some(index) => Some(
                    text.chars()
                        .nth(index)
                        .map_or(Self::Undefined, |character| Self::from(character.to_string())),
                ),
                None if key.is_key("length") => Some(Self::from(text.chars().count())),
                None => None,
            },
            Self::Object(object) => object.get(&key.to_property_key()).cloned(),
            Self::Map(entries) if key.is_key("size") => Some(Self::from(entries.len())),
            Self::Set(items) if key.is_key("size") => Some(Self::from(items.len())),
            Self::Map(_) | Self::Set(_) => None,
            Self::Function(function) => {
                if key.is_key("length") {
                    Some(Self::from(function.arity()))
                } else if key.is_key("name") {
                    Some(Self::from(function.name()))
                } else {
                    None
                }
            }
        };

        found
            .or_else(|| {
                key.as_str()
                    .and_then(|name| intrinsics::method(self, name))
                    .map(Self::Function)
            })
            .unwrap_or_default()
    }

    /// Returns `true` if the property exists, the way `key in value` does.
    pub fn has_property(&self, key: &Self) -> bool {
        let own = match self {
            Self::Array(items) => {
                array_index(key).is_some_and(|index| index < items.len()) || key.is_key("length")
            }
            Self::String(text) => {
                array_index(key).is_some_and(|index| index < text.chars().count())
                    || key.is_key("length")
            }
            Self::Object(object) => object.contains_key(&key.to_property_key()),
            Self::Map(_) | Self::Set(_) => key.is_key("size"),
            Self::Function(_) => key.is_key("length") || key.is_key("name"),
            Self::Undefined | Self::Null | Self::Boolean(_) | Self::Number(_) => false,
        };

        own || key
            .as_str()
            .is_some_and(|name| intrinsics::method(self, name).is_some())
    }

    /// Returns the length of an array-like value.
    pub fn array_like_length(&self) -> Option<usize> {
        match self {
            Self::Array(items) => Some(items.len()),
            Self::Object(_) if is_like(Shape::Array, self) => self
                .property(&Self::from("length"))
                .as_number()
                .and_then(index_from_number),
            _ => None,
        }
    }

    /// Returns the indexed elements of an array-like value.
    ///
    /// Arrays yield their items; objects with a `length` key yield the values
    /// under keys `"0"` to `length - 1`, `Undefined` where a key is missing.
    pub fn array_like_elements(&self) -> Option<Vec<Self>> {
        match self {
            Self::Array(items) => Some(items.to_vec()),
            Self::Object(object) => {
                let length = self.array_like_length()?;
                Some(
                    (0..length)
                        .map(|index| object.get(&index.to_string()).cloned().unwrap_or_default())
                        .collect(),
                )
            }
            _ => None,
        }
    }

    fn is_key(&self, name: &str) -> bool {
        self.as_str() == Some(name)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn index_from_number(number: f64) -> Option<usize> {
    (number >= 0.0 && number.fract() == 0.0 && number <= 9_007_199_254_740_991.0)
        .then_some(number as usize)
}

fn array_index(key: &Value) -> Option<usize> {
    match key {
        Value::Number(number) => index_from_number(*number),
        Value::String(text) => text
            .parse::<usize>()
            .ok()
            .filter(|index| index.to_string() == **text),
        _ => None,
    }
}

/// Formats a number the way string conversion does: integral values print
/// without a fractional part.
pub(crate) fn format_number(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_owned()
    } else if number.is_infinite() {
        if number > 0.0 { "Infinity" } else { "-Infinity" }.to_owned()
    } else if number == 0.0 {
        "0".to_owned()
    } else if number.fract() == 0.0 && number.abs() < 1e21 {
        #[allow(clippy::cast_possible_truncation)]
        let integral = number as i128;
        integral.to_string()
    } else {
        number.to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) | (Self::Set(left), Self::Set(right)) => {
                left == right
            }
            (Self::Object(left), Self::Object(right)) => left == right,
            (Self::Map(left), Self::Map(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Boolean(boolean) => write!(formatter, "{boolean}"),
            Self::Number(number) => formatter.write_str(&format_number(*number)),
            Self::String(text) => formatter.write_str(text),
            Self::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(formatter, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
            Self::Map(_) => formatter.write_str("[object Map]"),
            Self::Set(_) => formatter.write_str("[object Set]"),
            Self::Function(function) => write!(formatter, "{function}"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::array(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(Rc::new(value))
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iterator: I) -> Self {
        Self::Array(iterator.into_iter().collect())
    }
}
