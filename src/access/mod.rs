//! Property, field and method access over dynamic values.
//!
//! Accessors dispatch on the [`TypeTag`](crate::TypeTag) of the receiver:
//!
//! - Properties: [`prop`], [`props`], [`has_prop`], [`has_props`] read
//!   properties the way optional chaining does and never fail on a missing
//!   step.
//! - Fields: [`field`], [`fields`], [`has_field`], [`has_fields`],
//!   [`includes`] read the *contents* of a collection: array elements, map
//!   entries, object keys. Shapes without a rule fail with
//!   [`Error::Unsupported`](crate::Error::Unsupported).
//! - Objects: [`modify`], [`object_of`] build new objects.
//! - Methods: [`invoke`], [`method`], [`trigger`] call a function stored
//!   under a property, including the built-in methods of arrays, strings,
//!   maps and sets.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::Value;
//! use fnkit::access::{field, prop};
//!
//! let user = Value::object([(
//!     "address",
//!     Value::object([("city", "Oslo")]),
//! )]);
//! assert_eq!(
//!     prop(&Value::array(["address", "city"]), &user),
//!     Value::from("Oslo")
//! );
//! assert_eq!(prop(&Value::array(["missing", "city"]), &user), Value::Undefined);
//!
//! let letters = Value::array(["a", "b", "c"]);
//! assert_eq!(field(&Value::from(-1), &letters).unwrap(), Value::from("c"));
//! ```

mod field;
mod method;
mod object;
mod property;

pub use field::{field, fields, has_field, has_fields, includes};
pub use method::{invoke, method, trigger};
pub use object::{modify, object_of};
pub use property::{has_prop, has_props, prop, props};
