//! Higher-order helpers built on the function model.
//!
//! This module provides the combinators that sit next to currying and
//! composition:
//!
//! - Application: [`partial`], [`defer`], [`apply`], [`apply_to`],
//!   [`arity`], [`unary`], [`binary`], [`using`]
//! - Branching: [`condition`], [`when`], [`unless`], [`satisfies`]
//! - Effects: [`identity`], [`raise`], [`effect`], [`enforce`], [`extract`]
//!
//! Every helper checks its function arguments up front and fails with
//! [`Error::InvalidArgument`](crate::Error::InvalidArgument) naming the
//! offending parameter. Errors raised by the functions it calls are returned
//! unchanged.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::combinators::{partial, when};
//! use fnkit::{Function, Value, argument};
//!
//! let add = Function::new(2, |arguments| {
//!     Ok(Value::from(
//!         argument(&arguments, 0).to_number() + argument(&arguments, 1).to_number(),
//!     ))
//! });
//! let add_one = partial(&Value::from(add), &[Value::from(1)]).unwrap();
//! assert_eq!(add_one.call([Value::from(2)]).unwrap(), Value::from(3));
//!
//! let is_negative = Function::new(1, |arguments| {
//!     Ok(Value::from(argument(&arguments, 0).to_number() < 0.0))
//! });
//! let negate = Function::new(1, |arguments| {
//!     Ok(Value::from(-argument(&arguments, 0).to_number()))
//! });
//! let absolute = when(&Value::from(is_negative), &Value::from(negate), &[Value::from(-4)]);
//! assert_eq!(absolute.unwrap(), Value::from(4));
//! ```

mod application;
mod branching;
mod effects;

pub use application::{apply, apply_to, arity, binary, defer, partial, unary, using};
pub use branching::{condition, satisfies, unless, when};
pub use effects::{effect, enforce, extract, identity, raise};
