//! # fnkit
//!
//! Curry, compose and accessor combinators over dynamically typed values.
//!
//! ## Overview
//!
//! fnkit models functions the way dynamic languages do: every callable takes
//! a list of [`Value`]s, declares an arity, and returns a [`Value`] or an
//! [`Error`]. On top of that model it provides:
//!
//! - **Currying**: [`curry`] accumulates arguments until an arity threshold
//!   is met.
//! - **Composition**: [`compose`] and [`aggregate`] chain functions right to
//!   left, spreading array results into positional arguments. [`Chain`]
//!   exposes a per-step [`Spread`] policy.
//! - **Combinators**: partial application, branching, arity control and
//!   side effects.
//! - **Accessors**: property paths, collection fields, object builders and
//!   method invocation.
//! - **Builtins**: every operation above as a curried [`Function`] value.
//!
//! ## Feature Flags
//!
//! - `combinators`: [`combinators`] module
//! - `access`: [`access`] module
//! - `builtins`: [`builtins`] module (implies `combinators` and `access`)
//! - `derive`: the [`function!`] macro
//! - `serde`: `Serialize`/`Deserialize` for [`Value`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let add = Function::named("add", 2, |arguments| {
//!     Ok(Value::from(
//!         argument(&arguments, 0).to_number() + argument(&arguments, 1).to_number(),
//!     ))
//! });
//! let double = Function::named("double", 1, |arguments| {
//!     Ok(Value::from(argument(&arguments, 0).to_number() * 2.0))
//! });
//!
//! let add = curry(&Value::from(add)).unwrap();
//! let add_one = add.call([Value::from(1)]).unwrap();
//!
//! let composed = compose(&[Value::from(double), add_one]).unwrap();
//! assert_eq!(composed.call([Value::from(4)]).unwrap(), Value::from(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

extern crate self as fnkit;

/// Prelude module for convenient imports.
///
/// Re-exports the value and function model, the engines and, depending on
/// enabled features, the helper modules.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::{Chain, Spread, aggregate, compose};
    pub use crate::curry::{curry, curry_with_arity};
    pub use crate::error::{Error, Result};
    pub use crate::function::{Arguments, Callable, Function, IntoOutcome, argument, rest};
    pub use crate::value::{Shape, TypeTag, Value, is_callable, is_like};

    #[cfg(feature = "combinators")]
    pub use crate::combinators::*;

    #[cfg(feature = "access")]
    pub use crate::access::*;

    #[cfg(feature = "builtins")]
    pub use crate::builtins::{builtin, builtins};

    #[cfg(feature = "derive")]
    pub use fnkit_derive::function;
}

pub mod compose;
pub mod curry;
pub mod error;
pub mod function;
pub mod value;

#[cfg(feature = "combinators")]
pub mod combinators;

#[cfg(feature = "access")]
pub mod access;

#[cfg(feature = "builtins")]
pub mod builtins;

pub use compose::{Chain, Spread, Step, aggregate, compose};
pub use curry::{PartialApplication, curry, curry_function, curry_with_arity};
pub use error::{Error, Result};
pub use function::{
    Arguments, Callable, Function, IntoOutcome, argument, expect_function, expect_functions,
    rest,
};
pub use value::{Object, Shape, TypeTag, Value, classify, is_callable, is_like};

#[cfg(feature = "derive")]
pub use fnkit_derive::function;

static_assertions::assert_not_impl_any!(Value: Send, Sync);
static_assertions::assert_not_impl_any!(Function: Send, Sync);
static_assertions::assert_impl_all!(Error: std::error::Error, Clone, PartialEq);
