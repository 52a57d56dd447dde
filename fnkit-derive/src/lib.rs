//! Procedural macros for fnkit.
//!
//! # Available Function-like Macros
//!
//! - [`function!`]: Converts a Rust closure over `Value` parameters into an
//!   `fnkit::Function` whose declared arity is the closure's parameter count
//!
//! # Example
//!
//! ```rust,ignore
//! use fnkit::{Value, curry_function, function};
//!
//! let add = function!(|a: Value, b: Value| {
//!     Value::from(a.to_number() + b.to_number())
//! });
//! assert_eq!(add.arity(), 2);
//!
//! let curried = curry_function(add.clone(), add.arity());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod function;

use proc_macro::TokenStream;

/// Builds an `fnkit::Function` from a closure or a named Rust function.
///
/// The declared arity of the resulting function is the number of closure
/// parameters (closure form) or the explicit arity literal (path form). Each
/// parameter is bound positionally to the call's arguments; missing
/// arguments bind to `Value::Undefined`.
///
/// The body may evaluate to anything implementing `fnkit::IntoOutcome`:
/// a `Value`, a `Result<Value>`, or a plain Rust value convertible into
/// `Value` such as `f64`, `bool` or `&str`. Because the generated closure
/// returns `fnkit::Result<Value>`, the `?` operator works inside the body.
///
/// # Closure form
///
/// ```rust,ignore
/// use fnkit::{Value, function};
///
/// let pow = function!(|base: Value, exponent: Value| {
///     base.to_number().powf(exponent.to_number())
/// });
/// assert_eq!(pow.arity(), 2);
/// assert_eq!(pow.call([Value::from(5), Value::from(2)])?, Value::from(25));
/// ```
///
/// # Function name + arity form
///
/// ```rust,ignore
/// use fnkit::{Value, function};
///
/// fn first(value: Value, _rest: Value) -> Value {
///     value
/// }
///
/// let first = function!(first, 2);
/// assert_eq!(first.name(), "first");
/// ```
///
/// # Errors
///
/// Produces a compile error for a bare path without arity, a non-integer
/// arity, an async closure, or more than two inputs.
#[proc_macro]
pub fn function(input: TokenStream) -> TokenStream {
    function::function_impl(input)
}
