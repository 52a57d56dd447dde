//! Callable values.
//!
//! A [`Function`] is a cheap, cloneable handle to anything implementing
//! [`Callable`]: native Rust closures with a declared arity, bound functions,
//! partial applications produced by [`curry`](crate::curry), and composition
//! chains. Every fnkit engine treats these uniformly through the trait.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::{Function, Value, argument};
//!
//! let add = Function::named("add", 2, |arguments| {
//!     Ok(Value::from(
//!         argument(&arguments, 0).to_number() + argument(&arguments, 1).to_number(),
//!     ))
//! });
//!
//! assert_eq!(add.arity(), 2);
//! assert_eq!(add.call([Value::from(1), Value::from(2)]).unwrap(), Value::from(3));
//!
//! let increment = add.bind([Value::from(1)]);
//! assert_eq!(increment.arity(), 1);
//! assert_eq!(increment.call([Value::from(41)]).unwrap(), Value::from(42));
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::value::{Value, is_callable};

/// Positional arguments of a call.
pub type Arguments = SmallVec<[Value; 4]>;

/// Something that can be invoked with positional arguments.
pub trait Callable {
    /// The number of arguments the callable expects.
    fn arity(&self) -> usize;

    /// A human-readable name, empty for anonymous callables.
    fn name(&self) -> &str {
        ""
    }

    /// Invokes the callable.
    ///
    /// # Errors
    ///
    /// Whatever the callable itself fails with.
    fn call(&self, arguments: Arguments) -> Result<Value>;
}

/// A shared handle to a [`Callable`].
#[derive(Clone)]
pub struct Function {
    inner: Rc<dyn Callable>,
}

impl Function {
    /// Creates an anonymous native function with the given declared arity.
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value> + 'static,
    {
        Self::named("", arity, body)
    }

    /// Creates a named native function with the given declared arity.
    pub fn named<F>(name: impl Into<Rc<str>>, arity: usize, body: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value> + 'static,
    {
        Self::from_callable(Native {
            name: name.into(),
            arity,
            body,
        })
    }

    /// Wraps any [`Callable`].
    pub fn from_callable<C: Callable + 'static>(callable: C) -> Self {
        Self {
            inner: Rc::new(callable),
        }
    }

    /// The declared arity.
    pub fn arity(&self) -> usize {
        self.inner.arity()
    }

    /// The function's name, empty when anonymous.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Calls the function with any sequence of arguments.
    ///
    /// # Errors
    ///
    /// Whatever the function fails with.
    pub fn call<I>(&self, arguments: I) -> Result<Value>
    where
        I: IntoIterator<Item = Value>,
    {
        self.inner.call(arguments.into_iter().collect())
    }

    /// Calls the function with an already collected argument list.
    ///
    /// # Errors
    ///
    /// Whatever the function fails with.
    pub fn call_with(&self, arguments: Arguments) -> Result<Value> {
        self.inner.call(arguments)
    }

    /// Binds a fixed argument prefix.
    ///
    /// The bound function always calls through, prepending the prefix; its
    /// declared arity is `max(arity - prefix.len(), 0)`.
    pub fn bind<I>(&self, prefix: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::from_callable(Bound {
            target: self.clone(),
            prefix: prefix.into_iter().collect(),
        })
    }

    /// Returns `true` if both handles point at the same callable.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.inner), Rc::as_ptr(&other.inner))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .finish()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "function {}() {{ [native code] }}", self.name())
    }
}

struct Native<F> {
    name: Rc<str>,
    arity: usize,
    body: F,
}

impl<F> Callable for Native<F>
where
    F: Fn(Arguments) -> Result<Value>,
{
    fn arity(&self) -> usize {
        self.arity
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, arguments: Arguments) -> Result<Value> {
        (self.body)(arguments)
    }
}

struct Bound {
    target: Function,
    prefix: Rc<[Value]>,
}

impl Callable for Bound {
    fn arity(&self) -> usize {
        self.target.arity().saturating_sub(self.prefix.len())
    }

    fn name(&self) -> &str {
        self.target.name()
    }

    fn call(&self, arguments: Arguments) -> Result<Value> {
        let combined: Arguments = self.prefix.iter().cloned().chain(arguments).collect();
        self.target.call_with(combined)
    }
}

// =============================================================================
// Argument helpers
// =============================================================================

/// Returns the argument at `index`, or `Undefined` when it was not supplied.
pub fn argument(arguments: &[Value], index: usize) -> Value {
    arguments.get(index).cloned().unwrap_or_default()
}

/// Returns the arguments from `start` onwards.
pub fn rest(arguments: &[Value], start: usize) -> Arguments {
    arguments.get(start..).unwrap_or_default().iter().cloned().collect()
}

/// Extracts a function from a value, failing with
/// [`Error::InvalidArgument`] naming `parameter` otherwise.
///
/// # Errors
///
/// Returns `InvalidArgument` when `value` is not callable.
pub fn expect_function(parameter: &'static str, value: &Value) -> Result<Function> {
    match value {
        Value::Function(function) => Ok(function.clone()),
        other => {
            tracing::debug!(
                parameter,
                type_tag = %other.type_tag(),
                "rejected non-callable argument"
            );
            Err(Error::invalid_argument(parameter, "a function"))
        }
    }
}

/// Extracts a list of functions; every element must be callable.
///
/// # Errors
///
/// Returns `InvalidArgument` naming `parameter` when any element is not
/// callable.
pub fn expect_functions(parameter: &'static str, values: &[Value]) -> Result<Vec<Function>> {
    if let Some(position) = values.iter().position(|value| !is_callable(value)) {
        tracing::debug!(parameter, position, "rejected non-callable list element");
        return Err(Error::invalid_argument(parameter, "a list of functions"));
    }
    Ok(values.iter().filter_map(Value::as_function).cloned().collect())
}

// =============================================================================
// Outcome conversion
// =============================================================================

/// Conversion of a function body's result into `Result<Value>`.
///
/// Implemented for `Value`, `Result<Value>` and the plain Rust types that
/// convert into `Value`, so that `function!` bodies can return whichever is
/// most natural.
pub trait IntoOutcome {
    /// Performs the conversion.
    ///
    /// # Errors
    ///
    /// Passes through the error of a `Result`.
    fn into_outcome(self) -> Result<Value>;
}

impl IntoOutcome for Result<Value> {
    fn into_outcome(self) -> Result<Value> {
        self
    }
}

macro_rules! into_outcome_via_value {
    ($($source:ty),* $(,)?) => {
        $(
            impl IntoOutcome for $source {
                fn into_outcome(self) -> Result<Value> {
                    Ok(Value::from(self))
                }
            }
        )*
    };
}

into_outcome_via_value!(Value, bool, f64, i32, u32, i64, usize, &str, String, Function);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect_arguments() -> Function {
        Function::named("collect", 3, |arguments| Ok(arguments.into_iter().collect()))
    }

    #[rstest]
    fn test_native_reports_name_and_arity() {
        let function = collect_arguments();
        assert_eq!(function.name(), "collect");
        assert_eq!(function.arity(), 3);
    }

    #[rstest]
    fn test_bind_prepends_prefix() {
        let bound = collect_arguments().bind([Value::from(1)]);
        assert_eq!(bound.arity(), 2);
        assert_eq!(
            bound.call([Value::from(2), Value::from(3)]).unwrap(),
            Value::array([1, 2, 3])
        );
    }

    #[rstest]
    fn test_bind_arity_saturates_at_zero() {
        let bound = collect_arguments().bind((0..5).map(Value::from));
        assert_eq!(bound.arity(), 0);
    }

    #[rstest]
    fn test_ptr_eq() {
        let function = collect_arguments();
        assert!(function.ptr_eq(&function.clone()));
        assert!(!function.ptr_eq(&collect_arguments()));
    }

    #[rstest]
    fn test_argument_defaults_to_undefined() {
        let arguments = [Value::from(1)];
        assert_eq!(argument(&arguments, 0), Value::from(1));
        assert_eq!(argument(&arguments, 1), Value::Undefined);
        assert!(rest(&arguments, 3).is_empty());
    }

    #[rstest]
    fn test_expect_function_rejects_non_callable() {
        let error = expect_function("predicate", &Value::from(1)).unwrap_err();
        assert_eq!(error, Error::invalid_argument("predicate", "a function"));
    }

    #[rstest]
    fn test_expect_functions_rejects_mixed_list() {
        let values = [Value::from(collect_arguments()), Value::Null];
        assert!(expect_functions("predicates", &values).is_err());
    }

    #[rstest]
    fn test_debug_shows_name_and_arity() {
        let rendered = format!("{:?}", collect_arguments());
        assert_eq!(rendered, "Function { name: \"collect\", arity: 3 }");
    }
}
