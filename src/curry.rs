//! Currying with runtime arity.
//!
//! [`curry`] wraps a callable so that it accumulates arguments across calls
//! until the arity threshold is met, then invokes the original with every
//! accumulated argument in order.
//!
//! Each call that does not reach the threshold returns a fresh
//! [`PartialApplication`] as a function value; nothing is mutated, so any
//! partial application can be reused.
//!
//! # Laws
//!
//! - **Equivalence**: for a function `f` of arity `n`, any split of `n`
//!   arguments across successive calls of `curry(f)` yields `f(a1, ..., an)`.
//! - **Pass-through**: supplying more arguments than remain forwards all of
//!   them; nothing is truncated.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::{Function, Value, curry};
//!
//! let collect = Function::new(3, |arguments| Ok(arguments.into_iter().collect()));
//! let curried = curry(&Value::from(collect)).unwrap();
//!
//! let step = curried.call([Value::from(1)]).unwrap();
//! let step = step.as_function().unwrap().call([Value::from(2)]).unwrap();
//! let result = step.as_function().unwrap().call([Value::from(3)]).unwrap();
//!
//! assert_eq!(result, Value::array([1, 2, 3]));
//! ```

use std::rc::Rc;

use crate::error::Result;
use crate::function::{Arguments, Callable, Function, expect_function};
use crate::value::Value;

/// Curries a callable using its declared arity.
///
/// # Errors
///
/// Returns `InvalidArgument` (`"predicate" must be a function`) when
/// `callable` is not callable.
pub fn curry(callable: &Value) -> Result<Function> {
    let function = expect_function("predicate", callable)?;
    let arity = function.arity();
    Ok(curry_function(function, arity))
}

/// Curries a callable with an explicit arity override.
///
/// An arity of `0` makes the first call fire immediately with whatever
/// arguments it carries.
///
/// # Errors
///
/// Returns `InvalidArgument` (`"predicate" must be a function`) when
/// `callable` is not callable.
pub fn curry_with_arity(callable: &Value, arity: usize) -> Result<Function> {
    let function = expect_function("predicate", callable)?;
    Ok(curry_function(function, arity))
}

/// Curries an already validated function.
pub fn curry_function(function: Function, arity: usize) -> Function {
    Function::from_callable(PartialApplication::new(function, arity))
}

/// An in-progress curried call: the target, the arguments bound so far and
/// how many more are needed.
#[derive(Clone)]
pub struct PartialApplication {
    target: Function,
    bound: Rc<[Value]>,
    remaining: usize,
}

impl PartialApplication {
    /// Starts a curried call of `target` that fires after `arity` arguments.
    pub fn new(target: Function, arity: usize) -> Self {
        Self {
            target,
            bound: Rc::from(Vec::new()),
            remaining: arity,
        }
    }

    /// The wrapped function.
    pub const fn target(&self) -> &Function {
        &self.target
    }

    /// The arguments accumulated so far.
    pub fn bound(&self) -> &[Value] {
        &self.bound
    }

    /// How many more arguments are needed before the target fires.
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Applies another batch of arguments.
    ///
    /// Returns the target's result once the threshold is met, otherwise a new
    /// partial application wrapped as a function value.
    ///
    /// # Errors
    ///
    /// Whatever the target fails with, unchanged.
    pub fn apply(&self, arguments: Arguments) -> Result<Value> {
        let supplied = arguments.len();

        if supplied >= self.remaining {
            tracing::trace!(
                function = self.target.name(),
                total = self.bound.len() + supplied,
                "curried function saturated"
            );
            let combined: Arguments = self.bound.iter().cloned().chain(arguments).collect();
            return self.target.call_with(combined);
        }

        let next = Self {
            target: self.target.clone(),
            bound: self.bound.iter().cloned().chain(arguments).collect(),
            remaining: self.remaining - supplied,
        };
        tracing::trace!(
            function = self.target.name(),
            bound = next.bound.len(),
            remaining = next.remaining,
            "curried function accumulated arguments"
        );
        Ok(Value::Function(Function::from_callable(next)))
    }
}

impl Callable for PartialApplication {
    fn arity(&self) -> usize {
        self.remaining
    }

    fn name(&self) -> &str {
        self.target.name()
    }

    fn call(&self, arguments: Arguments) -> Result<Value> {
        self.apply(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;
    use std::cell::Cell;

    fn collect(arity: usize) -> Function {
        Function::named("collect", arity, |arguments| {
            Ok(arguments.into_iter().collect())
        })
    }

    fn call(function: &Value, arguments: Vec<Value>) -> Value {
        function
            .as_function()
            .expect("expected a function")
            .call(arguments)
            .expect("call succeeds")
    }

    #[rstest]
    fn test_curry_one_at_a_time() {
        let curried = Value::from(curry(&Value::from(collect(3))).unwrap());
        let first = call(&curried, vec![Value::from(1)]);
        let second = call(&first, vec![Value::from(2)]);
        assert_eq!(call(&second, vec![Value::from(3)]), Value::array([1, 2, 3]));
    }

    #[rstest]
    fn test_curry_all_at_once() {
        let curried = curry(&Value::from(collect(2))).unwrap();
        let result = curried.call([Value::from("a"), Value::from("b")]).unwrap();
        assert_eq!(result, Value::array(["a", "b"]));
    }

    #[rstest]
    fn test_curry_reports_remaining_arity() {
        let curried = curry(&Value::from(collect(3))).unwrap();
        assert_eq!(curried.arity(), 3);
        let partial = curried.call([Value::from(1)]).unwrap();
        assert_eq!(partial.as_function().unwrap().arity(), 2);
        assert_eq!(partial.as_function().unwrap().name(), "collect");
    }

    #[rstest]
    fn test_curry_empty_call_does_not_advance() {
        let curried = Value::from(curry(&Value::from(collect(1))).unwrap());
        let same = call(&curried, vec![]);
        assert_eq!(same.as_function().unwrap().arity(), 1);
        assert_eq!(call(&same, vec![Value::from(9)]), Value::array([9]));
    }

    #[rstest]
    fn test_curry_zero_arity_fires_immediately() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let function = Function::new(2, move |arguments| {
            counter.set(counter.get() + 1);
            Ok(Value::from(arguments.len()))
        });

        let curried = curry_with_arity(&Value::from(function), 0).unwrap();
        assert_eq!(curried.call(Vec::<Value>::new()).unwrap(), Value::from(0));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_curry_passes_surplus_arguments_through() {
        let curried = curry_with_arity(&Value::from(collect(3)), 2).unwrap();
        let result = curried
            .call([Value::from(1), Value::from(2), Value::from(3)])
            .unwrap();
        assert_eq!(result, Value::array([1, 2, 3]));
    }

    #[rstest]
    fn test_partial_application_is_reusable() {
        let curried = Value::from(curry(&Value::from(collect(2))).unwrap());
        let prefix = call(&curried, vec![Value::from("x")]);
        assert_eq!(
            call(&prefix, vec![Value::from(1)]),
            Value::array([Value::from("x"), Value::from(1)])
        );
        assert_eq!(
            call(&prefix, vec![Value::from(2)]),
            Value::array([Value::from("x"), Value::from(2)])
        );
    }

    #[rstest]
    fn test_curry_rejects_non_callable() {
        let error = curry(&Value::from("not a function")).unwrap_err();
        assert_eq!(error, Error::invalid_argument("predicate", "a function"));
    }

    #[rstest]
    fn test_curry_propagates_target_error_unchanged() {
        let failing = Function::new(1, |arguments| {
            Err(Error::Thrown(arguments.into_iter().next().unwrap_or_default()))
        });
        let curried = curry(&Value::from(failing)).unwrap();
        let error = curried.call([Value::from("boom")]).unwrap_err();
        assert_eq!(error, Error::Thrown(Value::from("boom")));
        assert!(!error.is_validation());
    }

    #[rstest]
    fn test_partial_application_accessors() {
        let partial = PartialApplication::new(collect(2), 2);
        assert_eq!(partial.remaining(), 2);
        assert!(partial.bound().is_empty());
        assert_eq!(partial.target().name(), "collect");
    }
}
