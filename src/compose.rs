//! Right-to-left composition of dynamic functions.
//!
//! [`compose`] chains functions so the rightmost runs first and each result
//! feeds the next function to the left. [`aggregate`] does the same but
//! routes every step through a caller-supplied aggregator, which receives
//! the step function followed by its arguments.
//!
//! Between steps, an array result is spread into positional arguments while
//! any other value is passed as the single argument. When that inference is
//! wrong for a step (say, a function that takes one array), build the chain
//! with [`Chain`] and give the step an explicit [`Spread`] policy.
//!
//! # Laws
//!
//! - `compose(f, g)(x) == f(g(x))` when `g(x)` is not an array.
//! - `compose(f, g)(x) == f(...g(x))` when `g(x)` is an array.
//! - `aggregate(|f, ...p| f(...p), f, g) == compose(f, g)`.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::{Function, Value, argument, compose};
//!
//! let pow = Function::new(2, |arguments| {
//!     Ok(Value::from(
//!         argument(&arguments, 0).to_number().powf(argument(&arguments, 1).to_number()),
//!     ))
//! });
//! let pair = Function::new(1, |arguments| {
//!     Ok(Value::array([argument(&arguments, 0).to_number() + 1.0, 2.0]))
//! });
//!
//! let composed = compose(&[Value::from(pow), Value::from(pair)]).unwrap();
//! assert_eq!(composed.call([Value::from(4)]).unwrap(), Value::from(25));
//! ```

use std::rc::Rc;

use smallvec::smallvec;

use crate::error::{Error, Result};
use crate::function::{Arguments, Callable, Function, expect_function, expect_functions};
use crate::value::{Shape, Value, is_like};

/// How a chain step receives the value produced by the step to its right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Spread {
    /// Spread array-like values, pass anything else as the single argument.
    #[default]
    Auto,
    /// Always spread; a value that is not array-like is an error.
    Always,
    /// Never spread; the value is always the single argument.
    Never,
}

impl Spread {
    fn arguments(self, current: Value) -> Result<Arguments> {
        match self {
            Self::Never => Ok(smallvec![current]),
            Self::Auto if !is_like(Shape::Array, &current) => Ok(smallvec![current]),
            Self::Auto | Self::Always => spread(current),
        }
    }
}

fn spread(value: Value) -> Result<Arguments> {
    if !is_like(Shape::Array, &value) || !is_like(Shape::Iterable, &value) {
        return Err(Error::NotIterable {
            parameter: "parameters",
        });
    }
    match value {
        Value::Array(items) => Ok(items.iter().cloned().collect()),
        _ => Err(Error::NotIterable {
            parameter: "parameters",
        }),
    }
}

/// One function of a composition chain and its spread policy.
#[derive(Clone, Debug)]
pub struct Step {
    function: Function,
    spread: Spread,
}

impl Step {
    /// The step's function.
    pub const fn function(&self) -> &Function {
        &self.function
    }

    /// The step's spread policy.
    pub const fn spread(&self) -> Spread {
        self.spread
    }
}

/// A builder for composition chains with per-step spread policies.
///
/// Steps are listed left to right, exactly as they would be passed to
/// [`compose`]; the last step added runs first.
///
/// # Examples
///
/// ```rust
/// use fnkit::{Chain, Function, Spread, Value};
///
/// let count = Function::new(1, |arguments| {
///     Ok(Value::from(arguments[0].as_array().map_or(0, <[Value]>::len)))
/// });
/// let pair = Function::new(0, |_| Ok(Value::array(["a", "b"])));
///
/// let chain = Chain::new()
///     .step_with(count, Spread::Never)
///     .step(pair)
///     .build()
///     .unwrap();
/// assert_eq!(chain.call(Vec::<Value>::new()).unwrap(), Value::from(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Chain {
    steps: Vec<Step>,
    aggregator: Option<Function>,
}

impl Chain {
    /// Creates an empty chain.
    pub const fn new() -> Self {
        Self {
            steps: Vec::new(),
            aggregator: None,
        }
    }

    /// Appends a step with the [`Spread::Auto`] policy.
    #[must_use]
    pub fn step(self, function: Function) -> Self {
        self.step_with(function, Spread::Auto)
    }

    /// Appends a step with an explicit spread policy.
    #[must_use]
    pub fn step_with(mut self, function: Function, spread: Spread) -> Self {
        self.steps.push(Step { function, spread });
        self
    }

    /// Routes every step through `aggregator`.
    #[must_use]
    pub fn aggregate_with(mut self, aggregator: Function) -> Self {
        self.aggregator = Some(aggregator);
        self
    }

    /// The steps added so far, left to right.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Finishes the chain.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` (`"predicates" must be a list of functions`)
    /// when no step was added.
    pub fn build(self) -> Result<Function> {
        if self.steps.is_empty() {
            tracing::debug!("rejected empty composition");
            return Err(Error::invalid_argument("predicates", "a list of functions"));
        }
        Ok(Function::from_callable(Composed {
            steps: self.steps.into(),
            aggregator: self.aggregator,
        }))
    }
}

struct Composed {
    steps: Rc<[Step]>,
    aggregator: Option<Function>,
}

impl Callable for Composed {
    fn arity(&self) -> usize {
        0
    }

    fn call(&self, arguments: Arguments) -> Result<Value> {
        let mut current: Value = arguments.into_iter().collect();

        for (index, step) in self.steps.iter().enumerate().rev() {
            let step_arguments = step.spread.arguments(current)?;
            tracing::trace!(
                step = index,
                function = step.function.name(),
                arguments = step_arguments.len(),
                aggregated = self.aggregator.is_some(),
                "applying composition step"
            );
            current = match &self.aggregator {
                Some(aggregator) => {
                    let mut aggregated = Arguments::with_capacity(step_arguments.len() + 1);
                    aggregated.push(Value::Function(step.function.clone()));
                    aggregated.extend(step_arguments);
                    aggregator.call_with(aggregated)?
                }
                None => step.function.call_with(step_arguments)?,
            };
        }

        Ok(current)
    }
}

/// Composes functions right to left.
///
/// # Errors
///
/// Returns `InvalidArgument` (`"predicates" must be a list of functions`)
/// when `callables` is empty or contains a non-callable value.
pub fn compose(callables: &[Value]) -> Result<Function> {
    expect_functions("predicates", callables)?
        .into_iter()
        .fold(Chain::new(), Chain::step)
        .build()
}

/// Composes functions right to left, routing each step through
/// `aggregator(step, ...arguments)`.
///
/// # Errors
///
/// Returns `InvalidArgument` (`"aggregator" must be a function`) when the
/// aggregator is not callable, checked first, then the same errors as
/// [`compose`] for the steps.
pub fn aggregate(aggregator: &Value, callables: &[Value]) -> Result<Function> {
    let aggregator = expect_function("aggregator", aggregator)?;
    expect_functions("predicates", callables)?
        .into_iter()
        .fold(Chain::new(), Chain::step)
        .aggregate_with(aggregator)
        .build()
}
