//! Every operation as a dynamic [`Function`] value.
//!
//! [`builtins`] returns an object keyed by library name whose values are
//! curried functions, so the helpers can be passed around, composed and
//! partially applied like any other value. Each entry waits for the number
//! of arguments listed below and then calls the corresponding Rust helper
//! with everything it received; arguments past the fixed ones are the
//! helper's rest parameters.
//!
//! | name | arity | | name | arity |
//! |------|-------|-|------|-------|
//! | `curry` | 1 (not curried) | | `prop`, `props` | 2 |
//! | `compose` | 0 (not curried) | | `hasProp`, `hasProps` | 2 |
//! | `aggregate` | 2 | | `field`, `fields` | 2 |
//! | `use` | 2 | | `hasField`, `hasFields` | 2 |
//! | `extract` | 0 (not curried) | | `includes` | 2 |
//! | `identity`, `raise` | 1 | | `modify`, `objectOf` | 2 |
//! | `partial`, `defer` | 2 | | `invoke` | 3 |
//! | `apply`, `applyTo` | 2 | | `method`, `trigger` | 2 |
//! | `arity` | 3 | | `condition` | 4 |
//! | `unary`, `binary` | 2 | | `when`, `unless` | 3 |
//! | `satisfies`, `effect` | 2 | | `enforce` | 3 |
//!
//! # Examples
//!
//! ```rust
//! use fnkit::Value;
//! use fnkit::builtins::builtin;
//!
//! let field = builtin("field").unwrap();
//! let last = field.call([Value::from(-1)]).unwrap();
//! let last = last.as_function().unwrap();
//! assert_eq!(last.call([Value::array([1, 2, 3])]).unwrap(), Value::from(3));
//! ```

use crate::access;
use crate::combinators;
use crate::compose::{aggregate, compose};
use crate::curry::curry_function;
use crate::error::{Error, Result};
use crate::function::{Function, argument, expect_function};
use crate::value::{Object, Value};

/// Returns all builtins as an object keyed by name.
pub fn builtins() -> Value {
    Value::from(
        table()
            .into_iter()
            .map(|function| (function.name().to_owned(), Value::from(function)))
            .collect::<Object>(),
    )
}

/// Looks up a single builtin by name.
pub fn builtin(name: &str) -> Option<Function> {
    table().into_iter().find(|function| function.name() == name)
}

fn tail(arguments: &[Value], start: usize) -> &[Value] {
    arguments.get(start..).unwrap_or_default()
}

/// Reads a non-negative integer argument such as an arity.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn expect_length(parameter: &'static str, value: &Value) -> Result<usize> {
    match value.as_number() {
        Some(number) if number >= 0.0 && number.fract() == 0.0 && number.is_finite() => {
            Ok(number as usize)
        }
        _ => {
            tracing::debug!(parameter, received = %value.type_tag(), "rejected length");
            Err(Error::invalid_argument(parameter, "a non-negative integer"))
        }
    }
}

fn plain<F>(name: &'static str, arity: usize, body: F) -> Function
where
    F: Fn(&[Value]) -> Result<Value> + 'static,
{
    Function::named(name, arity, move |arguments| body(&arguments))
}

fn curried<F>(name: &'static str, arity: usize, body: F) -> Function
where
    F: Fn(&[Value]) -> Result<Value> + 'static,
{
    curry_function(plain(name, arity, body), arity)
}

fn curry_builtin(arguments: &[Value]) -> Result<Value> {
    let function = expect_function("predicate", &argument(arguments, 0))?;
    let arity = match arguments.get(1) {
        None | Some(Value::Undefined) => function.arity(),
        Some(length) => expect_length("arity", length)?,
    };
    Ok(Value::from(curry_function(function, arity)))
}

fn arity_builtin(arguments: &[Value]) -> Result<Value> {
    let length = expect_length("length", &argument(arguments, 0))?;
    combinators::arity(length, &argument(arguments, 1), tail(arguments, 2))
}

#[allow(clippy::too_many_lines)]
fn table() -> Vec<Function> {
    let arity = curried("arity", 3, arity_builtin);
    let unary = Function::named("unary", 2, {
        let arity = arity.clone();
        move |arguments| arity.call(std::iter::once(Value::from(1)).chain(arguments))
    });
    let binary = Function::named("binary", 2, {
        let arity = arity.clone();
        move |arguments| arity.call(std::iter::once(Value::from(2)).chain(arguments))
    });

    vec![
        plain("curry", 1, curry_builtin),
        plain("compose", 0, |arguments| compose(arguments).map(Value::from)),
        curried("aggregate", 2, |arguments| {
            aggregate(&argument(arguments, 0), tail(arguments, 1)).map(Value::from)
        }),
        curried("use", 2, |arguments| {
            combinators::using(&argument(arguments, 0), tail(arguments, 1)).map(Value::from)
        }),
        plain("extract", 0, |arguments| {
            combinators::extract(arguments).map(Value::from)
        }),
        curried("identity", 1, |arguments| {
            Ok(combinators::identity(argument(arguments, 0)))
        }),
        curried("raise", 1, |arguments| combinators::raise(argument(arguments, 0))),
        curried("partial", 2, |arguments| {
            combinators::partial(&argument(arguments, 0), tail(arguments, 1)).map(Value::from)
        }),
        curried("defer", 2, |arguments| {
            combinators::defer(&argument(arguments, 0), tail(arguments, 1)).map(Value::from)
        }),
        curried("apply", 2, |arguments| {
            combinators::apply(&argument(arguments, 0), &argument(arguments, 1))
        }),
        curried("applyTo", 2, |arguments| {
            combinators::apply_to(&argument(arguments, 0), &argument(arguments, 1))
        }),
        arity,
        curry_function(unary, 2),
        curry_function(binary, 2),
        curried("condition", 4, |arguments| {
            combinators::condition(
                &argument(arguments, 0),
                &argument(arguments, 1),
                &argument(arguments, 2),
                tail(arguments, 3),
            )
        }),
        curried("when", 3, |arguments| {
            combinators::when(
                &argument(arguments, 0),
                &argument(arguments, 1),
                tail(arguments, 2),
            )
        }),
        curried("unless", 3, |arguments| {
            combinators::unless(
                &argument(arguments, 0),
                &argument(arguments, 1),
                tail(arguments, 2),
            )
        }),
        curried("satisfies", 2, |arguments| {
            combinators::satisfies(&argument(arguments, 0), tail(arguments, 1))
        }),
        curried("effect", 2, |arguments| {
            combinators::effect(&argument(arguments, 0), argument(arguments, 1))
        }),
        curried("enforce", 3, |arguments| {
            combinators::enforce(
                &argument(arguments, 0),
                argument(arguments, 1),
                tail(arguments, 2),
            )
        }),
        curried("prop", 2, |arguments| {
            Ok(access::prop(&argument(arguments, 0), &argument(arguments, 1)))
        }),
        curried("props", 2, |arguments| {
            access::props(&argument(arguments, 0), &argument(arguments, 1))
        }),
        curried("hasProp", 2, |arguments| {
            Ok(Value::from(access::has_prop(
                &argument(arguments, 0),
                &argument(arguments, 1),
            )))
        }),
        curried("hasProps", 2, |arguments| {
            access::has_props(&argument(arguments, 0), &argument(arguments, 1))
        }),
        curried("field", 2, |arguments| {
            access::field(&argument(arguments, 0), &argument(arguments, 1))
        }),
        curried("fields", 2, |arguments| {
            access::fields(&argument(arguments, 0), &argument(arguments, 1))
        }),
        curried("hasField", 2, |arguments| {
            access::has_field(&argument(arguments, 0), &argument(arguments, 1)).map(Value::from)
        }),
        curried("hasFields", 2, |arguments| {
            access::has_fields(&argument(arguments, 0), &argument(arguments, 1))
        }),
        curried("includes", 2, |arguments| {
            access::includes(&argument(arguments, 0), &argument(arguments, 1)).map(Value::from)
        }),
        curried("modify", 2, |arguments| {
            access::modify(&argument(arguments, 0), &argument(arguments, 1))
        }),
        curried("objectOf", 2, |arguments| {
            access::object_of(&argument(arguments, 0), &argument(arguments, 1))
        }),
        curried("invoke", 3, |arguments| {
            access::invoke(
                &argument(arguments, 0),
                &argument(arguments, 1),
                tail(arguments, 2),
            )
        }),
        curried("method", 2, |arguments| {
            access::method(
                &argument(arguments, 0),
                &argument(arguments, 1),
                tail(arguments, 2),
            )
        }),
        curried("trigger", 2, |arguments| {
            Ok(Value::from(access::trigger(
                &argument(arguments, 0),
                tail(arguments, 1),
            )))
        }),
    ]
}
