//! Helpers that control how and when a function is applied.

use crate::error::{Error, Result};
use crate::function::{Function, argument, expect_function, expect_functions};
use crate::value::Value;

/// Binds `parameters` as a fixed prefix of `predicate`.
///
/// The result declares `max(arity - parameters.len(), 0)` and always calls
/// through, unlike a curried function which waits for its threshold.
///
/// # Errors
///
/// Returns `InvalidArgument` when `predicate` is not callable.
pub fn partial(predicate: &Value, parameters: &[Value]) -> Result<Function> {
    let function = expect_function("predicate", predicate)?;
    Ok(function.bind(parameters.iter().cloned()))
}

/// Captures `predicate` and `parameters` in a zero-arity function.
///
/// # Errors
///
/// Returns `InvalidArgument` when `predicate` is not callable.
pub fn defer(predicate: &Value, parameters: &[Value]) -> Result<Function> {
    let function = expect_function("predicate", predicate)?;
    let parameters: Vec<Value> = parameters.to_vec();
    Ok(Function::named(
        function.name().to_owned(),
        0,
        move |_| function.call(parameters.iter().cloned()),
    ))
}

/// Calls `predicate` with the elements of the `parameters` array.
///
/// # Errors
///
/// Returns `InvalidArgument` when `predicate` is not callable or
/// `parameters` is not an array.
pub fn apply(predicate: &Value, parameters: &Value) -> Result<Value> {
    let function = expect_function("predicate", predicate)?;
    let Some(items) = parameters.as_array() else {
        return Err(Error::invalid_argument("parameters", "an array"));
    };
    function.call(items.iter().cloned())
}

/// [`apply`] with the arguments flipped, convenient for currying over the
/// argument list.
///
/// # Errors
///
/// Same as [`apply`].
pub fn apply_to(parameters: &Value, predicate: &Value) -> Result<Value> {
    apply(predicate, parameters)
}

/// Calls `predicate` with at most the first `length` parameters.
///
/// # Errors
///
/// Returns `InvalidArgument` when `predicate` is not callable.
pub fn arity(length: usize, predicate: &Value, parameters: &[Value]) -> Result<Value> {
    let function = expect_function("predicate", predicate)?;
    function.call(parameters.iter().take(length).cloned())
}

/// Calls `predicate` with only its first parameter.
///
/// # Errors
///
/// Returns `InvalidArgument` when `predicate` is not callable.
pub fn unary(predicate: &Value, parameters: &[Value]) -> Result<Value> {
    arity(1, predicate, parameters)
}

/// Calls `predicate` with only its first two parameters.
///
/// # Errors
///
/// Returns `InvalidArgument` when `predicate` is not callable.
pub fn binary(predicate: &Value, parameters: &[Value]) -> Result<Value> {
    arity(2, predicate, parameters)
}

/// Fans parameters out to `predicates` position by position and hands the
/// results to `aggregator`.
///
/// Calling the result with `(p0, p1, ...)` evaluates
/// `aggregator(predicates[0](p0), predicates[1](p1), ...)`; a missing
/// parameter is `Undefined`, surplus parameters are ignored.
///
/// # Errors
///
/// Returns `InvalidArgument` when `aggregator` is not callable (checked
/// first) or any predicate is not callable.
pub fn using(aggregator: &Value, predicates: &[Value]) -> Result<Function> {
    let aggregator = expect_function("aggregator", aggregator)?;
    let predicates = expect_functions("predicates", predicates)?;

    Ok(Function::named("use", 0, move |parameters| {
        let results = predicates
            .iter()
            .enumerate()
            .map(|(index, predicate)| predicate.call([argument(&parameters, index)]))
            .collect::<Result<Vec<Value>>>()?;
        aggregator.call(results)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect(arity: usize) -> Value {
        Value::from(Function::named("collect", arity, |arguments| {
            Ok(arguments.into_iter().collect())
        }))
    }

    fn add() -> Value {
        Value::from(Function::named("add", 2, |arguments| {
            Ok(Value::from(
                argument(&arguments, 0).to_number() + argument(&arguments, 1).to_number(),
            ))
        }))
    }

    #[rstest]
    fn test_partial_binds_prefix() {
        let add_one = partial(&add(), &[Value::from(1)]).unwrap();
        assert_eq!(add_one.arity(), 1);
        assert_eq!(add_one.call([Value::from(2)]).unwrap(), Value::from(3));
    }

    #[rstest]
    fn test_defer_waits_for_call() {
        let deferred = defer(&add(), &[Value::from(1), Value::from(2)]).unwrap();
        assert_eq!(deferred.arity(), 0);
        assert_eq!(deferred.call([Value::from(100)]).unwrap(), Value::from(3));
    }

    #[rstest]
    fn test_apply_spreads_array() {
        let result = apply(&collect(3), &Value::array([1, 2, 3])).unwrap();
        assert_eq!(result, Value::array([1, 2, 3]));
    }

    #[rstest]
    fn test_apply_rejects_non_array() {
        let error = apply(&collect(1), &Value::from("1,2")).unwrap_err();
        assert_eq!(error, Error::invalid_argument("parameters", "an array"));
    }

    #[rstest]
    fn test_apply_to_flips_arguments() {
        let result = apply_to(&Value::array([4, 5]), &add()).unwrap();
        assert_eq!(result, Value::from(9));
    }

    #[rstest]
    #[case(0, Value::array(Vec::<Value>::new()))]
    #[case(1, Value::array([1]))]
    #[case(2, Value::array([1, 2]))]
    #[case(9, Value::array([1, 2, 3]))]
    fn test_arity_truncates_parameters(#[case] length: usize, #[case] expected: Value) {
        let parameters = [Value::from(1), Value::from(2), Value::from(3)];
        assert_eq!(arity(length, &collect(3), &parameters).unwrap(), expected);
    }

    #[rstest]
    fn test_unary_and_binary() {
        let parameters = [Value::from("a"), Value::from("b"), Value::from("c")];
        assert_eq!(unary(&collect(3), &parameters).unwrap(), Value::array(["a"]));
        assert_eq!(
            binary(&collect(3), &parameters).unwrap(),
            Value::array(["a", "b"])
        );
    }

    #[rstest]
    fn test_using_fans_out_positionally() {
        let identity = Value::from(Function::new(1, |arguments| Ok(argument(&arguments, 0))));
        let plus_two = Value::from(Function::new(1, |arguments| {
            Ok(Value::from(argument(&arguments, 0).to_number() + 2.0))
        }));
        let pow = Value::from(Function::new(2, |arguments| {
            Ok(Value::from(
                argument(&arguments, 0)
                    .to_number()
                    .powf(argument(&arguments, 1).to_number()),
            ))
        }));

        let used = using(&pow, &[identity, plus_two]).unwrap();
        assert_eq!(
            used.call([Value::from(5), Value::from(1)]).unwrap(),
            Value::from(125)
        );
    }

    #[rstest]
    fn test_using_fills_missing_parameters_with_undefined() {
        let identity = Value::from(Function::new(1, |arguments| Ok(argument(&arguments, 0))));
        let used = using(&collect(2), &[identity.clone(), identity]).unwrap();
        assert_eq!(
            used.call([Value::from(1)]).unwrap(),
            Value::array([Value::from(1), Value::Undefined])
        );
    }

    #[rstest]
    fn test_using_validates_aggregator_first() {
        let error = using(&Value::Null, &[Value::Null]).unwrap_err();
        assert_eq!(error, Error::invalid_argument("aggregator", "a function"));
    }
}
