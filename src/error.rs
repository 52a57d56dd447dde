//! Error types for curried, composed and helper functions.
//!
//! Validation failures (a malformed curry or composition, a helper handed
//! the wrong shape) are kept apart from failures raised by the functions
//! being called. The latter travel as [`Error::Thrown`] and pass through the
//! curry and composition engines untouched.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::{Error, Value, compose};
//!
//! let error = compose(&[Value::from(1)]).unwrap_err();
//! assert!(error.is_validation());
//! assert_eq!(error.to_string(), "\"predicates\" must be a list of functions");
//! ```

use crate::value::{TypeTag, Value};

/// Errors produced by fnkit operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A required argument failed its capability check.
    #[error("\"{parameter}\" must be {expectation}")]
    InvalidArgument {
        /// The name of the offending parameter.
        parameter: &'static str,
        /// What the parameter was expected to be.
        expectation: &'static str,
    },

    /// An array-like value without iteration support had to be spread.
    #[error("\"{parameter}\" must have an iterator")]
    NotIterable {
        /// The name of the value that could not be spread.
        parameter: &'static str,
    },

    /// An accessor has no rule for the shape it was handed.
    #[error("{operation} for type \"{type_tag}\" is not implemented")]
    Unsupported {
        /// The accessor family, `"Getter"` or `"Lookup"`.
        operation: &'static str,
        /// The classification of the rejected value.
        type_tag: TypeTag,
    },

    /// A value raised by a called function.
    #[error("uncaught {0}")]
    Thrown(Value),
}

impl Error {
    pub(crate) const fn invalid_argument(
        parameter: &'static str,
        expectation: &'static str,
    ) -> Self {
        Self::InvalidArgument {
            parameter,
            expectation,
        }
    }

    /// Returns `true` when the error reports a malformed call rather than a
    /// failure raised by a called function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::{Error, Value};
    ///
    /// assert!(!Error::Thrown(Value::from("boom")).is_validation());
    /// ```
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::NotIterable { .. })
    }

    /// Returns the raised value for [`Error::Thrown`].
    pub const fn thrown(&self) -> Option<&Value> {
        match self {
            Self::Thrown(value) => Some(value),
            _ => None,
        }
    }
}

/// A specialized `Result` for fnkit operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_argument_display() {
        let error = Error::invalid_argument("predicate", "a function");
        assert_eq!(error.to_string(), "\"predicate\" must be a function");
    }

    #[rstest]
    fn test_not_iterable_display() {
        let error = Error::NotIterable {
            parameter: "parameters",
        };
        assert_eq!(error.to_string(), "\"parameters\" must have an iterator");
    }

    #[rstest]
    fn test_unsupported_display() {
        let error = Error::Unsupported {
            operation: "Getter",
            type_tag: TypeTag::Number,
        };
        assert_eq!(
            error.to_string(),
            "Getter for type \"Number\" is not implemented"
        );
    }

    #[rstest]
    #[case(Error::invalid_argument("predicate", "a function"), true)]
    #[case(Error::NotIterable { parameter: "parameters" }, true)]
    #[case(Error::Unsupported { operation: "Getter", type_tag: TypeTag::Null }, false)]
    #[case(Error::Thrown(Value::Null), false)]
    fn test_is_validation(#[case] error: Error, #[case] expected: bool) {
        assert_eq!(error.is_validation(), expected);
    }

    #[rstest]
    fn test_thrown_exposes_value() {
        let error = Error::Thrown(Value::from(7));
        assert_eq!(error.thrown(), Some(&Value::from(7)));
        assert_eq!(error.to_string(), "uncaught 7");
    }
}
