//! Errors produced by rational construction, parsing and ranges.

use thiserror::Error;

use crate::Rational;

/// Errors that can occur when building rationals or rational ranges.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A denominator would be zero, either at construction or as the
    /// result of dividing by a zero rational.
    #[error("division by zero")]
    DivisionByZero,

    /// A string is not of the form `a` or `a/b` with integer `a` and `b`.
    #[error("invalid rational {input:?}: {reason}")]
    InvalidFormat {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A range was requested whose start lies above its end.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange {
        /// The requested lower bound.
        start: Rational,
        /// The requested upper bound.
        end: Rational,
    },
}

impl RationalError {
    pub(crate) fn invalid_format(input: &str, reason: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
            reason,
        }
    }
}
