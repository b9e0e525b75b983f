//! Parsing of the `a` and `a/b` rational notations.

use log::debug;
use num_traits::One;
use rationals_integers::Integer;
use std::str::FromStr;

use crate::{Rational, RationalError};

impl Rational {
    /// Parses `"a"` or `"a/b"`, where `a` and `b` are optionally signed
    /// decimal integers of any length.
    ///
    /// A missing `/b` means a denominator of 1. An explicit but empty
    /// denominator (`"3/"`) is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidFormat`] if the string has more than
    /// one `/` or either side is not an integer, and
    /// [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn parse(input: &str) -> Result<Self, RationalError> {
        let (numerator, denominator) = match input.split_once('/') {
            Some((_, rest)) if rest.contains('/') => {
                return Err(reject(input, "more than one '/' separator"));
            }
            Some((numerator, denominator)) => (numerator, Some(denominator)),
            None => (input, None),
        };

        let numerator =
            parse_integer(numerator).ok_or_else(|| reject(input, "malformed numerator"))?;
        let denominator = match denominator {
            Some(token) => {
                parse_integer(token).ok_or_else(|| reject(input, "malformed denominator"))?
            }
            None => Integer::one(),
        };

        Self::new(numerator, denominator)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn reject(input: &str, reason: &'static str) -> RationalError {
    debug!("rejected rational literal {input:?}: {reason}");
    RationalError::invalid_format(input, reason)
}

/// Parses `[+-]?[0-9]+`.
fn parse_integer(token: &str) -> Option<Integer> {
    let digits = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Integer::from_str_radix(token.strip_prefix('+').unwrap_or(token), 10).ok()
}
