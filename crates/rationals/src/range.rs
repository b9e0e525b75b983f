//! Inclusive ranges of rationals.

use log::debug;
use std::fmt;
use std::ops::{Bound, RangeBounds};

use crate::{Rational, RationalError};

/// A closed interval `[start, end]` with `start <= end`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RationalRange {
    start: Rational,
    end: Rational,
}

impl RationalRange {
    /// Creates the range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidRange`] if `start > end`.
    pub fn new(start: Rational, end: Rational) -> Result<Self, RationalError> {
        if start > end {
            debug!("rejected range with start {start} above end {end}");
            return Err(RationalError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn start(&self) -> &Rational {
        &self.start
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn end(&self) -> &Rational {
        &self.end
    }

    /// Returns true if `start <= value <= end`.
    #[must_use]
    pub fn contains(&self, value: &Rational) -> bool {
        &self.start <= value && value <= &self.end
    }
}

impl RangeBounds<Rational> for RationalRange {
    fn start_bound(&self) -> Bound<&Rational> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&Rational> {
        Bound::Included(&self.end)
    }
}

impl fmt::Display for RationalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
