//! Arbitrary precision rational numbers.
//!
//! Every `Rational` is kept in canonical form:
//! - the denominator is strictly positive
//! - numerator and denominator share no factor greater than 1
//! - zero is always `0/1`
//!
//! All constructors and arithmetic funnel through [`Rational::new`]'s
//! reduction step, so no other representation is ever observable.

use log::trace;
use num_traits::{One, Zero};
use rationals_integers::Integer;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{RationalError, RationalRange};

/// An arbitrary precision rational number in lowest terms.
///
/// Values are immutable; every operation returns a new rational.
#[derive(Clone)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

/// Builds `numerator / denominator` from anything convertible to [`Integer`].
///
/// This accepts machine integers, wide integers and [`Integer`] alike.
///
/// # Errors
///
/// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
pub fn div_by<N, D>(numerator: N, denominator: D) -> Result<Rational, RationalError>
where
    N: Into<Integer>,
    D: Into<Integer>,
{
    Rational::new(numerator.into(), denominator.into())
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// Either argument may be negative; the result is reduced to lowest
    /// terms with a positive denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            trace!("rejected rational {numerator}/0");
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduce(numerator, denominator))
    }

    /// Creates a rational from i32 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn from_i32(numerator: i32, denominator: i32) -> Result<Self, RationalError> {
        Self::new(Integer::from(numerator), Integer::from(denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self::reduce(n, Integer::one())
    }

    /// Normalizes a pair whose denominator is known to be non-zero.
    fn reduce(numerator: Integer, denominator: Integer) -> Self {
        debug_assert!(!denominator.is_zero());

        if numerator.is_zero() {
            return Self {
                numerator,
                denominator: Integer::one(),
            };
        }

        let negative = numerator.is_negative() != denominator.is_negative();
        let numerator = numerator.abs();
        let denominator = denominator.abs();

        let g = numerator.gcd(&denominator);
        let numerator = numerator / &g;
        let denominator = denominator / &g;

        Self {
            numerator: if negative { -numerator } else { numerator },
            denominator,
        }
    }

    /// Returns the numerator. Carries the sign of the value.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::reduce(self.numerator.abs(), self.denominator.clone())
    }

    /// Returns `self + other`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Self {
        Self::reduce(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// Returns `self - other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        Self::reduce(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// Returns `self * other`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::reduce(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// Returns `self / other`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self, RationalError> {
        Self::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::reduce(-&self.numerator, self.denominator.clone())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self::reduce(self.numerator.pow(exp), self.denominator.pow(exp))
    }

    /// Compares two rationals by the sign of their difference.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.subtract(other).numerator.signum().cmp(&0)
    }

    /// Returns the inclusive range from `self` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidRange`] if `self > end`.
    pub fn range_to(&self, end: &Self) -> Result<RationalRange, RationalError> {
        RationalRange::new(self.clone(), end.clone())
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// Canonical form is unique, so hashing the pair agrees with `eq`.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}
