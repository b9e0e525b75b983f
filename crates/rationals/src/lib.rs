//! # rationals
//!
//! Exact rational arithmetic over arbitrary precision integers.
//!
//! This crate provides:
//! - Canonical rational numbers (`Rational`), always in lowest terms
//!   with the sign carried by the numerator
//! - Inclusive ranges of rationals (`RationalRange`)
//! - Parsing and formatting of the `numerator/denominator` notation
//!
//! ## Quick Start
//!
//! ```rust
//! use rationals::{div_by, Rational};
//!
//! let half = div_by(1, 2).unwrap();
//! let third = div_by(1, 3).unwrap();
//! assert_eq!((&half + &third).to_string(), "5/6");
//!
//! let parsed: Rational = "117/1098".parse().unwrap();
//! assert_eq!(parsed.to_string(), "13/122");
//!
//! let range = third.range_to(&div_by(2, 3).unwrap()).unwrap();
//! assert!(range.contains(&half));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
mod ops;
mod parse;
pub mod range;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use range::RationalRange;
pub use rational::{div_by, Rational};
pub use rationals_integers::Integer;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{div_by, Integer, Rational, RationalError, RationalRange};
    pub use num_traits::{One, Zero};
}
