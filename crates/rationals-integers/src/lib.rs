//! # rationals-integers
//!
//! Arbitrary precision integers for the `rationals` crate.
//!
//! This crate wraps `dashu` to provide the integer capability rational
//! arithmetic is built on: ring operations, truncating division,
//! absolute value, gcd, sign tests and decimal parsing/formatting.
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large integers are heap-allocated

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;


pub use integer::Integer;
