//! # matijasevic-integers
//!
//! Arbitrary precision integer arithmetic for the Matijasevič polynomial
//! evaluator.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision signed integers (`Integer`)
//! - Exact addition, subtraction, multiplication and exponentiation,
//!   including mixed operations with `i64` literals
//! - Strict literal parsing (`Integer::parse_literal`) shared by the
//!   text conversion layer
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large integers are heap-allocated; nothing here ever overflows

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

#[cfg(test)]
mod proptests;

pub use integer::{Integer, ParseIntegerError};
