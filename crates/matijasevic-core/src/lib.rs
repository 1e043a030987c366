//! # matijasevic-core
//!
//! Evaluation engine for the Jones–Sato–Wada–Wiens (1976) 26-variable
//! polynomial, whose positive values over the natural numbers are exactly
//! the primes.
//!
//! This crate provides:
//! - Parameter keys `a`..`z` and total parameter assignments
//! - The ordered registry of the 14 squared sub-expressions
//! - The evaluation engine: per-term values and signs, the aggregate
//!   `(k + 2)(1 - Σ term²)`, and per-parameter condition tallies
//! - A random parameter generator with injectable randomness
//! - Text conversion and validation for form-style inputs
//!
//! ## Example
//!
//! ```rust
//! use matijasevic_core::{evaluate_polynomial, ParameterKey, ParameterValues, ValueStatus};
//!
//! let values = ParameterValues::zeros().with(ParameterKey::K, 3);
//! let result = evaluate_polynomial(&values);
//!
//! assert_eq!(result.partials.len(), 14);
//! assert_eq!(result.final_value.status, ValueStatus::Negative);
//! ```
//!
//! Every operation is a pure function of its arguments. The canonical
//! registry is a `static`, so results can be computed from any number of
//! threads without coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod evaluate;
pub mod formula;
pub mod inputs;
pub mod parameters;
pub mod random;
pub mod registry;

#[cfg(test)]
mod proptests;

pub use evaluate::{evaluate_polynomial, CalculationResult, FinalResult, PartialResult, ValueStatus};
pub use formula::{JSWW_POLY_ASCII, JSWW_POLY_TEX};
pub use inputs::{
    convert_inputs_to_parameters, convert_parameters_to_inputs, validate_inputs, FieldError,
    InputError, ParameterInputs, ValidationErrors,
};
pub use parameters::{ParameterKey, ParameterTally, ParameterValues, PARAMETER_KEYS};
pub use random::{
    generate_random_parameters, generate_random_parameters_with, RandomRange,
    DEFAULT_RANDOM_RANGE,
};
pub use registry::{
    Aggregate, Registry, RegistryError, SubExpression, CANONICAL_REGISTRY,
    PARAMETER_CONDITION_TOTALS,
};
