//! # Matijasevič
//!
//! Evaluation of the Jones–Sato–Wada–Wiens polynomial, the 26-variable
//! integer polynomial whose positive values over the natural numbers are
//! exactly the primes.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: every term is computed with arbitrary precision
//! - **Term Breakdown**: the value and sign of each of the 14 squared terms
//! - **Condition Tallies**: per variable, how many of its vanishing
//!   conditions currently hold
//! - **Form Helpers**: lenient and strict text conversion, random inputs
//!
//! ## Quick Start
//!
//! ```rust
//! use matijasevic::prelude::*;
//!
//! let inputs = ParameterInputs::default().with(ParameterKey::K, "3");
//! let values = convert_inputs_to_parameters(&inputs);
//! let result = evaluate_polynomial(&values);
//!
//! for partial in &result.partials {
//!     println!("{} = {} ({})", partial.label, partial.value, partial.status);
//! }
//! println!("P = {} ({})", result.final_value.value, result.final_value.status);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use matijasevic_core as core;
pub use matijasevic_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use matijasevic_core::{
        convert_inputs_to_parameters, convert_parameters_to_inputs, evaluate_polynomial,
        generate_random_parameters, validate_inputs, CalculationResult, ParameterInputs,
        ParameterKey, ParameterValues, RandomRange, Registry, ValueStatus,
        PARAMETER_CONDITION_TOTALS,
    };
    pub use matijasevic_integers::Integer;
}
