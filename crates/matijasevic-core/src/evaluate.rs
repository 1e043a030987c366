//! The evaluation engine.
//!
//! Evaluation is a pure function of the registry and the parameter
//! assignment: every term is computed in registry order, classified by
//! sign, combined into the aggregate value, and tallied per parameter.
//! Nothing is cached between calls.

use crate::parameters::{ParameterKey, ParameterTally, ParameterValues};
use crate::registry::{Registry, SubExpression, CANONICAL_REGISTRY};
use matijasevic_integers::Integer;
use std::fmt;
use tracing::{debug, trace};

/// Three-way sign classification of an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueStatus {
    /// Strictly greater than zero.
    Positive,
    /// Exactly zero.
    Zero,
    /// Strictly less than zero.
    Negative,
}

impl ValueStatus {
    /// Classifies `value`.
    #[must_use]
    pub fn of(value: &Integer) -> Self {
        match value.signum() {
            0 => ValueStatus::Zero,
            s if s > 0 => ValueStatus::Positive,
            _ => ValueStatus::Negative,
        }
    }

    /// Lowercase name: `"positive"`, `"zero"` or `"negative"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueStatus::Positive => "positive",
            ValueStatus::Zero => "zero",
            ValueStatus::Negative => "negative",
        }
    }
}

impl fmt::Display for ValueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluated term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PartialResult {
    /// Term id, e.g. `"p3"`.
    pub id: &'static str,
    /// Display label of the term.
    pub label: &'static str,
    /// Whether the term must vanish for the polynomial to be positive.
    pub zero_required: bool,
    /// Parameters the term reads.
    pub parameters: &'static [ParameterKey],
    /// The computed value.
    pub value: Integer,
    /// Sign of `value`.
    pub status: ValueStatus,
}

impl PartialResult {
    fn from_definition(definition: &'static SubExpression, values: &ParameterValues) -> Self {
        let value = definition.evaluate(values);
        let status = ValueStatus::of(&value);
        Self {
            id: definition.id,
            label: definition.label,
            zero_required: definition.zero_required,
            parameters: definition.parameters,
            value,
            status,
        }
    }

    /// True if the term is zero-required and currently zero.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.zero_required && self.status == ValueStatus::Zero
    }
}

/// The aggregate polynomial value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FinalResult {
    /// The polynomial's value.
    pub value: Integer,
    /// Sign of `value`.
    pub status: ValueStatus,
}

/// Everything derived from one evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CalculationResult {
    /// The aggregate value and its sign.
    pub final_value: FinalResult,
    /// Every term, in registry order.
    pub partials: Vec<PartialResult>,
    /// Per parameter, the number of satisfied zero-required terms it appears in.
    pub parameter_conditions: ParameterTally,
}

impl CalculationResult {
    /// Looks up an evaluated term by id.
    #[must_use]
    pub fn partial(&self, id: &str) -> Option<&PartialResult> {
        self.partials.iter().find(|p| p.id == id)
    }

    /// Number of zero-required terms that are currently zero.
    #[must_use]
    pub fn satisfied_count(&self) -> usize {
        self.partials.iter().filter(|p| p.is_satisfied()).count()
    }

    /// True if the assignment witnesses a prime, i.e. the aggregate is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.final_value.status == ValueStatus::Positive
    }
}

impl Registry {
    /// Evaluates every term against `values` and derives the aggregate.
    #[must_use]
    pub fn evaluate(&self, values: &ParameterValues) -> CalculationResult {
        let partials: Vec<PartialResult> = self
            .iter()
            .map(|definition| {
                let partial = PartialResult::from_definition(definition, values);
                trace!(id = partial.id, status = %partial.status, "evaluated sub-expression");
                partial
            })
            .collect();

        let value = self.aggregate().apply(partials.iter().map(|p| &p.value), values);
        let status = ValueStatus::of(&value);
        let parameter_conditions = tally_conditions(&partials);

        debug!(
            terms = partials.len(),
            satisfied = partials.iter().filter(|p| p.is_satisfied()).count(),
            %status,
            "evaluated polynomial"
        );

        CalculationResult {
            final_value: FinalResult { value, status },
            partials,
            parameter_conditions,
        }
    }
}

/// Evaluates the canonical polynomial.
#[must_use]
pub fn evaluate_polynomial(values: &ParameterValues) -> CalculationResult {
    CANONICAL_REGISTRY.evaluate(values)
}

fn tally_conditions(partials: &[PartialResult]) -> ParameterTally {
    let mut tally = ParameterTally::new();
    for partial in partials.iter().filter(|p| p.is_satisfied()) {
        for &key in partial.parameters {
            tally.increment(key);
        }
    }
    tally
}
