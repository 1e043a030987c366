//! The sub-expression registry.
//!
//! The Jones–Sato–Wada–Wiens polynomial is
//!
//! ```text
//! P(a, ..., z) = (k + 2) * (1 - p1² - p2² - ... - p14²)
//! ```
//!
//! where each `pi` is one of the terms defined here. `P` is positive exactly
//! when every `pi` vanishes, in which case its value `k + 2` is prime.
//!
//! The registry is a fixed, ordered table of plain records. Each record
//! holds the term's id, its display label, the parameters it reads and a
//! function pointer computing it. Order matters for display only.

use crate::parameters::{ParameterKey, ParameterTally, ParameterValues};
use matijasevic_integers::Integer;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::parameters::ParameterKey::{A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z};

/// One squared term of the polynomial.
#[derive(Clone, Copy)]
pub struct SubExpression {
    /// Stable identifier, e.g. `"p1"`.
    pub id: &'static str,
    /// The algebraic form, for presentation.
    pub label: &'static str,
    /// Whether the term must be zero for the polynomial to be positive.
    pub zero_required: bool,
    /// The parameters the term reads, in the order they appear in `label`.
    pub parameters: &'static [ParameterKey],
    /// Computes the term. Must be pure and total.
    pub compute: fn(&ParameterValues) -> Integer,
}

impl SubExpression {
    /// Evaluates the term against `values`.
    #[must_use]
    pub fn evaluate(&self, values: &ParameterValues) -> Integer {
        (self.compute)(values)
    }

    /// Returns true if the term reads `key`.
    #[must_use]
    pub fn reads(&self, key: ParameterKey) -> bool {
        self.parameters.contains(&key)
    }
}

impl fmt::Debug for SubExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubExpression")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("zero_required", &self.zero_required)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// How the evaluated terms combine into the polynomial's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aggregate {
    /// `(key + 2) * (1 - Σ term²)`.
    ///
    /// Positive iff every term is zero (given `key >= 0`), with value `key + 2`.
    Multiplier(ParameterKey),
    /// `Σ term² - key`.
    ///
    /// The shape used by early scaffold registries.
    SumOfSquaresLess(ParameterKey),
}

impl Aggregate {
    /// Combines evaluated term values into the aggregate value.
    pub fn apply<'a>(
        self,
        terms: impl IntoIterator<Item = &'a Integer>,
        values: &ParameterValues,
    ) -> Integer {
        let sum_of_squares: Integer = terms.into_iter().map(Integer::square).sum();
        match self {
            Aggregate::Multiplier(key) => (&values[key] + 2) * (1 - sum_of_squares),
            Aggregate::SumOfSquaresLess(key) => sum_of_squares - &values[key],
        }
    }
}

/// Errors raised when assembling a registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry has no terms.
    #[error("registry must contain at least one sub-expression")]
    Empty,

    /// Two terms share an id.
    #[error("duplicate sub-expression id {0:?}")]
    DuplicateId(&'static str),
}

/// An ordered set of sub-expressions plus the rule combining them.
#[derive(Clone, Copy, Debug)]
pub struct Registry {
    definitions: &'static [SubExpression],
    aggregate: Aggregate,
}

impl Registry {
    /// Assembles a registry from `definitions`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Empty`] for an empty table and
    /// [`RegistryError::DuplicateId`] if two definitions share an id.
    pub fn new(
        definitions: &'static [SubExpression],
        aggregate: Aggregate,
    ) -> Result<Self, RegistryError> {
        if definitions.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(definitions.len());
        for definition in definitions {
            if !seen.insert(definition.id) {
                return Err(RegistryError::DuplicateId(definition.id));
            }
        }

        Ok(Self {
            definitions,
            aggregate,
        })
    }

    /// The published 14-term registry.
    #[must_use]
    pub fn canonical() -> &'static Registry {
        &CANONICAL_REGISTRY
    }

    /// The terms, in registry order.
    #[must_use]
    pub fn definitions(&self) -> &'static [SubExpression] {
        self.definitions
    }

    /// The combining rule.
    #[must_use]
    pub fn aggregate(&self) -> Aggregate {
        self.aggregate
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Always false for a registry built through [`Registry::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Looks up a term by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static SubExpression> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Iterates over the terms in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &'static SubExpression> {
        self.definitions.iter()
    }

    /// For each parameter, the number of zero-required terms reading it.
    ///
    /// Independent of parameter values; the denominator for
    /// "N of M conditions satisfied".
    #[must_use]
    pub fn condition_totals(&self) -> ParameterTally {
        condition_totals(self.definitions)
    }
}

const fn condition_totals(definitions: &[SubExpression]) -> ParameterTally {
    let mut counts = [0u32; ParameterKey::COUNT];
    let mut i = 0;
    while i < definitions.len() {
        let definition = &definitions[i];
        if definition.zero_required {
            let mut j = 0;
            while j < definition.parameters.len() {
                counts[definition.parameters[j].index()] += 1;
                j += 1;
            }
        }
        i += 1;
    }
    ParameterTally::from_counts(counts)
}

/// The published registry, combined with `(k + 2)(1 - Σ pi²)`.
pub static CANONICAL_REGISTRY: Registry = Registry {
    definitions: &CANONICAL_DEFINITIONS,
    aggregate: Aggregate::Multiplier(K),
};

/// Per-parameter count of zero-required terms in the canonical registry.
pub const PARAMETER_CONDITION_TOTALS: ParameterTally = condition_totals(&CANONICAL_DEFINITIONS);

const CANONICAL_DEFINITIONS: [SubExpression; 14] = [
    SubExpression {
        id: "p1",
        label: "w*z + h + j - q",
        zero_required: true,
        parameters: &[W, Z, H, J, Q],
        compute: p1,
    },
    SubExpression {
        id: "p2",
        label: "(g*k + 2*g + k + 1)*(h + j) + h - z",
        zero_required: true,
        parameters: &[G, K, H, J, Z],
        compute: p2,
    },
    SubExpression {
        id: "p3",
        label: "2*n + p + q + z - e",
        zero_required: true,
        parameters: &[N, P, Q, Z, E],
        compute: p3,
    },
    SubExpression {
        id: "p4",
        label: "16*(k+1)^3*(k+2)*(n+1)^2 + 1 - f^2",
        zero_required: true,
        parameters: &[K, N, F],
        compute: p4,
    },
    SubExpression {
        id: "p5",
        label: "e^3*(e+2)*(a+1)^2 + 1 - o^2",
        zero_required: true,
        parameters: &[E, A, O],
        compute: p5,
    },
    SubExpression {
        id: "p6",
        label: "(a^2 - 1)*y^2 + 1 - x^2",
        zero_required: true,
        parameters: &[A, Y, X],
        compute: p6,
    },
    SubExpression {
        id: "p7",
        label: "16*r^2*y^4*(a^2 - 1) + 1 - u^2",
        zero_required: true,
        parameters: &[R, Y, A, U],
        compute: p7,
    },
    SubExpression {
        id: "p8",
        label: "((a + u^2*(u^2 - a))^2 - 1)*(n + 4*d*y)^2 + 1 - (x + c*u)^2",
        zero_required: true,
        parameters: &[A, U, N, D, Y, X, C],
        compute: p8,
    },
    SubExpression {
        id: "p9",
        label: "n + l + v - y",
        zero_required: true,
        parameters: &[N, L, V, Y],
        compute: p9,
    },
    SubExpression {
        id: "p10",
        label: "(a^2 - 1)*l^2 + 1 - m^2",
        zero_required: true,
        parameters: &[A, L, M],
        compute: p10,
    },
    SubExpression {
        id: "p11",
        label: "a*i + k + 1 - l - i",
        zero_required: true,
        parameters: &[A, I, K, L],
        compute: p11,
    },
    SubExpression {
        id: "p12",
        label: "p + l*(a - n - 1) + b*(2*a*n + 2*a - n^2 - 2*n - 2) - m",
        zero_required: true,
        parameters: &[P, L, A, N, B, M],
        compute: p12,
    },
    SubExpression {
        id: "p13",
        label: "q + y*(a - p - 1) + s*(2*a*p + 2*a - p^2 - 2*p - 2) - x",
        zero_required: true,
        parameters: &[Q, Y, A, P, S, X],
        compute: p13,
    },
    SubExpression {
        id: "p14",
        label: "z + p*l*(a - p) + t*(2*a*p - p^2 - 1) - p*m",
        zero_required: true,
        parameters: &[Z, P, L, A, T, M],
        compute: p14,
    },
];

fn p1(v: &ParameterValues) -> Integer {
    &v[W] * &v[Z] + &v[H] + &v[J] - &v[Q]
}

fn p2(v: &ParameterValues) -> Integer {
    let left = &v[G] * &v[K] + 2 * &v[G] + &v[K] + 1;
    left * (&v[H] + &v[J]) + &v[H] - &v[Z]
}

fn p3(v: &ParameterValues) -> Integer {
    2 * &v[N] + &v[P] + &v[Q] + &v[Z] - &v[E]
}

fn p4(v: &ParameterValues) -> Integer {
    16 * (&v[K] + 1).pow(3) * (&v[K] + 2) * (&v[N] + 1).square() + 1 - v[F].square()
}

fn p5(v: &ParameterValues) -> Integer {
    v[E].pow(3) * (&v[E] + 2) * (&v[A] + 1).square() + 1 - v[O].square()
}

fn p6(v: &ParameterValues) -> Integer {
    (v[A].square() - 1) * v[Y].square() + 1 - v[X].square()
}

fn p7(v: &ParameterValues) -> Integer {
    16 * v[R].square() * v[Y].pow(4) * (v[A].square() - 1) + 1 - v[U].square()
}

fn p8(v: &ParameterValues) -> Integer {
    let u2 = v[U].square();
    let first = (&v[A] + &u2 * (&u2 - &v[A])).square() - 1;
    let second = &v[N] + 4 * &v[D] * &v[Y];
    let third = &v[X] + &v[C] * &v[U];
    first * second.square() + 1 - third.square()
}

fn p9(v: &ParameterValues) -> Integer {
    &v[N] + &v[L] + &v[V] - &v[Y]
}

fn p10(v: &ParameterValues) -> Integer {
    (v[A].square() - 1) * v[L].square() + 1 - v[M].square()
}

fn p11(v: &ParameterValues) -> Integer {
    &v[A] * &v[I] + &v[K] + 1 - &v[L] - &v[I]
}

fn p12(v: &ParameterValues) -> Integer {
    let first = &v[A] - &v[N] - 1;
    let second = 2 * &v[A] * &v[N] + 2 * &v[A] - v[N].square() - 2 * &v[N] - 2;
    &v[P] + &v[L] * first + &v[B] * second - &v[M]
}

fn p13(v: &ParameterValues) -> Integer {
    let first = &v[A] - &v[P] - 1;
    let second = 2 * &v[A] * &v[P] + 2 * &v[A] - v[P].square() - 2 * &v[P] - 2;
    &v[Q] + &v[Y] * first + &v[S] * second - &v[X]
}

fn p14(v: &ParameterValues) -> Integer {
    let first = &v[A] - &v[P];
    let second = 2 * &v[A] * &v[P] - v[P].square() - 1;
    &v[Z] + &v[P] * &v[L] * first + &v[T] * second - &v[P] * &v[M]
}
