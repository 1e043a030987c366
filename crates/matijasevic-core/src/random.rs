//! Random parameter assignments.
//!
//! Each of the 26 values is drawn independently and uniformly from an
//! inclusive range. The range is clamped so that it never reaches below
//! zero and never inverts.

use crate::parameters::ParameterValues;
use matijasevic_integers::Integer;
use rand::Rng;
use tracing::debug;

/// Inclusive bounds for random parameter values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RandomRange {
    /// Requested lower bound.
    pub min: i64,
    /// Requested upper bound.
    pub max: i64,
}

/// The default range, `0..=10`.
pub const DEFAULT_RANDOM_RANGE: RandomRange = RandomRange::new(0, 10);

impl Default for RandomRange {
    fn default() -> Self {
        DEFAULT_RANDOM_RANGE
    }
}

impl RandomRange {
    /// Creates a range from requested bounds. No clamping happens here.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// The bounds actually sampled from.
    ///
    /// The minimum is raised to zero, then the maximum is raised to the
    /// minimum, so `max < min` collapses to the single value `min`.
    #[must_use]
    pub fn effective_bounds(self) -> (i64, i64) {
        let min = self.min.max(0);
        let max = self.max.max(min);
        (min, max)
    }

    /// Returns true if `value` lies within the effective bounds.
    #[must_use]
    pub fn contains(self, value: &Integer) -> bool {
        let (min, max) = self.effective_bounds();
        *value >= Integer::new(min) && *value <= Integer::new(max)
    }
}

/// Draws a random assignment from the thread-local generator.
#[must_use]
pub fn generate_random_parameters(range: RandomRange) -> ParameterValues {
    generate_random_parameters_with(&mut rand::thread_rng(), range)
}

/// Draws a random assignment from `rng`.
pub fn generate_random_parameters_with<R: Rng>(
    rng: &mut R,
    range: RandomRange,
) -> ParameterValues {
    let (min, max) = range.effective_bounds();
    debug!(min, max, "generating random parameters");
    ParameterValues::from_fn(|_| Integer::new(rng.gen_range(min..=max)))
}
