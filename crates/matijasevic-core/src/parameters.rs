//! Parameter keys, assignments and per-parameter tallies.
//!
//! The polynomial has 26 variables named `a` through `z`. Their declaration
//! order is the canonical order for iteration and display.

use matijasevic_integers::Integer;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use thiserror::Error;

/// One of the 26 polynomial variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum ParameterKey {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

/// All parameter keys in canonical order.
pub const PARAMETER_KEYS: [ParameterKey; ParameterKey::COUNT] = ParameterKey::ALL;

impl ParameterKey {
    /// Number of parameters.
    pub const COUNT: usize = 26;

    /// All keys in canonical (declaration) order.
    pub const ALL: [ParameterKey; Self::COUNT] = {
        use ParameterKey::{A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z};
        [A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z]
    };

    /// Position of this key in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the key at `index` in canonical order.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// The lowercase letter naming this key.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// Iterates over all keys in canonical order.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error returned when text does not name a parameter.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown parameter {0:?}, expected a single letter a-z")]
pub struct UnknownParameter(pub String);

impl FromStr for ParameterKey {
    type Err = UnknownParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                let offset = c.to_ascii_lowercase() as usize - 'a' as usize;
                Self::from_index(offset).ok_or_else(|| UnknownParameter(s.to_owned()))
            }
            _ => Err(UnknownParameter(s.to_owned())),
        }
    }
}

/// A total assignment of an integer to every parameter.
///
/// There is no way to build a partial assignment; keys that are not set
/// explicitly hold zero. Values are not restricted in sign.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ParameterValues([Integer; ParameterKey::COUNT]);

impl ParameterValues {
    /// The all-zero assignment.
    #[must_use]
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Builds an assignment by calling `f` once per key, in canonical order.
    pub fn from_fn(mut f: impl FnMut(ParameterKey) -> Integer) -> Self {
        Self(std::array::from_fn(|i| f(ParameterKey::ALL[i])))
    }

    /// Returns this assignment with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: ParameterKey, value: impl Into<Integer>) -> Self {
        self.0[key.index()] = value.into();
        self
    }

    /// Sets `key` to `value`.
    pub fn set(&mut self, key: ParameterKey, value: impl Into<Integer>) {
        self.0[key.index()] = value.into();
    }

    /// Returns the value of `key`.
    #[must_use]
    pub fn get(&self, key: ParameterKey) -> &Integer {
        &self.0[key.index()]
    }

    /// Iterates over `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, &Integer)> {
        ParameterKey::ALL.into_iter().zip(self.0.iter())
    }
}

impl From<[Integer; ParameterKey::COUNT]> for ParameterValues {
    fn from(values: [Integer; ParameterKey::COUNT]) -> Self {
        Self(values)
    }
}

impl Index<ParameterKey> for ParameterValues {
    type Output = Integer;

    fn index(&self, key: ParameterKey) -> &Integer {
        &self.0[key.index()]
    }
}

impl IndexMut<ParameterKey> for ParameterValues {
    fn index_mut(&mut self, key: ParameterKey) -> &mut Integer {
        &mut self.0[key.index()]
    }
}

/// A count per parameter.
///
/// Used both for the number of currently satisfied conditions and for the
/// static number of conditions each parameter appears in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ParameterTally([u32; ParameterKey::COUNT]);

impl ParameterTally {
    /// A tally with every count at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; ParameterKey::COUNT])
    }

    pub(crate) const fn from_counts(counts: [u32; ParameterKey::COUNT]) -> Self {
        Self(counts)
    }

    /// Returns the count for `key`.
    #[must_use]
    pub const fn get(&self, key: ParameterKey) -> u32 {
        self.0[key.index()]
    }

    pub(crate) fn increment(&mut self, key: ParameterKey) {
        self.0[key.index()] += 1;
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Iterates over `(key, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, u32)> + '_ {
        ParameterKey::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<ParameterKey> for ParameterTally {
    type Output = u32;

    fn index(&self, key: ParameterKey) -> &u32 {
        &self.0[key.index()]
    }
}
