//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with the exact
//! operations needed to evaluate integer polynomials: `+`, `-`, `*`,
//! negation and non-negative powers. Every operator is implemented for
//! owned values, references and `i64` operands so polynomial terms can be
//! written close to their algebraic form.

use dashu::base::BitTest;
use dashu::integer::{IBig, UBig};
use num_traits::{One, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig`. It never overflows: intermediate terms
/// such as `16 * (k + 1)^3 * (k + 2) * (n + 1)^2` are exact for any input.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

/// Errors produced when parsing an integer literal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseIntegerError {
    /// The input was empty after trimming whitespace.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A sign or radix prefix was present but no digits followed it.
    #[error("integer literal has no digits")]
    NoDigits,

    /// A character is not a digit in the literal's radix.
    #[error("invalid digit {found:?} for radix {radix}")]
    InvalidDigit {
        /// The offending character.
        found: char,
        /// The radix the literal was parsed in.
        radix: u32,
    },

    /// The underlying big integer parser rejected the digits.
    #[error("malformed integer literal")]
    Malformed,
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Parses an integer literal.
    ///
    /// Accepted forms, after trimming surrounding whitespace:
    /// - an optional `+` or `-` followed by decimal digits
    /// - an unsigned `0x`, `0o` or `0b` prefix followed by digits in that radix
    ///
    /// # Errors
    ///
    /// Returns [`ParseIntegerError`] for empty input, a bare sign or prefix,
    /// or any character outside the literal's radix.
    pub fn parse_literal(text: &str) -> Result<Self, ParseIntegerError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseIntegerError::Empty);
        }

        let (negative, body) = if let Some(rest) = text.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = text.strip_prefix('+') {
            (false, rest)
        } else {
            (false, text)
        };
        let signed = body.len() != text.len();

        let (radix, digits) = match body.get(..2) {
            Some("0x" | "0X") if !signed => (16, &body[2..]),
            Some("0o" | "0O") if !signed => (8, &body[2..]),
            Some("0b" | "0B") if !signed => (2, &body[2..]),
            _ => (10, body),
        };

        if digits.is_empty() {
            return Err(ParseIntegerError::NoDigits);
        }
        if let Some(found) = digits.chars().find(|c| !c.is_digit(radix)) {
            return Err(ParseIntegerError::InvalidDigit { found, radix });
        }

        let magnitude =
            UBig::from_str_radix(digits, radix).map_err(|_| ParseIntegerError::Malformed)?;
        let value = IBig::from(magnitude);
        Ok(Self(if negative { -value } else { value }))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0 == IBig::ZERO {
            0
        } else if self.0 > IBig::ZERO {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Computes self².
    #[must_use]
    pub fn square(&self) -> Self {
        Self(&self.0 * &self.0)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = ParseIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

// Arithmetic operations.
//
// Each operator is implemented for every owned/borrowed combination, plus
// `i64` on either side, so terms like `16 * k1.pow(3) * (&k + 2)` type-check
// without explicit conversions.
macro_rules! impl_binary_op {
    ($Trait:ident, $method:ident, $op:tt) => {
        impl $Trait for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer(self.0 $op rhs.0)
            }
        }

        impl $Trait<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(self.0 $op &rhs.0)
            }
        }

        impl $Trait<Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer(&self.0 $op rhs.0)
            }
        }

        impl $Trait<&Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(&self.0 $op &rhs.0)
            }
        }

        impl $Trait<i64> for Integer {
            type Output = Integer;

            fn $method(self, rhs: i64) -> Integer {
                Integer(self.0 $op IBig::from(rhs))
            }
        }

        impl $Trait<i64> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: i64) -> Integer {
                Integer(&self.0 $op IBig::from(rhs))
            }
        }

        impl $Trait<Integer> for i64 {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Integer {
                Integer(IBig::from(self) $op rhs.0)
            }
        }

        impl $Trait<&Integer> for i64 {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Integer {
                Integer(IBig::from(self) $op &rhs.0)
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);
impl_binary_op!(Mul, mul, *);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl Sum for Integer {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Integer> for Integer {
    fn sum<I: Iterator<Item = &'a Integer>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl From<UBig> for Integer {
    fn from(value: UBig) -> Self {
        Self(IBig::from(value))
    }
}
