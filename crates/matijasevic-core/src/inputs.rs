//! Conversion between per-parameter text and parameter assignments.
//!
//! Two paths turn text into integers:
//! - [`convert_inputs_to_parameters`] is best-effort and never fails. Blank,
//!   bare-sign or unparsable text becomes `0`, and negative values are
//!   clamped to `0`, so a live display always has something to evaluate.
//! - [`validate_inputs`] is strict. Every field must hold a non-negative
//!   integer; every offending field is reported.
//!
//! [`convert_parameters_to_inputs`] is the inverse of both and is exact for
//! integers of any size.

use crate::parameters::{ParameterKey, ParameterValues};
use matijasevic_integers::{Integer, ParseIntegerError};
use num_traits::Zero;
use thiserror::Error;

/// Per-parameter text, as typed into a form.
///
/// A field may be absent; absent fields read as `"0"` when converted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterInputs([Option<String>; ParameterKey::COUNT]);

impl Default for ParameterInputs {
    /// Every field set to `"0"`.
    fn default() -> Self {
        Self::from_fn(|_| "0".to_owned())
    }
}

impl ParameterInputs {
    /// Inputs with no field set.
    #[must_use]
    pub fn empty() -> Self {
        Self(std::array::from_fn(|_| None))
    }

    /// Builds inputs by calling `f` once per key, in canonical order.
    pub fn from_fn(mut f: impl FnMut(ParameterKey) -> String) -> Self {
        Self(std::array::from_fn(|i| Some(f(ParameterKey::ALL[i]))))
    }

    /// Returns these inputs with `key` set to `text`.
    #[must_use]
    pub fn with(mut self, key: ParameterKey, text: impl Into<String>) -> Self {
        self.set(key, text);
        self
    }

    /// Sets the text of `key`.
    pub fn set(&mut self, key: ParameterKey, text: impl Into<String>) {
        self.0[key.index()] = Some(text.into());
    }

    /// Clears the text of `key`.
    pub fn clear(&mut self, key: ParameterKey) {
        self.0[key.index()] = None;
    }

    /// Returns the text of `key`, if set.
    #[must_use]
    pub fn get(&self, key: ParameterKey) -> Option<&str> {
        self.0[key.index()].as_deref()
    }

    /// Iterates over `(key, text)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, Option<&str>)> {
        ParameterKey::ALL
            .into_iter()
            .zip(self.0.iter().map(Option::as_deref))
    }
}

/// Parses `text` leniently: anything that is not a non-negative integer is `0`.
#[must_use]
pub fn parse_clamped(text: &str) -> Integer {
    match Integer::parse_literal(text) {
        Ok(value) if !value.is_negative() => value,
        _ => Integer::zero(),
    }
}

/// Converts form text to an assignment without ever failing.
#[must_use]
pub fn convert_inputs_to_parameters(inputs: &ParameterInputs) -> ParameterValues {
    ParameterValues::from_fn(|key| parse_clamped(inputs.get(key).unwrap_or("0")))
}

/// Converts an assignment to decimal text, one field per key.
#[must_use]
pub fn convert_parameters_to_inputs(values: &ParameterValues) -> ParameterInputs {
    ParameterInputs::from_fn(|key| values[key].to_string())
}

/// Why a single field failed strict validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    /// The text is blank or not an integer.
    #[error("enter an integer")]
    NotAnInteger(#[source] ParseIntegerError),

    /// The text is an integer below zero.
    #[error("enter a non-negative integer")]
    Negative,
}

/// A field that failed strict validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("parameter {key}: {error}")]
pub struct FieldError {
    /// The offending parameter.
    pub key: ParameterKey,
    /// What was wrong with it.
    #[source]
    pub error: InputError,
}

/// All fields that failed strict validation, in canonical key order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{count} parameter field(s) are invalid", count = .fields.len())]
pub struct ValidationErrors {
    fields: Vec<FieldError>,
}

impl ValidationErrors {
    /// The failing fields, in canonical key order.
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    /// The error for `key`, if that field failed.
    #[must_use]
    pub fn error_for(&self, key: ParameterKey) -> Option<&InputError> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.error)
    }
}

/// Validates one field strictly.
///
/// # Errors
///
/// Returns [`InputError::NotAnInteger`] for missing, blank or malformed
/// text and [`InputError::Negative`] for integers below zero.
pub fn validate_field(text: Option<&str>) -> Result<Integer, InputError> {
    let value = Integer::parse_literal(text.unwrap_or_default()).map_err(InputError::NotAnInteger)?;
    if value.is_negative() {
        return Err(InputError::Negative);
    }
    Ok(value)
}

/// Validates every field strictly.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every field that is missing, not an
/// integer, or negative.
pub fn validate_inputs(inputs: &ParameterInputs) -> Result<ParameterValues, ValidationErrors> {
    let mut values = ParameterValues::zeros();
    let mut fields = Vec::new();

    for (key, text) in inputs.iter() {
        match validate_field(text) {
            Ok(value) => values[key] = value,
            Err(error) => fields.push(FieldError { key, error }),
        }
    }

    if fields.is_empty() {
        Ok(values)
    } else {
        Err(ValidationErrors { fields })
    }
}

/// Returns true if `text` is acceptable while typing: digits with an
/// optional single leading `+`, or nothing at all.
#[must_use]
pub fn is_permitted_keystroke_text(text: &str) -> bool {
    let digits = text.strip_prefix('+').unwrap_or(text);
    digits.bytes().all(|b| b.is_ascii_digit())
}

/// Reduces arbitrary typed text to the permitted keystroke form.
///
/// Whitespace and commas are dropped, a leading `+` is kept, and every
/// other non-digit is removed.
#[must_use]
pub fn sanitize_keystroke_text(text: &str) -> String {
    if is_permitted_keystroke_text(text) {
        return text.to_owned();
    }

    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    let (sign, rest) = match compact.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", compact.as_str()),
    };
    let digits: String = rest.chars().filter(char::is_ascii_digit).collect();
    format!("{sign}{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::ParameterKey::{A, B, C, K, Z};

    #[test]
    fn test_default_inputs_are_zero_text() {
        let inputs = ParameterInputs::default();
        assert!(inputs.iter().all(|(_, text)| text == Some("0")));
        assert_eq!(convert_inputs_to_parameters(&inputs), ParameterValues::zeros());
    }

    #[test]
    fn test_lenient_conversion_defaults_to_zero() {
        for text in ["", "   ", "+", "-", "abc", "1.5", "12e3", "--4", "0x"] {
            assert_eq!(parse_clamped(text), Integer::zero(), "{text:?}");
        }
    }

    #[test]
    fn test_lenient_conversion_clamps_negatives() {
        let inputs = ParameterInputs::default().with(A, "-10").with(B, " -1 ");
        let values = convert_inputs_to_parameters(&inputs);
        assert_eq!(values[A], Integer::zero());
        assert_eq!(values[B], Integer::zero());
    }

    #[test]
    fn test_lenient_conversion_accepts_integers() {
        let inputs = ParameterInputs::empty()
            .with(A, " 42 ")
            .with(B, "+5")
            .with(C, "0x10");
        let values = convert_inputs_to_parameters(&inputs);
        assert_eq!(values[A], Integer::new(42));
        assert_eq!(values[B], Integer::new(5));
        assert_eq!(values[C], Integer::new(16));
        // Absent fields read as "0".
        assert_eq!(values[K], Integer::zero());
    }

    #[test]
    fn test_round_trip_large_integer() {
        let big = "901690358098896161685556879749949186326380713409290912";
        let inputs = ParameterInputs::default().with(A, big);

        assert!(validate_inputs(&inputs).is_ok());
        let values = convert_inputs_to_parameters(&inputs);
        assert_eq!(values[A].to_string(), big);

        let back = convert_parameters_to_inputs(&values);
        assert_eq!(back.get(A), Some(big));
        assert_eq!(convert_inputs_to_parameters(&back), values);
    }

    #[test]
    fn test_inverse_conversion_keeps_sign() {
        let values = ParameterValues::zeros().with(Z, -3);
        let inputs = convert_parameters_to_inputs(&values);
        assert_eq!(inputs.get(Z), Some("-3"));
        assert_eq!(inputs.get(A), Some("0"));
    }

    #[test]
    fn test_strict_validation_accepts() {
        let inputs = ParameterInputs::default()
            .with(A, "0")
            .with(B, "123")
            .with(C, "+5");
        let values = validate_inputs(&inputs).unwrap();
        assert_eq!(values[B], Integer::new(123));
        assert_eq!(values[C], Integer::new(5));
    }

    #[test]
    fn test_strict_validation_rejects_negative() {
        let inputs = ParameterInputs::default().with(A, "-1");
        let errors = validate_inputs(&inputs).unwrap_err();

        assert_eq!(errors.fields().len(), 1);
        assert_eq!(errors.error_for(A), Some(&InputError::Negative));
        assert_eq!(errors.fields()[0].error.to_string(), "enter a non-negative integer");
    }

    #[test]
    fn test_strict_validation_collects_every_field() {
        let mut inputs = ParameterInputs::default().with(B, "").with(Z, "x1");
        inputs.clear(K);
        let errors = validate_inputs(&inputs).unwrap_err();

        let keys: Vec<_> = errors.fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, [B, K, Z]);
        assert_eq!(
            errors.error_for(B),
            Some(&InputError::NotAnInteger(ParseIntegerError::Empty))
        );
        assert_eq!(errors.error_for(Z).unwrap().to_string(), "enter an integer");
        assert_eq!(errors.to_string(), "3 parameter field(s) are invalid");
        assert_eq!(errors.fields()[0].to_string(), "parameter b: enter an integer");
    }

    #[test]
    fn test_keystroke_pattern() {
        assert!(is_permitted_keystroke_text(""));
        assert!(is_permitted_keystroke_text("+"));
        assert!(is_permitted_keystroke_text("+120"));
        assert!(is_permitted_keystroke_text("007"));
        assert!(!is_permitted_keystroke_text("-1"));
        assert!(!is_permitted_keystroke_text("++1"));
        assert!(!is_permitted_keystroke_text("1 000"));
    }

    #[test]
    fn test_keystroke_sanitize() {
        assert_eq!(sanitize_keystroke_text("1,000"), "1000");
        assert_eq!(sanitize_keystroke_text(" + 12a3 "), "+123");
        assert_eq!(sanitize_keystroke_text("+abc"), "+");
        assert_eq!(sanitize_keystroke_text("-42"), "42");
        assert_eq!(sanitize_keystroke_text("   "), "");
        assert_eq!(sanitize_keystroke_text("+77"), "+77");
    }
}
