//! Field-level validation results.

use serde::Serialize;

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    NotANumber,
    Negative,
    TooSmall,
    TooLarge,
    Required,
}

/// A single rejected field, with the user-facing message.
///
/// Message wording is fixed here so every caller surfaces identical text for
/// the same rejection.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: String,
    pub reason: InvalidReason,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, reason: InvalidReason, message: String) -> Self {
        Self {
            field: field.to_string(),
            reason,
            message,
        }
    }

    pub fn not_a_number(field: &str) -> Self {
        Self::new(
            field,
            InvalidReason::NotANumber,
            format!("{field} must be a valid number"),
        )
    }

    pub fn negative(field: &str) -> Self {
        Self::new(
            field,
            InvalidReason::Negative,
            format!("{field} cannot be negative"),
        )
    }

    /// Fixed-ceiling overflow (currency); the bound is not echoed back.
    pub fn exceeds_maximum(field: &str) -> Self {
        Self::new(
            field,
            InvalidReason::TooLarge,
            format!("{field} exceeds maximum allowed value"),
        )
    }

    pub fn at_least(field: &str, min: i64) -> Self {
        Self::new(
            field,
            InvalidReason::TooSmall,
            format!("{field} must be at least {min}"),
        )
    }

    /// `max` is pre-formatted by the caller (thousands-separated).
    pub fn at_most(field: &str, max: &str) -> Self {
        Self::new(
            field,
            InvalidReason::TooLarge,
            format!("{field} must be at most {max}"),
        )
    }

    pub fn required(field: &str) -> Self {
        Self::new(
            field,
            InvalidReason::Required,
            format!("{field} is required"),
        )
    }
}

/// Outcome of validating one field.
///
/// Invariant: `is_valid == error.is_none()`. On failure `value` holds the
/// rule's designated default (`0.0` for currency, `None` for integers) so
/// the caller always receives a usable value of the right shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCheck<T> {
    pub is_valid: bool,
    pub value: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldError>,
}

impl<T> FieldCheck<T> {
    pub fn valid(value: T) -> Self {
        Self {
            is_valid: true,
            value,
            error: None,
        }
    }

    pub fn invalid(default: T, error: FieldError) -> Self {
        Self {
            is_valid: false,
            value: default,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_uphold_the_invariant() {
        let ok = FieldCheck::valid(7.0);
        assert!(ok.is_valid);
        assert!(ok.error.is_none());

        let bad = FieldCheck::invalid(0.0, FieldError::negative("Price"));
        assert!(!bad.is_valid);
        assert!(bad.error.is_some());
    }

    #[test]
    fn display_matches_the_stored_message() {
        let err = FieldError::not_a_number("Duties");
        assert_eq!(err.to_string(), "Duties must be a valid number");
        assert_eq!(err.to_string(), err.message);
    }

    #[test]
    fn reason_serializes_snake_case() {
        let err = FieldError::required("Year");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["reason"], "required");
        assert_eq!(json["field"], "Year");
        assert_eq!(json["message"], "Year is required");
    }

    #[test]
    fn valid_check_omits_error_field_in_json() {
        let json = serde_json::to_value(FieldCheck::valid(3.5)).unwrap();
        assert_eq!(json["is_valid"], true);
        assert_eq!(json["value"], 3.5);
        assert!(json.get("error").is_none());
    }
}
