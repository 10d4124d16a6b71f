//! Currency field validation — pure logic, no side effects.

use super::input::RawInput;
use super::result::{FieldCheck, FieldError};

/// Largest accepted currency amount. Anything above this is assumed to be a
/// data-entry mistake rather than a real part cost.
pub const MAX_CURRENCY_VALUE: f64 = 1_000_000_000.0;

/// Validate a monetary amount.
///
/// Empty input is treated as "no cost" and normalizes to `0.0`. Anything
/// else must parse as a finite, non-negative number no greater than
/// [`MAX_CURRENCY_VALUE`].
pub fn validate_currency(raw: &RawInput, field: &str) -> FieldCheck<f64> {
    if raw.is_empty() {
        return FieldCheck::valid(0.0);
    }
    let Some(amount) = raw.parse_currency() else {
        return FieldCheck::invalid(0.0, FieldError::not_a_number(field));
    };
    if amount < 0.0 {
        return FieldCheck::invalid(0.0, FieldError::negative(field));
    }
    if amount > MAX_CURRENCY_VALUE {
        return FieldCheck::invalid(0.0, FieldError::exceeds_maximum(field));
    }
    FieldCheck::valid(amount)
}
