//! Positive-integer field validation, plus the year and odometer
//! specializations built on it.

use super::input::RawInput;
use super::result::{FieldCheck, FieldError};

/// Earliest accepted model year.
pub const MIN_YEAR: i64 = 1900;

/// Years past the current one a model year may claim (next-year models are
/// sold early).
pub const YEAR_SLACK: i64 = 2;

/// Largest accepted odometer reading, in whole units.
pub const MAX_ODOMETER: i64 = 10_000_000;

/// Acceptance range and empty-input policy for an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerBounds {
    pub min: i64,
    pub max: i64,
    pub allow_empty: bool,
}

impl Default for IntegerBounds {
    fn default() -> Self {
        Self {
            min: 0,
            max: i64::MAX,
            allow_empty: true,
        }
    }
}

/// Validate an integer field against `bounds`.
///
/// Empty input is valid `None` when `bounds.allow_empty`, otherwise a
/// "required" rejection. The out-of-range messages differ on purpose: the
/// lower bound reads plainly ("must be at least 0") while the upper bound is
/// thousands-separated ("must be at most 10,000,000") because the large
/// limits are unreadable without grouping.
pub fn validate_integer(raw: &RawInput, field: &str, bounds: IntegerBounds) -> FieldCheck<Option<i64>> {
    if raw.is_empty() {
        return if bounds.allow_empty {
            FieldCheck::valid(None)
        } else {
            FieldCheck::invalid(None, FieldError::required(field))
        };
    }
    let Some(n) = raw.parse_integer() else {
        return FieldCheck::invalid(None, FieldError::not_a_number(field));
    };
    if n < bounds.min {
        return FieldCheck::invalid(None, FieldError::at_least(field, bounds.min));
    }
    if n > bounds.max {
        return FieldCheck::invalid(None, FieldError::at_most(field, &format_thousands(bounds.max)));
    }
    FieldCheck::valid(Some(n))
}

/// Validate a vehicle model year against `[MIN_YEAR, current_year + YEAR_SLACK]`.
///
/// `current_year` is injected rather than read from a clock so behavior is
/// reproducible in tests and across a year boundary.
pub fn validate_year(raw: &RawInput, current_year: i64) -> FieldCheck<Option<i64>> {
    validate_integer(
        raw,
        "Year",
        IntegerBounds {
            min: MIN_YEAR,
            max: current_year + YEAR_SLACK,
            allow_empty: true,
        },
    )
}

/// Validate an odometer reading against `[0, MAX_ODOMETER]`.
pub fn validate_odometer(raw: &RawInput) -> FieldCheck<Option<i64>> {
    validate_integer(
        raw,
        "Odometer",
        IntegerBounds {
            min: 0,
            max: MAX_ODOMETER,
            allow_empty: true,
        },
    )
}

/// Group a non-negative integer's digits with commas: `10000000` → `"10,000,000"`.
fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}
