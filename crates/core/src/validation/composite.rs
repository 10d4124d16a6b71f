//! Composite validators — sequence field validators over a related group of
//! fields, short-circuit on the first failure, and aggregate on success.

use serde::Serialize;

use super::currency::validate_currency;
use super::input::RawInput;
use super::result::FieldError;
use super::sink::NotificationSink;

/// Raw cost fields of a single part line item, as posted by the form.
#[derive(Debug, Clone, Default)]
pub struct RawCostInput {
    pub price: RawInput,
    pub shipping: RawInput,
    pub duties: RawInput,
}

/// Normalized part costs; `total` is always the exact sum of the other
/// three fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBundle {
    pub price: f64,
    pub shipping: f64,
    pub duties: f64,
    pub total: f64,
}

/// Outcome of part-cost validation. `values` is present exactly when
/// `is_valid`; `error` is the single failure that stopped validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<CostBundle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldError>,
}

/// Outcome of budget validation. `value` is `0.0` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetValidation {
    pub is_valid: bool,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldError>,
}

fn warn(sink: Option<&dyn NotificationSink>, error: &FieldError) {
    if let Some(sink) = sink {
        sink.warning(&error.message);
    }
}

/// Validate the cost fields of a part, in fixed order: price, shipping,
/// duties.
///
/// The first invalid field is reported through `sink` (when present) and
/// ends the call; later fields are not examined, so at most one warning is
/// emitted per invocation. When all three pass, `total` is computed from the
/// normalized values, not the raw input.
pub fn validate_part_cost(
    input: &RawCostInput,
    sink: Option<&dyn NotificationSink>,
) -> CostValidation {
    let fields = [
        (&input.price, "Price"),
        (&input.shipping, "Shipping"),
        (&input.duties, "Duties"),
    ];

    let mut normalized = [0.0; 3];
    for ((raw, label), slot) in fields.iter().zip(normalized.iter_mut()) {
        let check = validate_currency(raw, label);
        if let Some(error) = check.error {
            warn(sink, &error);
            return CostValidation {
                is_valid: false,
                values: None,
                error: Some(error),
            };
        }
        *slot = check.value;
    }

    let [price, shipping, duties] = normalized;
    CostValidation {
        is_valid: true,
        values: Some(CostBundle {
            price,
            shipping,
            duties,
            total: price + shipping + duties,
        }),
        error: None,
    }
}

/// Validate a project budget amount.
pub fn validate_budget(raw: &RawInput, sink: Option<&dyn NotificationSink>) -> BudgetValidation {
    let check = validate_currency(raw, "Budget");
    match check.error {
        Some(error) => {
            warn(sink, &error);
            BudgetValidation {
                is_valid: false,
                value: 0.0,
                error: Some(error),
            }
        }
        None => BudgetValidation {
            is_valid: true,
            value: check.value,
            error: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records warnings for assertion.
    #[derive(Default)]
    struct RecordingSink {
        warnings: RefCell<Vec<String>>,
    }

    impl NotificationSink for RecordingSink {
        fn warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    fn cost(price: &str, shipping: &str, duties: &str) -> RawCostInput {
        RawCostInput {
            price: RawInput::from(price),
            shipping: RawInput::from(shipping),
            duties: RawInput::from(duties),
        }
    }

    #[test]
    fn all_fields_valid_produces_the_bundle() {
        let sink = RecordingSink::default();
        let result = validate_part_cost(&cost("10.50", "2", "0"), Some(&sink));

        assert!(result.is_valid);
        assert_eq!(
            result.values,
            Some(CostBundle {
                price: 10.5,
                shipping: 2.0,
                duties: 0.0,
                total: 12.5,
            })
        );
        assert!(sink.warnings.borrow().is_empty());
    }

    #[test]
    fn empty_fields_normalize_to_zero_in_the_total() {
        let result = validate_part_cost(&cost("100", "", ""), None);
        assert_eq!(result.values.unwrap().total, 100.0);
    }

    #[test]
    fn first_invalid_field_short_circuits_with_one_warning() {
        let sink = RecordingSink::default();
        let result = validate_part_cost(&cost("10", "5", "abc"), Some(&sink));

        assert!(!result.is_valid);
        assert!(result.values.is_none());
        assert_eq!(
            *sink.warnings.borrow(),
            vec!["Duties must be a valid number".to_string()]
        );
    }

    #[test]
    fn later_errors_are_not_reported_in_the_same_call() {
        let sink = RecordingSink::default();
        let result = validate_part_cost(&cost("10", "-1", "abc"), Some(&sink));

        assert!(!result.is_valid);
        // Shipping fails first; the duties error is never reached.
        assert_eq!(
            *sink.warnings.borrow(),
            vec!["Shipping cannot be negative".to_string()]
        );
    }

    #[test]
    fn missing_sink_is_a_no_op() {
        let result = validate_part_cost(&cost("x", "0", "0"), None);
        assert!(!result.is_valid);
        assert_eq!(result.error.unwrap().to_string(), "Price must be a valid number");
    }

    #[test]
    fn budget_success_returns_the_normalized_value() {
        let sink = RecordingSink::default();
        let result = validate_budget(&RawInput::from("1500"), Some(&sink));

        assert!(result.is_valid);
        assert_eq!(result.value, 1500.0);
        assert!(sink.warnings.borrow().is_empty());
    }

    #[test]
    fn negative_budget_warns_and_returns_zero() {
        let sink = RecordingSink::default();
        let result = validate_budget(&RawInput::from(-5.0), Some(&sink));

        assert!(!result.is_valid);
        assert_eq!(result.value, 0.0);
        assert_eq!(
            *sink.warnings.borrow(),
            vec!["Budget cannot be negative".to_string()]
        );
    }

    #[test]
    fn empty_budget_is_a_valid_zero() {
        let result = validate_budget(&RawInput::Empty, None);
        assert!(result.is_valid);
        assert_eq!(result.value, 0.0);
    }
}
