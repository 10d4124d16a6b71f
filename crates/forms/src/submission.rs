//! Submit/halt workflow for part and budget forms.
//!
//! Each `submit_*` function runs the declarative text rules, then the
//! numeric validators from `gearlog-core` in form order, and halts on the
//! first failure by returning a [`FormError`]. The notification sink sees at
//! most one warning per call, mirroring the composite validators' policy.

use chrono::{Datelike, Utc};
use gearlog_core::validation::composite::{validate_budget, validate_part_cost, RawCostInput};
use gearlog_core::validation::input::RawInput;
use gearlog_core::validation::integer::{validate_odometer, validate_year};
use gearlog_core::validation::result::{FieldCheck, FieldError};
use gearlog_core::validation::sink::NotificationSink;
use validator::Validate;

use crate::error::FormError;
use crate::payload::{BudgetFormPayload, BudgetRecord, PartFormPayload, PartRecord};

/// The current UTC year, for the model-year bound. Read once per submission
/// at the edge; everything below takes it as a parameter.
pub fn current_year() -> i64 {
    i64::from(Utc::now().year())
}

fn reject(err: FieldError) -> FormError {
    tracing::warn!(field = %err.field, reason = ?err.reason, "form submission rejected");
    err.into()
}

/// Unwrap a field check, warning the sink and halting on failure.
fn accept<T>(check: FieldCheck<T>, sink: Option<&dyn NotificationSink>) -> Result<T, FormError> {
    match check.error {
        None => Ok(check.value),
        Some(err) => {
            if let Some(sink) = sink {
                sink.warning(&err.message);
            }
            Err(reject(err))
        }
    }
}

/// Validate a part form and build the record to persist.
///
/// Order: text rules, cost composite, year, odometer. `current_year` bounds
/// the model year; pass [`current_year()`] unless a test needs a fixed
/// clock.
pub fn submit_part(
    payload: &PartFormPayload,
    sink: Option<&dyn NotificationSink>,
    current_year: i64,
) -> Result<PartRecord, FormError> {
    payload.validate()?;

    let cost = validate_part_cost(
        &RawCostInput {
            price: RawInput::from(payload.price.as_deref()),
            shipping: RawInput::from(payload.shipping_cost.as_deref()),
            duties: RawInput::from(payload.import_duties.as_deref()),
        },
        sink,
    );
    if let Some(err) = cost.error {
        return Err(reject(err));
    }
    // is_valid implies the bundle is present.
    let Some(bundle) = cost.values else {
        return Err(reject(FieldError::not_a_number("Price")));
    };

    let year = accept(
        validate_year(&RawInput::from(payload.year.as_deref()), current_year),
        sink,
    )?;
    let odometer = accept(
        validate_odometer(&RawInput::from(payload.odometer_reading.as_deref())),
        sink,
    )?;

    tracing::debug!(name = %payload.name, total = bundle.total, "part form accepted");
    Ok(PartRecord {
        name: payload.name.clone(),
        vendor: payload.vendor.clone(),
        part_number: payload.part_number.clone(),
        price: bundle.price,
        shipping_cost: bundle.shipping,
        import_duties: bundle.duties,
        total_cost: bundle.total,
        year,
        odometer_reading: odometer,
        created_at: Utc::now(),
    })
}

/// Validate a budget form and build the record to persist.
pub fn submit_budget(
    payload: &BudgetFormPayload,
    sink: Option<&dyn NotificationSink>,
) -> Result<BudgetRecord, FormError> {
    payload.validate()?;

    let budget = validate_budget(&RawInput::from(payload.budget.as_deref()), sink);
    if let Some(err) = budget.error {
        return Err(reject(err));
    }

    tracing::debug!(project = %payload.project_name, budget = budget.value, "budget form accepted");
    Ok(BudgetRecord {
        project_name: payload.project_name.clone(),
        budget: budget.value,
        created_at: Utc::now(),
    })
}
