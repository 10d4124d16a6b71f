//! Form input validation engine.
//!
//! Field validators check a single raw value against one rule set and return
//! a structured [`result::FieldCheck`]; composite validators sequence field
//! validators over related fields (part cost, budget), short-circuit on the
//! first failure, and surface that failure through an optional
//! [`sink::NotificationSink`]. Validators never return `Err` — an invalid
//! input is a result, not a fault.

pub mod composite;
pub mod currency;
pub mod input;
pub mod integer;
pub mod result;
pub mod sink;
