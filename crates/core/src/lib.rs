//! Pure domain logic for the gearlog parts tracker.
//!
//! Everything in this crate is synchronous and free of I/O: no database
//! access, no network calls, no clock reads. Callers inject anything
//! time-dependent (e.g. the current year for model-year validation).

pub mod types;
pub mod validation;
