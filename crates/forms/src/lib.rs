//! Form-submission layer for the gearlog parts tracker.
//!
//! Bridges raw browser payloads (camelCase JSON, everything a string) and
//! the normalized snake_case records written to the backend service. The
//! numeric rules live in `gearlog-core`; this crate owns payload mapping,
//! the notification sinks, and the submit/halt workflow.

pub mod error;
pub mod payload;
pub mod sink;
pub mod submission;
