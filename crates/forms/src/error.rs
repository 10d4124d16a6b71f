//! Submission error type.

use gearlog_core::validation::result::FieldError;

/// Why a form submission was halted.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A numeric field failed validation; the message is the same text the
    /// notification sink received.
    #[error("{message}")]
    Rejected { field: String, message: String },

    /// A text field broke a declarative rule (length, required).
    #[error(transparent)]
    Invalid(#[from] validator::ValidationErrors),
}

impl From<FieldError> for FormError {
    fn from(err: FieldError) -> Self {
        FormError::Rejected {
            field: err.field,
            message: err.message,
        }
    }
}
