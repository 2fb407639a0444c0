// Error types surfaced by the simulation entry points.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftError {
    /// Settings outside the allowed enumerations or ranges. Raised before any
    /// simulation state is built.
    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },

    /// Settings JSON that does not have the expected shape at all.
    #[error("malformed settings: {0}")]
    MalformedSettings(#[from] serde_json::Error),
}

impl DraftError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        DraftError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
