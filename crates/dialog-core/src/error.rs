//! Error Types

use thiserror::Error;

/// Result type alias for dialog operations
pub type Result<T> = std::result::Result<T, DialogError>;

/// Errors raised at the code-hook boundary
///
/// Slot validation failures are not errors: they come back as an
/// `ElicitSlot` response and are part of normal dialog flow.
#[derive(Error, Debug)]
pub enum DialogError {
    /// No handler is registered for the intent
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    /// The inbound event could not be read as a code-hook request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DialogError {
    /// Stable machine-readable code for the platform boundary
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedIntent(_) => "UNSUPPORTED_INTENT",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Json(_) => "SERIALIZATION_ERROR",
        }
    }
}
