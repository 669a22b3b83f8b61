// src/error.rs
// Standardized error types for simcheck

use thiserror::Error;

/// Main error type for the simcheck library
#[derive(Error, Debug)]
pub enum SimcheckError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("reference unavailable: {0}")]
    ReferenceUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown error: {0}")]
    Other(String),
}

/// Convenience type alias for Result using SimcheckError
pub type Result<T> = std::result::Result<T, SimcheckError>;

impl SimcheckError {
    /// True for the failure kind callers must not conflate with a 0.0 score
    pub fn is_reference_unavailable(&self) -> bool {
        matches!(
            self,
            SimcheckError::ReferenceUnavailable(_)
                | SimcheckError::Io(_)
                | SimcheckError::Http(_)
        )
    }
}

impl From<String> for SimcheckError {
    fn from(s: String) -> Self {
        SimcheckError::Other(s)
    }
}

impl From<SimcheckError> for String {
    fn from(err: SimcheckError) -> Self {
        err.to_string()
    }
}
