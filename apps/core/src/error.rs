use thiserror::Error;

/// Application-wide error type for the chat service and its configuration.
///
/// The local responder never produces one of these: an unmatched input resolves
/// to the fallback reply instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure talking to the remote chat backend.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote backend answered, but not with something usable.
    #[error("Chat backend error: {0}")]
    Backend(String),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}
