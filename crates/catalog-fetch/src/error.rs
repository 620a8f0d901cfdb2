//! Error types for catalog retrieval.

use catalog_model::ModelError;
use thiserror::Error;

/// Errors that can occur while retrieving the product catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("catalog API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body is not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The response is valid JSON but not an array of products.
    #[error("{0}")]
    NotAList(String),

    /// I/O error while reading a local catalog file.
    #[error("I/O error: {0}")]
    Io(String),
}

impl FetchError {
    /// Returns a user-friendly error message suitable for the terminal.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => {
                "Could not reach the catalog API. Please check your internet connection."
            }
            Self::Status { .. } => "The catalog API returned an error response.",
            Self::JsonParse(_) | Self::NotAList(_) => {
                "The catalog API returned an unexpected response."
            }
            Self::Io(_) => "Could not read the catalog file.",
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::JsonParse(_) | Self::NotAList(_) | Self::Io(_) => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Network(format!("request timed out: {err}"));
        }
        Self::Network(err.to_string())
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<ModelError> for FetchError {
    fn from(err: ModelError) -> Self {
        match &err {
            ModelError::Json(inner) => Self::JsonParse(inner.to_string()),
            ModelError::NotAList(_) => Self::NotAList(err.to_string()),
        }
    }
}

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = FetchError::Network("connection refused".to_string());
        assert!(err.user_message().contains("internet connection"));

        let err = FetchError::NotAList("expected a list of products, found null".to_string());
        assert!(err.user_message().contains("unexpected response"));
    }

    #[test]
    fn test_retryable() {
        assert!(FetchError::Network("timeout".to_string()).is_retryable());
        assert!(
            FetchError::Status {
                status: 503,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(
            !FetchError::Status {
                status: 404,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(!FetchError::JsonParse("eof".to_string()).is_retryable());
    }

    #[test]
    fn test_model_error_conversion() {
        let err = FetchError::from(ModelError::NotAList("an object"));
        assert_eq!(
            err.to_string(),
            "expected a list of products, found an object"
        );
    }
}
