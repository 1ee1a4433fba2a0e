//! Error types for the Datadog client.
//!
//! The taxonomy separates failures by where they originate:
//! - transport (`HttpError`, `Timeout`, `MaxRetriesExceeded`)
//! - HTTP status (`ApiError`, `Unauthorized`, `NotFound`)
//! - decoding, split into malformed JSON (`Syntax`) and well-formed JSON that
//!   does not fit the model (`Schema`, e.g. an unknown widget `type`)
//! - encoding (`Encode`)

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Credentials rejected (401/403).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Maximum retries exceeded; carries the last failure.
    #[error("Maximum retries exceeded ({0} attempts): {1}")]
    MaxRetriesExceeded(usize, Box<ClientError>),

    /// Payload is not valid JSON.
    #[error("Malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// Payload is valid JSON but does not match the expected shape.
    #[error("Schema mismatch: {0}")]
    Schema(String),

    /// Request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Classify a `serde_json` decode failure into `Syntax` or `Schema`.
    pub fn from_decode(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Self::Schema(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => Self::Syntax(err),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_connect() || e.is_timeout(),
            Self::Timeout(_) => true,
            Self::ApiError { status, .. } => Self::is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (rate limiting)
    /// - 502: Bad Gateway
    /// - 503: Service Unavailable
    /// - 504: Gateway Timeout
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error came from decoding a payload.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Syntax(_) | Self::Schema(_))
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_retryable() {
        let err = ClientError::Timeout(Duration::from_secs(1));
        assert!(err.is_retryable());

        let err = ClientError::Schema("unknown widget type `foo`".to_string());
        assert!(!err.is_retryable());

        let err = ClientError::ApiError {
            status: 503,
            url: "/v1/monitor".to_string(),
            message: "unavailable".to_string(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_is_retryable_status() {
        assert!(ClientError::is_retryable_status(429));
        assert!(ClientError::is_retryable_status(502));
        assert!(ClientError::is_retryable_status(503));
        assert!(ClientError::is_retryable_status(504));

        assert!(!ClientError::is_retryable_status(400));
        assert!(!ClientError::is_retryable_status(401));
        assert!(!ClientError::is_retryable_status(404));
        assert!(!ClientError::is_retryable_status(500));
        assert!(!ClientError::is_retryable_status(200));
    }

    #[test]
    fn test_from_decode_classifies_syntax() {
        let err = serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err();
        assert!(matches!(
            ClientError::from_decode(err),
            ClientError::Syntax(_)
        ));

        let err = serde_json::from_str::<serde_json::Value>("{not json}").unwrap_err();
        assert!(matches!(
            ClientError::from_decode(err),
            ClientError::Syntax(_)
        ));
    }

    #[test]
    fn test_from_decode_classifies_schema() {
        let err = serde_json::from_str::<u32>("\"text\"").unwrap_err();
        let classified = ClientError::from_decode(err);
        assert!(matches!(classified, ClientError::Schema(_)));
        assert!(classified.is_decode_error());
    }

    #[test]
    fn test_max_retries_display_includes_cause() {
        let err = ClientError::MaxRetriesExceeded(
            4,
            Box::new(ClientError::Timeout(Duration::from_secs(2))),
        );
        let message = err.to_string();
        assert!(message.contains("4 attempts"));
        assert!(message.contains("timed out"));
    }
}
