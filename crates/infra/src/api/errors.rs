//! API-specific error types
//!
//! Provides error classification for PayPal API operations with retry
//! metadata for callers that want to retry on their own.

use std::time::Duration;

use paypal_agreements_domain::{ErrorResponse, PaypalError};
use reqwest::StatusCode;
use thiserror::Error;

/// Categories of API errors for retry logic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403) - retry after token refresh
    Authentication,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx except auth) and rejected input - non-retryable
    Client,
    /// Network/connection errors - retryable
    Network,
    /// Configuration and decoding errors - non-retryable
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) | Self::InvalidInput(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) | Self::Decode(_) => ApiErrorCategory::Config,
        }
    }

    /// Check if this error should be retried
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::Authentication
                | ApiErrorCategory::RateLimit
                | ApiErrorCategory::Server
                | ApiErrorCategory::Network
        )
    }

    /// Get suggested retry delay in seconds
    pub fn retry_delay_secs(&self) -> u64 {
        match self.category() {
            ApiErrorCategory::Authentication => 5,  // Quick retry after token refresh
            ApiErrorCategory::RateLimit => 60,      // Wait for rate limit window
            ApiErrorCategory::Server => 10,         // Moderate delay for server issues
            ApiErrorCategory::Network => 5,         // Quick retry for network
            ApiErrorCategory::Client | ApiErrorCategory::Config => 0, // No retry
        }
    }
}

/// Convert transport-level domain errors into API errors
impl From<PaypalError> for ApiError {
    fn from(err: PaypalError) -> Self {
        match err {
            PaypalError::Network(message) => Self::Network(message),
            PaypalError::Auth(message) => Self::Auth(message),
            PaypalError::Config(message) => Self::Config(message),
            PaypalError::InvalidInput(message) => Self::InvalidInput(message),
            PaypalError::Serialization(message) => Self::Decode(message),
            PaypalError::Internal(message) => Self::Server(message),
        }
    }
}

/// Map a non-success HTTP status to an API error
///
/// When the body is a PayPal error document, its name, message, field issues
/// and debug id replace the raw body in the message.
pub(crate) fn status_error(status: StatusCode, url: &str, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|response| response.summary())
        .filter(|summary| !summary.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    let message = if detail.is_empty() {
        format!("{} returned status {}", url, status)
    } else {
        format!("{} returned status {}: {}", url, status, detail)
    };

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        ApiError::Auth(message)
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        ApiError::RateLimit(message)
    } else if status.is_server_error() {
        ApiError::Server(message)
    } else if status.is_client_error() {
        ApiError::Client(message)
    } else {
        ApiError::Network(message)
    }
}
