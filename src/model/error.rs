//! Error types for the reposcout application.
//!
//! A small hierarchical taxonomy built on `thiserror`:
//!
//! - [`AppError`] - top-level error returned from application entry points
//!   - [`ApiError`] - search API failures (transport, status, decode)
//!   - [`crate::config::ConfigError`] - config file problems
//!   - `std::io::Error` - terminal failures
//!
//! The UI layer deliberately flattens fetch failures into a single display
//! string on the view-model (the store holds one undifferentiated error
//! value); the structured variants below exist for logging and exit paths.

use thiserror::Error;

// ===== AppError =====

/// Top-level application error encompassing all failure modes.
///
/// Domain errors convert via `From`, so `?` composes cleanly from startup
/// code through to `main`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Search API request failed. Only reaches this level from startup
    /// paths; once the UI is running, fetch failures surface on the
    /// view-model instead of propagating here.
    #[error("Search request failed: {0}")]
    Api(#[from] ApiError),

    /// Configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error. Fatal; the terminal is restored
    /// before the message is printed to stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

// ===== ApiError =====

/// Errors surfaced by the search API client.
///
/// Distinguishes the cases a user can act on: being rate limited reads very
/// differently from a DNS failure or a malformed response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, TLS, connect, timeout.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the request with a rate-limit response.
    /// Unauthenticated search allows only a handful of requests per minute.
    #[error("Rate limited by the search API (retry after {retry_after_secs:?} seconds)")]
    RateLimited {
        /// Server-suggested wait, when the `Retry-After` header was present.
        retry_after_secs: Option<u64>,
    },

    /// Any other non-success HTTP status.
    #[error("Search API returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, or the canonical reason.
        message: String,
    },

    /// The response body did not match the expected search schema.
    #[error("Malformed search response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_display_includes_retry_hint() {
        let err = ApiError::RateLimited {
            retry_after_secs: Some(42),
        };
        let msg = err.to_string();
        assert!(msg.contains("Rate limited"));
        assert!(msg.contains("42"));
    }

    #[test]
    fn status_display_includes_code_and_message() {
        let err = ApiError::Status {
            status: 422,
            message: "Validation Failed".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("Validation Failed"));
    }

    #[test]
    fn decode_display() {
        let err = ApiError::Decode("missing field `items`".to_string());
        assert!(err.to_string().contains("missing field `items`"));
    }

    #[test]
    fn app_error_from_api_error() {
        let api = ApiError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        let app: AppError = api.into();
        let msg = app.to_string();
        assert!(msg.contains("Search request failed"));
        assert!(msg.contains("503"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broken");
        let app: AppError = io.into();
        let msg = app.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }
}
