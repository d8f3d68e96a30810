//! Error types for the Slack client.
//!
//! Every failure is one of five distinguishable kinds: the HTTP exchange
//! failed, the body could not be decoded, Slack answered `ok: false`, the
//! client was asked to do something it is not configured for, or the
//! request itself could not be encoded.

use std::time::Duration;
use thiserror::Error;

/// Result type for Slack operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Root error type for the Slack client
#[derive(Error, Debug)]
pub enum SlackError {
    /// The HTTP exchange did not complete with a success status
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body is not a Slack envelope
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Slack answered with `ok: false`
    #[error("Slack API error: {0}")]
    Api(#[from] ApiError),

    /// A required resource is not configured
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The request could not be built
    #[error("Request error: {0}")]
    Request(#[from] RequestError),
}

impl SlackError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "SLACK_TRANSPORT",
            Self::Decode(_) => "SLACK_DECODE",
            Self::Api(_) => "SLACK_API",
            Self::Configuration(_) => "SLACK_CONFIG",
            Self::Request(_) => "SLACK_REQUEST",
        }
    }

    /// The Slack error string when Slack rejected the call
    pub fn api_error(&self) -> Option<&str> {
        match self {
            Self::Api(err) => Some(err.error()),
            _ => None,
        }
    }

    /// HTTP status of the failed exchange, if one was received
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Transport(TransportError::Status { status, .. }) => Some(*status),
            Self::Transport(TransportError::RateLimited { .. }) => Some(429),
            _ => None,
        }
    }

    /// Whether the call ended on an exhausted rate limit
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Transport(TransportError::RateLimited { .. }))
    }

    /// Server-advised wait carried by a final 429, if any
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Transport(TransportError::RateLimited { retry_after }) => *retry_after,
            _ => None,
        }
    }
}

/// Failures of the HTTP exchange itself
#[derive(Error, Debug)]
pub enum TransportError {
    /// Non-success status other than an exhausted rate limit
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Still rate limited after the retry budget was spent
    #[error("rate limited (retry after {retry_after:?})")]
    RateLimited {
        /// Wait advertised by the final 429, when present
        retry_after: Option<Duration>,
    },

    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Connection could not be established
    #[error("connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Any other failure reported by the HTTP client
    #[error("{0}")]
    Http(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            TransportError::Http(err.to_string())
        }
    }
}

/// Response body decoding errors
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Body is not valid JSON, or does not fit the requested type
    #[error("invalid JSON: {message}")]
    InvalidJson {
        /// Error message
        message: String,
    },

    /// Body has no boolean `ok` field
    #[error("missing 'ok' field in response")]
    MissingOkField,
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::InvalidJson {
            message: err.to_string(),
        }
    }
}

/// Application-level error: the envelope parsed but `ok` was false
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct ApiError {
    error: String,
}

impl ApiError {
    /// Create an API error from Slack's error string
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Slack's error string, verbatim (e.g. `not_authed`)
    pub fn error(&self) -> &str {
        &self.error
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Webhook post attempted without a webhook URL
    #[error("incoming webhook URL is not configured")]
    MissingWebhookUrl,

    /// URL could not be parsed
    #[error("invalid URL '{url}': {message}")]
    InvalidUrl {
        /// Offending URL
        url: String,
        /// Error message
        message: String,
    },

    /// Proxy could not be configured
    #[error("invalid proxy '{url}': {message}")]
    InvalidProxy {
        /// Offending proxy URL
        url: String,
        /// Error message
        message: String,
    },

    /// Timeout must be non-zero
    #[error("timeout must be greater than zero")]
    InvalidTimeout,

    /// Proxies cannot be applied to a caller-supplied HTTP client
    #[error("proxies cannot be combined with a shared HTTP client")]
    ProxyWithSharedClient,

    /// Environment variable error
    #[error("environment variable {name}: {message}")]
    EnvVar {
        /// Variable name
        name: String,
        /// Error message
        message: String,
    },

    /// HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Request building errors
#[derive(Error, Debug)]
pub enum RequestError {
    /// Parameters did not encode to a flat set of fields
    #[error("invalid parameters: {message}")]
    InvalidParams {
        /// Error message
        message: String,
    },

    /// Upload source could not be read
    #[error("cannot read '{path}': {message}")]
    File {
        /// File path
        path: String,
        /// Error message
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_slack_string_verbatim() {
        let err = SlackError::from(ApiError::new("not_authed"));
        assert_eq!(err.api_error(), Some("not_authed"));
        assert_eq!(err.error_code(), "SLACK_API");
        assert_eq!(ApiError::new("not_authed").to_string(), "not_authed");
    }

    #[test]
    fn test_http_status() {
        let err = SlackError::Transport(TransportError::Status {
            status: 503,
            body: String::new(),
        });
        assert_eq!(err.http_status(), Some(503));
        assert!(!err.is_rate_limited());

        let err = SlackError::Transport(TransportError::RateLimited {
            retry_after: Some(Duration::from_secs(7)),
        });
        assert_eq!(err.http_status(), Some(429));
        assert!(err.is_rate_limited());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(7)));

        assert_eq!(SlackError::Decode(DecodeError::MissingOkField).http_status(), None);
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(
            DecodeError::from(err),
            DecodeError::InvalidJson { .. }
        ));
    }

    #[test]
    fn test_configuration_error_display() {
        let err = SlackError::from(ConfigurationError::MissingWebhookUrl);
        assert_eq!(
            err.to_string(),
            "Configuration error: incoming webhook URL is not configured"
        );
        assert_eq!(err.api_error(), None);
    }
}
