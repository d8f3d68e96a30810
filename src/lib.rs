//! Slack Web API client
//!
//! One method per Web API endpoint, grouped by resource family:
//! - Token injection, GET/POST/multipart request building
//! - Bounded retry on `429 Too Many Requests`
//! - The `{"ok": ..., "error": ...}` envelope turned into `Result`
//! - Incoming webhook posting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slacker::services::chat::PostMessageRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from environment
//!     let client = slacker::create_client_from_env()?;
//!
//!     // Post a message
//!     let response = client
//!         .chat()
//!         .post_message(PostMessageRequest::new("#general", "Hello, Slack!"))
//!         .await?;
//!
//!     println!("Message posted: {:?}", response.get("ts"));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod params;
pub mod transport;
pub mod types;

// Services
pub mod services;
pub mod webhooks;

// Resilience
pub mod resilience;

// Observability
pub mod observability;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::SlackClient;
pub use config::{SlackConfig, SlackConfigBuilder};
pub use envelope::SlackResponse;
pub use errors::{SlackError, SlackResult};
pub use params::Params;

/// Default base URL for Slack API
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of rate-limited responses waited out
pub const DEFAULT_RATE_LIMIT_RETRIES: u32 = 0;

/// Wait in seconds when a 429 carries no `retry-after`
pub const RATE_LIMIT_FALLBACK_SECS: u64 = 20;

/// Create a Slack client with the given configuration
pub fn create_client(config: SlackConfig) -> SlackResult<SlackClient> {
    SlackClient::new(config)
}

/// Create a Slack client from environment variables
///
/// Reads:
/// - `SLACK_TOKEN` - API token (any kind)
/// - `SLACK_BASE_URL` - API base URL
/// - `SLACK_TIMEOUT` - Request timeout in seconds
/// - `SLACK_RATE_LIMIT_RETRIES` - Rate-limit retry budget
/// - `SLACK_INCOMING_WEBHOOK_URL` - Incoming webhook URL
/// - `SLACK_HTTP_PROXY`, `SLACK_HTTPS_PROXY` - Proxies
pub fn create_client_from_env() -> SlackResult<SlackClient> {
    let config = SlackConfig::from_env()?;
    create_client(config)
}
