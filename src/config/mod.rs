//! Configuration management for the Slack client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::errors::{ConfigurationError, SlackError, SlackResult};
use crate::observability::redact_token;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Token type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Bot token (xoxb-*)
    Bot,
    /// User token (xoxp-*)
    User,
    /// App-level token (xapp-*)
    App,
    /// Legacy or unrecognised token
    Other,
}

impl TokenType {
    /// Detect token type from prefix
    pub fn from_token(token: &str) -> Self {
        if token.starts_with("xoxb-") {
            TokenType::Bot
        } else if token.starts_with("xoxp-") {
            TokenType::User
        } else if token.starts_with("xapp-") {
            TokenType::App
        } else {
            TokenType::Other
        }
    }
}

/// Secure wrapper for Slack tokens.
///
/// The token is opaque to the client; its prefix is only inspected for
/// diagnostics.
#[derive(Clone)]
pub struct SlackToken {
    token: SecretString,
    token_type: TokenType,
}

impl SlackToken {
    /// Create a new token
    pub fn new(token: impl Into<String>) -> Self {
        let token_str = token.into();
        let token_type = TokenType::from_token(&token_str);
        Self {
            token: SecretString::new(token_str),
            token_type,
        }
    }

    /// Get the token type
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Expose the token for use in requests
    pub(crate) fn expose(&self) -> &str {
        self.token.expose_secret()
    }
}

impl std::fmt::Debug for SlackToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SlackToken({:?}, {})",
            self.token_type,
            redact_token(self.expose())
        )
    }
}

/// Proxy settings keyed by scheme
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy for `http://` requests
    pub http: Option<Url>,
    /// Proxy for `https://` requests
    pub https: Option<Url>,
}

impl ProxyConfig {
    /// Whether any proxy is set
    pub fn is_empty(&self) -> bool {
        self.http.is_none() && self.https.is_none()
    }
}

/// Configuration for the Slack client
#[derive(Clone)]
pub struct SlackConfig {
    /// Token injected into every call; `None` makes anonymous calls
    pub(crate) token: Option<SlackToken>,
    /// Base URL for API requests
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// How many times a 429 is waited out before the final attempt
    pub rate_limit_retries: u32,
    /// Wait used when a 429 carries no `retry-after` header
    pub rate_limit_fallback: Duration,
    /// Proxy settings
    pub proxies: ProxyConfig,
    /// Incoming webhook URL
    pub incoming_webhook_url: Option<Url>,
    /// Shared connection pool reused across calls
    pub(crate) http_client: Option<reqwest::Client>,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("token", &self.token)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("rate_limit_retries", &self.rate_limit_retries)
            .field("rate_limit_fallback", &self.rate_limit_fallback)
            .field("proxies", &self.proxies)
            .field("incoming_webhook_url", &self.incoming_webhook_url.is_some())
            .field("shared_http_client", &self.http_client.is_some())
            .finish()
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_base_url(),
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            rate_limit_retries: crate::DEFAULT_RATE_LIMIT_RETRIES,
            rate_limit_fallback: Duration::from_secs(crate::RATE_LIMIT_FALLBACK_SECS),
            proxies: ProxyConfig::default(),
            incoming_webhook_url: None,
            http_client: None,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(crate::DEFAULT_BASE_URL).expect("default base URL is valid")
}

impl SlackConfig {
    /// Create a new configuration builder
    pub fn builder() -> SlackConfigBuilder {
        SlackConfigBuilder::new()
    }

    /// Create configuration from environment variables
    ///
    /// Reads:
    /// - `SLACK_TOKEN` - API token
    /// - `SLACK_BASE_URL` - API base URL
    /// - `SLACK_TIMEOUT` - request timeout in seconds
    /// - `SLACK_RATE_LIMIT_RETRIES` - how many 429s to wait out
    /// - `SLACK_INCOMING_WEBHOOK_URL` - incoming webhook URL
    /// - `SLACK_HTTP_PROXY` / `SLACK_HTTPS_PROXY` - proxies by scheme
    pub fn from_env() -> SlackResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SlackResult<Self> {
        let mut builder = SlackConfigBuilder::new();

        if let Some(token) = lookup("SLACK_TOKEN") {
            builder = builder.token(token);
        }

        if let Some(url) = lookup("SLACK_BASE_URL") {
            builder = builder.base_url(&url)?;
        }

        if let Some(timeout) = lookup("SLACK_TIMEOUT") {
            let secs = parse_env::<u64>("SLACK_TIMEOUT", &timeout)?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(retries) = lookup("SLACK_RATE_LIMIT_RETRIES") {
            builder = builder.rate_limit_retries(parse_env("SLACK_RATE_LIMIT_RETRIES", &retries)?);
        }

        if let Some(url) = lookup("SLACK_INCOMING_WEBHOOK_URL") {
            builder = builder.incoming_webhook_url(&url)?;
        }

        if let Some(proxy) = lookup("SLACK_HTTP_PROXY") {
            builder = builder.http_proxy(&proxy)?;
        }
        if let Some(proxy) = lookup("SLACK_HTTPS_PROXY") {
            builder = builder.https_proxy(&proxy)?;
        }

        builder.build()
    }

    /// Get the token if available
    pub fn token(&self) -> Option<&SlackToken> {
        self.token.as_ref()
    }

    /// Get the shared HTTP client if one was supplied
    pub fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }

    /// Build the full URL for an endpoint
    pub fn build_url(&self, endpoint: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> SlackResult<()> {
        if self.timeout.is_zero() {
            return Err(SlackError::Configuration(ConfigurationError::InvalidTimeout));
        }
        if self.http_client.is_some() && !self.proxies.is_empty() {
            return Err(SlackError::Configuration(
                ConfigurationError::ProxyWithSharedClient,
            ));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigurationError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigurationError::EnvVar {
        name: name.to_string(),
        message: e.to_string(),
    })
}

fn parse_url(url: &str) -> Result<Url, ConfigurationError> {
    Url::parse(url).map_err(|e| ConfigurationError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn parse_proxy(url: &str) -> Result<Url, ConfigurationError> {
    Url::parse(url).map_err(|e| ConfigurationError::InvalidProxy {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Builder for SlackConfig
#[derive(Default)]
pub struct SlackConfigBuilder {
    config: SlackConfig,
}

impl SlackConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: SlackConfig::default(),
        }
    }

    /// Set the token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(SlackToken::new(token));
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url = parse_url(url)?;
        Ok(self)
    }

    /// Set the timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set how many rate-limited responses are waited out
    pub fn rate_limit_retries(mut self, retries: u32) -> Self {
        self.config.rate_limit_retries = retries;
        self
    }

    /// Set the wait used when a 429 has no `retry-after`
    pub fn rate_limit_fallback(mut self, wait: Duration) -> Self {
        self.config.rate_limit_fallback = wait;
        self
    }

    /// Set the proxy for `http://` requests
    pub fn http_proxy(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.proxies.http = Some(parse_proxy(url)?);
        Ok(self)
    }

    /// Set the proxy for `https://` requests
    pub fn https_proxy(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.proxies.https = Some(parse_proxy(url)?);
        Ok(self)
    }

    /// Set the incoming webhook URL
    pub fn incoming_webhook_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.incoming_webhook_url = Some(parse_url(url)?);
        Ok(self)
    }

    /// Reuse an existing `reqwest::Client` (and its connection pool).
    ///
    /// The client's own proxy settings apply. Setting `http_proxy` or
    /// `https_proxy` as well fails validation.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.config.http_client = Some(client);
        self
    }

    /// Build the configuration
    pub fn build(self) -> SlackResult<SlackConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation (for testing)
    pub fn build_unchecked(self) -> SlackConfig {
        self.config
    }
}
