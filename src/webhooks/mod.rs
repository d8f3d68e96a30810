//! Incoming webhooks.
//!
//! An incoming webhook is a pre-authorised URL that accepts a JSON message.
//! It is not a Web API method: no token is sent and the answer is plain
//! text, not an envelope. The exchange still goes through the core so the
//! rate-limit policy applies.

use crate::api::SlackApi;
use crate::errors::{ConfigurationError, RequestError, SlackResult};
use crate::observability::redact_url;
use crate::transport::TransportRequest;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

/// Message payload for an incoming webhook.
///
/// Sent as a JSON body, so booleans stay JSON `true`/`false`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IncomingWebhookPayload {
    /// Message text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Block Kit blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<serde_json::Value>>,
    /// Legacy attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<serde_json::Value>>,
    /// Channel override, for legacy webhooks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Username override, for legacy webhooks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Icon emoji override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    /// Icon URL override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Thread timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
    /// Enable mrkdwn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrkdwn: Option<bool>,
    /// Unfurl links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_links: Option<bool>,
    /// Unfurl media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_media: Option<bool>,
}

impl IncomingWebhookPayload {
    /// Create a new payload with text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create a payload with blocks
    pub fn with_blocks(blocks: Vec<serde_json::Value>) -> Self {
        Self {
            blocks: Some(blocks),
            ..Self::default()
        }
    }

    /// Set text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set blocks
    pub fn blocks(mut self, blocks: Vec<serde_json::Value>) -> Self {
        self.blocks = Some(blocks);
        self
    }

    /// Set attachments
    pub fn attachments(mut self, attachments: Vec<serde_json::Value>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Set channel
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Set username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set icon emoji
    pub fn icon_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }

    /// Set icon URL
    pub fn icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Set thread
    pub fn thread_ts(mut self, ts: impl Into<String>) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }

    /// Set mrkdwn
    pub fn mrkdwn(mut self, enabled: bool) -> Self {
        self.mrkdwn = Some(enabled);
        self
    }

    /// Set unfurl_links
    pub fn unfurl_links(mut self, unfurl: bool) -> Self {
        self.unfurl_links = Some(unfurl);
        self
    }

    /// Set unfurl_media
    pub fn unfurl_media(mut self, unfurl: bool) -> Self {
        self.unfurl_media = Some(unfurl);
        self
    }
}

/// Posts messages to incoming webhooks
#[derive(Debug, Clone)]
pub struct IncomingWebhookService {
    api: SlackApi,
}

impl IncomingWebhookService {
    /// Create a new webhook service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// The configured webhook URL, if any
    pub fn url(&self) -> Option<&Url> {
        self.api.config().incoming_webhook_url.as_ref()
    }

    /// Post to the configured webhook URL.
    ///
    /// Fails with [`ConfigurationError::MissingWebhookUrl`] before any
    /// network call when no URL is configured.
    pub async fn post<T: Serialize + ?Sized>(&self, payload: &T) -> SlackResult<String> {
        let url = self
            .url()
            .cloned()
            .ok_or(ConfigurationError::MissingWebhookUrl)?;
        self.send(url.as_str(), payload).await
    }

    /// Post to an explicit webhook URL, ignoring the configured one
    pub async fn post_to<T: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &T,
    ) -> SlackResult<String> {
        let url = Url::parse(url).map_err(|e| ConfigurationError::InvalidUrl {
            url: redact_url(url),
            message: e.to_string(),
        })?;
        self.send(url.as_str(), payload).await
    }

    #[instrument(skip(self, payload), fields(url = %redact_url(url)))]
    async fn send<T: Serialize + ?Sized>(&self, url: &str, payload: &T) -> SlackResult<String> {
        let body = serde_json::to_value(payload).map_err(|e| RequestError::InvalidParams {
            message: e.to_string(),
        })?;

        let request =
            TransportRequest::json(url, body).with_timeout(self.api.config().timeout);
        let response = self.api.exchange(request).await?;

        debug!(body = %response.body, "Webhook accepted");
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_incoming_webhook_payload() {
        let payload = IncomingWebhookPayload::new("Hello, World!")
            .mrkdwn(true)
            .thread_ts("1234567890.123456");

        assert_eq!(payload.text.as_deref(), Some("Hello, World!"));
        assert_eq!(payload.mrkdwn, Some(true));
        assert_eq!(payload.thread_ts.as_deref(), Some("1234567890.123456"));
    }

    #[test]
    fn test_payload_omits_absent_fields() {
        let payload = IncomingWebhookPayload::with_blocks(vec![json!({"type": "divider"})])
            .username("deploy-bot");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"blocks": [{"type": "divider"}], "username": "deploy-bot"})
        );
    }

    #[test]
    fn test_payload_booleans_are_json() {
        let payload = IncomingWebhookPayload::new("hi")
            .mrkdwn(false)
            .unfurl_links(true);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"text": "hi", "mrkdwn": false, "unfurl_links": true})
        );
    }
}
