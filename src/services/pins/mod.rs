//! Pins service for Slack API.
//!
//! Provides methods for pinning and unpinning items in channels.

use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use crate::types::{ChannelId, FileId, Timestamp};
use serde::Serialize;
use tracing::instrument;

/// Request to pin or unpin an item in a channel
#[derive(Debug, Clone, Serialize)]
pub struct PinRequest {
    /// Channel to pin in
    pub channel: ChannelId,
    /// Message timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    /// File ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileId>,
    /// File comment ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_comment: Option<String>,
}

impl PinRequest {
    fn in_channel(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
            timestamp: None,
            file: None,
            file_comment: None,
        }
    }

    /// Pin a message
    pub fn message(channel: impl Into<ChannelId>, timestamp: impl Into<Timestamp>) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            ..Self::in_channel(channel)
        }
    }

    /// Pin a file
    pub fn file(channel: impl Into<ChannelId>, file: impl Into<FileId>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::in_channel(channel)
        }
    }

    /// Pin a file comment
    pub fn file_comment(channel: impl Into<ChannelId>, file_comment: impl Into<String>) -> Self {
        Self {
            file_comment: Some(file_comment.into()),
            ..Self::in_channel(channel)
        }
    }
}

/// Pins service
#[derive(Debug, Clone)]
pub struct PinsService {
    api: SlackApi,
}

impl PinsService {
    /// Create a new pins service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// List pinned items in a channel
    #[instrument(skip(self))]
    pub async fn list(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .get("pins.list", Params::new().set("channel", channel))
            .await
    }

    /// Pin an item
    #[instrument(skip(self), fields(channel = %request.channel))]
    pub async fn add(&self, request: PinRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("pins.add", Params::from_request(&request)?)
            .await
    }

    /// Unpin an item
    #[instrument(skip(self), fields(channel = %request.channel))]
    pub async fn remove(&self, request: PinRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("pins.remove", Params::from_request(&request)?)
            .await
    }
}
