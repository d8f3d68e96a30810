//! Request types for channels service.

use crate::params::flag;
use crate::types::{ChannelId, Timestamp};
use serde::Serialize;

/// Request to list channels or groups
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListChannelsRequest {
    /// Leave archived channels out
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclude_archived: Option<bool>,
    /// Leave member lists out
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclude_members: Option<bool>,
    /// Maximum number of items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Pagination cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl ListChannelsRequest {
    /// Create a new list request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to exclude archived channels
    pub fn exclude_archived(mut self, exclude: bool) -> Self {
        self.exclude_archived = Some(exclude);
        self
    }

    /// Set whether to exclude members
    pub fn exclude_members(mut self, exclude: bool) -> Self {
        self.exclude_members = Some(exclude);
        self
    }

    /// Set limit
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set cursor
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// Request to fetch message history of a channel, group or IM
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// End of time range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<Timestamp>,
    /// Start of time range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest: Option<Timestamp>,
    /// Include messages at `latest` and `oldest`
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub inclusive: Option<bool>,
    /// Number of messages to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Include `unread_count_display`
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub unreads: Option<bool>,
}

impl HistoryRequest {
    /// Create a new history request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
            latest: None,
            oldest: None,
            inclusive: None,
            count: None,
            unreads: None,
        }
    }

    /// Set latest timestamp
    pub fn latest(mut self, ts: impl Into<Timestamp>) -> Self {
        self.latest = Some(ts.into());
        self
    }

    /// Set oldest timestamp
    pub fn oldest(mut self, ts: impl Into<Timestamp>) -> Self {
        self.oldest = Some(ts.into());
        self
    }

    /// Set inclusive
    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = Some(inclusive);
        self
    }

    /// Set count
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set unreads
    pub fn unreads(mut self, unreads: bool) -> Self {
        self.unreads = Some(unreads);
        self
    }
}

/// Request to create a channel or group
#[derive(Debug, Clone, Serialize)]
pub struct CreateChannelRequest {
    /// Channel name
    pub name: String,
    /// Fail instead of adjusting an invalid name
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub validate: Option<bool>,
}

impl CreateChannelRequest {
    /// Create a new request
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validate: None,
        }
    }

    /// Set validate
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = Some(validate);
        self
    }
}
