//! Request types for chat service.
//!
//! Attachments and blocks are passed through as JSON values and sent as JSON
//! text; the client does not model their structure.

use crate::params::flag;
use crate::types::{ChannelId, Timestamp, UserId};
use serde::Serialize;
use serde_json::Value;

/// Request to post a message
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest {
    /// Channel, private group, or IM to send to
    pub channel: ChannelId,
    /// Message text
    pub text: String,
    /// Bot username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Post as the authed user
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub as_user: Option<bool>,
    /// Parse mode (full, none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<String>,
    /// Find and link channel names and usernames
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_names: Option<bool>,
    /// Legacy attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Value>>,
    /// Block Kit blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Value>>,
    /// Enable link unfurling
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub unfurl_links: Option<bool>,
    /// Enable media unfurling
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub unfurl_media: Option<bool>,
    /// Bot icon URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Bot icon emoji
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    /// Thread timestamp to reply to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<Timestamp>,
    /// Broadcast a thread reply to the channel
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub reply_broadcast: Option<bool>,
    /// Disable markdown formatting
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub mrkdwn: Option<bool>,
}

impl PostMessageRequest {
    /// Create a new message request
    pub fn new(channel: impl Into<ChannelId>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            username: None,
            as_user: None,
            parse: None,
            link_names: None,
            attachments: None,
            blocks: None,
            unfurl_links: None,
            unfurl_media: None,
            icon_url: None,
            icon_emoji: None,
            thread_ts: None,
            reply_broadcast: None,
            mrkdwn: None,
        }
    }

    /// Set custom username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Post as the authed user
    pub fn as_user(mut self, as_user: bool) -> Self {
        self.as_user = Some(as_user);
        self
    }

    /// Set parse mode
    pub fn parse(mut self, mode: impl Into<String>) -> Self {
        self.parse = Some(mode.into());
        self
    }

    /// Enable/disable name linking
    pub fn link_names(mut self, link: bool) -> Self {
        self.link_names = Some(link);
        self
    }

    /// Set attachments
    pub fn attachments(mut self, attachments: Vec<Value>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Set blocks
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.blocks = Some(blocks);
        self
    }

    /// Enable/disable link unfurling
    pub fn unfurl_links(mut self, unfurl: bool) -> Self {
        self.unfurl_links = Some(unfurl);
        self
    }

    /// Enable/disable media unfurling
    pub fn unfurl_media(mut self, unfurl: bool) -> Self {
        self.unfurl_media = Some(unfurl);
        self
    }

    /// Set icon URL
    pub fn icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Set icon emoji
    pub fn icon_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }

    /// Reply in a thread
    pub fn thread_ts(mut self, ts: impl Into<Timestamp>) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }

    /// Broadcast reply to channel
    pub fn reply_broadcast(mut self, broadcast: bool) -> Self {
        self.reply_broadcast = Some(broadcast);
        self
    }

    /// Enable/disable markdown
    pub fn mrkdwn(mut self, mrkdwn: bool) -> Self {
        self.mrkdwn = Some(mrkdwn);
        self
    }
}

/// Request to post an ephemeral message
#[derive(Debug, Clone, Serialize)]
pub struct PostEphemeralRequest {
    /// Channel to post in
    pub channel: ChannelId,
    /// User who will see the message
    pub user: UserId,
    /// Message text
    pub text: String,
    /// Post as the authed user
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub as_user: Option<bool>,
    /// Legacy attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Value>>,
    /// Block Kit blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Value>>,
    /// Find and link channel names and usernames
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_names: Option<bool>,
    /// Parse mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<String>,
    /// Thread timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<Timestamp>,
}

impl PostEphemeralRequest {
    /// Create a new ephemeral message request
    pub fn new(
        channel: impl Into<ChannelId>,
        user: impl Into<UserId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            channel: channel.into(),
            user: user.into(),
            text: text.into(),
            as_user: None,
            attachments: None,
            blocks: None,
            link_names: None,
            parse: None,
            thread_ts: None,
        }
    }

    /// Post as the authed user
    pub fn as_user(mut self, as_user: bool) -> Self {
        self.as_user = Some(as_user);
        self
    }

    /// Set attachments
    pub fn attachments(mut self, attachments: Vec<Value>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Set blocks
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.blocks = Some(blocks);
        self
    }

    /// Enable/disable name linking
    pub fn link_names(mut self, link: bool) -> Self {
        self.link_names = Some(link);
        self
    }

    /// Set parse mode
    pub fn parse(mut self, mode: impl Into<String>) -> Self {
        self.parse = Some(mode.into());
        self
    }

    /// Set thread timestamp
    pub fn thread_ts(mut self, ts: impl Into<Timestamp>) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }
}

/// Request to update a message
#[derive(Debug, Clone, Serialize)]
pub struct UpdateMessageRequest {
    /// Channel containing the message
    pub channel: ChannelId,
    /// Message timestamp
    pub ts: Timestamp,
    /// New text
    pub text: String,
    /// New attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Value>>,
    /// New blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Value>>,
    /// Update as the authed user
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub as_user: Option<bool>,
    /// Find and link channel names and usernames
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_names: Option<bool>,
    /// Parse mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<String>,
}

impl UpdateMessageRequest {
    /// Create a new update request
    pub fn new(
        channel: impl Into<ChannelId>,
        ts: impl Into<Timestamp>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            channel: channel.into(),
            ts: ts.into(),
            text: text.into(),
            attachments: None,
            blocks: None,
            as_user: None,
            link_names: None,
            parse: None,
        }
    }

    /// Set attachments
    pub fn attachments(mut self, attachments: Vec<Value>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Set blocks
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.blocks = Some(blocks);
        self
    }

    /// Update as the authed user
    pub fn as_user(mut self, as_user: bool) -> Self {
        self.as_user = Some(as_user);
        self
    }

    /// Enable/disable name linking
    pub fn link_names(mut self, link: bool) -> Self {
        self.link_names = Some(link);
        self
    }

    /// Set parse mode
    pub fn parse(mut self, mode: impl Into<String>) -> Self {
        self.parse = Some(mode.into());
        self
    }
}

/// Request to schedule a message
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleMessageRequest {
    /// Channel to post to
    pub channel: ChannelId,
    /// Unix timestamp for when to post
    pub post_at: i64,
    /// Message text
    pub text: String,
    /// Legacy attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Value>>,
    /// Block Kit blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Value>>,
    /// Thread timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<Timestamp>,
    /// Broadcast a thread reply to the channel
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub reply_broadcast: Option<bool>,
}

impl ScheduleMessageRequest {
    /// Create a new schedule request
    pub fn new(channel: impl Into<ChannelId>, post_at: i64, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            post_at,
            text: text.into(),
            attachments: None,
            blocks: None,
            thread_ts: None,
            reply_broadcast: None,
        }
    }

    /// Schedule for a point in time
    pub fn at(
        channel: impl Into<ChannelId>,
        when: chrono::DateTime<chrono::Utc>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(channel, when.timestamp(), text)
    }

    /// Set attachments
    pub fn attachments(mut self, attachments: Vec<Value>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Set blocks
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.blocks = Some(blocks);
        self
    }

    /// Set thread timestamp
    pub fn thread_ts(mut self, ts: impl Into<Timestamp>) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }

    /// Broadcast reply to channel
    pub fn reply_broadcast(mut self, broadcast: bool) -> Self {
        self.reply_broadcast = Some(broadcast);
        self
    }
}
