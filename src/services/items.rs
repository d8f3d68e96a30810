//! Item references shared by stars, pins and reactions.

use crate::types::{ChannelId, FileId, Timestamp};
use serde::Serialize;

/// The item a star, pin or reaction applies to.
///
/// Slack identifies it by exactly one of: a message (`channel` + `timestamp`),
/// a file, a file comment, or a whole channel.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ItemRef {
    /// Channel of the message, or the starred channel itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelId>,
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

impl ItemRef {
    /// A message in a channel
    pub fn message(channel: impl Into<ChannelId>, timestamp: impl Into<Timestamp>) -> Self {
        Self {
            channel: Some(channel.into()),
            timestamp: Some(timestamp.into()),
            ..Self::default()
        }
    }

    /// A file
    pub fn file(file: impl Into<FileId>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::default()
        }
    }

    /// A comment on a file
    pub fn file_comment(file_comment: impl Into<String>) -> Self {
        Self {
            file_comment: Some(file_comment.into()),
            ..Self::default()
        }
    }

    /// A channel
    pub fn channel(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: Some(channel.into()),
            ..Self::default()
        }
    }
}
