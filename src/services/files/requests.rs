//! Request types for files service.

use crate::errors::{RequestError, SlackResult};
use crate::transport::FileUpload;
use crate::types::{ChannelId, FileId, Timestamp, UserId};
use serde::Serialize;
use std::path::Path;

/// Multipart part name Slack expects the file under
pub const FILE_FIELD: &str = "file";

/// Request to list files
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListFilesRequest {
    /// Only files created by this user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
    /// Only files in this channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelId>,
    /// Only files created after this Unix time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_from: Option<i64>,
    /// Only files created before this Unix time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_to: Option<i64>,
    /// Comma-separated file types (spaces, snippets, images, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ListFilesRequest {
    /// Create a new list request
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by user
    pub fn user(mut self, user: impl Into<UserId>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Filter by channel
    pub fn channel(mut self, channel: impl Into<ChannelId>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Set start of time range
    pub fn ts_from(mut self, ts: i64) -> Self {
        self.ts_from = Some(ts);
        self
    }

    /// Set end of time range
    pub fn ts_to(mut self, ts: i64) -> Self {
        self.ts_to = Some(ts);
        self
    }

    /// Filter by file types
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Set count
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set page
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Request for file info and its comments
#[derive(Debug, Clone, Serialize)]
pub struct FileInfoRequest {
    /// File ID
    pub file: FileId,
    /// Comments per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Comments page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl FileInfoRequest {
    /// Create a new info request
    pub fn new(file: impl Into<FileId>) -> Self {
        Self {
            file: file.into(),
            count: None,
            page: None,
        }
    }

    /// Set count
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set page
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Request to upload a file
#[derive(Debug, Clone, Serialize)]
pub struct UploadFileRequest {
    /// File content, sent as the `file` part
    #[serde(skip)]
    pub file: FileUpload,
    /// File type identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filetype: Option<String>,
    /// Filename shown in Slack
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Message posted along with the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_comment: Option<String>,
    /// Channels to share the file in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ChannelId>>,
    /// Thread to share the file in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<Timestamp>,
}

impl UploadFileRequest {
    /// Create an upload of an in-memory file
    pub fn new(file: FileUpload) -> Self {
        Self {
            file,
            filetype: None,
            filename: None,
            title: None,
            initial_comment: None,
            channels: None,
            thread_ts: None,
        }
    }

    /// Create an upload from bytes
    pub fn from_bytes(file_name: impl Into<String>, content: impl Into<bytes::Bytes>) -> Self {
        Self::new(FileUpload::new(FILE_FIELD, file_name, content))
    }

    /// Create an upload by reading a file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> SlackResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path)
            .await
            .map_err(|e| RequestError::File {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| FILE_FIELD.to_string());

        Ok(Self::from_bytes(file_name, content))
    }

    /// Set file type
    pub fn filetype(mut self, filetype: impl Into<String>) -> Self {
        self.filetype = Some(filetype.into());
        self
    }

    /// Set filename
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set initial comment
    pub fn initial_comment(mut self, comment: impl Into<String>) -> Self {
        self.initial_comment = Some(comment.into());
        self
    }

    /// Set channels to share in
    pub fn channels<I, C>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChannelId>,
    {
        self.channels = Some(channels.into_iter().map(Into::into).collect());
        self
    }

    /// Set thread timestamp
    pub fn thread_ts(mut self, ts: impl Into<Timestamp>) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }
}
