//! IM service for Slack API.
//!
//! Direct message channels (`im.*`).

use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::{flag, Params};
use crate::services::channels::HistoryRequest;
use crate::types::{ChannelId, Timestamp, UserId};
use serde::Serialize;
use tracing::instrument;

/// Request to open a direct message channel
#[derive(Debug, Clone, Serialize)]
pub struct OpenImRequest {
    /// User to open a DM with
    pub user: UserId,
    /// Return the full IM object
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub return_im: Option<bool>,
}

impl OpenImRequest {
    /// Create a new open request
    pub fn new(user: impl Into<UserId>) -> Self {
        Self {
            user: user.into(),
            return_im: None,
        }
    }

    /// Set return_im
    pub fn return_im(mut self, return_im: bool) -> Self {
        self.return_im = Some(return_im);
        self
    }
}

/// IM service
#[derive(Debug, Clone)]
pub struct ImService {
    api: SlackApi,
}

impl ImService {
    /// Create a new IM service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// List direct message channels
    #[instrument(skip(self))]
    pub async fn list(&self) -> SlackResult<SlackResponse> {
        self.api.get("im.list", Params::new()).await
    }

    /// Fetch message history
    #[instrument(skip(self), fields(channel = %request.channel))]
    pub async fn history(&self, request: HistoryRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("im.history", Params::from_request(&request)?)
            .await
    }

    /// Open a direct message channel
    #[instrument(skip(self), fields(user = %request.user))]
    pub async fn open(&self, request: OpenImRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("im.open", Params::from_request(&request)?)
            .await
    }

    /// Close a direct message channel
    #[instrument(skip(self))]
    pub async fn close(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .post("im.close", Params::new().set("channel", channel))
            .await
    }

    /// Move the read cursor
    #[instrument(skip(self))]
    pub async fn mark(&self, channel: &ChannelId, ts: &Timestamp) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("ts", ts);
        self.api.post("im.mark", params).await
    }
}
