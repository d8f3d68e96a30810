//! Channels service implementation.

use super::*;
use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use crate::services::find_id_in;
use crate::types::{ChannelId, Timestamp, UserId};
use tracing::instrument;

/// Channels service
#[derive(Debug, Clone)]
pub struct ChannelsService {
    api: SlackApi,
}

impl ChannelsService {
    /// Create a new channels service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// Get information about a channel
    #[instrument(skip(self))]
    pub async fn info(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .get("channels.info", Params::new().set("channel", channel))
            .await
    }

    /// List channels
    #[instrument(skip(self))]
    pub async fn list(&self, request: ListChannelsRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("channels.list", Params::from_request(&request)?)
            .await
    }

    /// Fetch message history
    #[instrument(skip(self), fields(channel = %request.channel))]
    pub async fn history(&self, request: HistoryRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("channels.history", Params::from_request(&request)?)
            .await
    }

    /// Create a channel
    #[instrument(skip(self), fields(name = %request.name))]
    pub async fn create(&self, request: CreateChannelRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("channels.create", Params::from_request(&request)?)
            .await
    }

    /// Join a channel by name, creating it if needed
    #[instrument(skip(self))]
    pub async fn join(&self, name: &str) -> SlackResult<SlackResponse> {
        self.api
            .post("channels.join", Params::new().set("name", name))
            .await
    }

    /// Leave a channel
    #[instrument(skip(self))]
    pub async fn leave(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .post("channels.leave", Params::new().set("channel", channel))
            .await
    }

    /// Invite a user to a channel
    #[instrument(skip(self))]
    pub async fn invite(&self, channel: &ChannelId, user: &UserId) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("user", user);
        self.api.post("channels.invite", params).await
    }

    /// Remove a user from a channel
    #[instrument(skip(self))]
    pub async fn kick(&self, channel: &ChannelId, user: &UserId) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("user", user);
        self.api.post("channels.kick", params).await
    }

    /// Move the read cursor
    #[instrument(skip(self))]
    pub async fn mark(&self, channel: &ChannelId, ts: &Timestamp) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("ts", ts);
        self.api.post("channels.mark", params).await
    }

    /// Rename a channel
    #[instrument(skip(self))]
    pub async fn rename(&self, channel: &ChannelId, name: &str) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("name", name);
        self.api.post("channels.rename", params).await
    }

    /// Archive a channel
    #[instrument(skip(self))]
    pub async fn archive(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .post("channels.archive", Params::new().set("channel", channel))
            .await
    }

    /// Unarchive a channel
    #[instrument(skip(self))]
    pub async fn unarchive(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .post("channels.unarchive", Params::new().set("channel", channel))
            .await
    }

    /// Set the channel purpose
    #[instrument(skip(self, purpose))]
    pub async fn set_purpose(
        &self,
        channel: &ChannelId,
        purpose: &str,
    ) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("purpose", purpose);
        self.api.post("channels.setPurpose", params).await
    }

    /// Set the channel topic
    #[instrument(skip(self, topic))]
    pub async fn set_topic(&self, channel: &ChannelId, topic: &str) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("topic", topic);
        self.api.post("channels.setTopic", params).await
    }

    /// Look up a channel ID by name, using `channels.list`
    #[instrument(skip(self))]
    pub async fn get_channel_id(&self, name: &str) -> SlackResult<Option<ChannelId>> {
        let response = self.list(ListChannelsRequest::new()).await?;
        Ok(find_id_in(&response, "channels", name).map(ChannelId::from))
    }
}
