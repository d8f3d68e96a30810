//! Groups service for Slack API.
//!
//! Private channels (`groups.*`). Takes the same list, history and create
//! arguments as the channels service.

use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use crate::services::channels::{CreateChannelRequest, HistoryRequest, ListChannelsRequest};
use crate::services::find_id_in;
use crate::types::{ChannelId, Timestamp, UserId};
use tracing::instrument;

/// Groups service
#[derive(Debug, Clone)]
pub struct GroupsService {
    api: SlackApi,
}

impl GroupsService {
    /// Create a new groups service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// List private channels
    #[instrument(skip(self))]
    pub async fn list(&self, request: ListChannelsRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("groups.list", Params::from_request(&request)?)
            .await
    }

    /// Get information about a private channel
    #[instrument(skip(self))]
    pub async fn info(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .get("groups.info", Params::new().set("channel", channel))
            .await
    }

    /// Fetch message history
    #[instrument(skip(self), fields(channel = %request.channel))]
    pub async fn history(&self, request: HistoryRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("groups.history", Params::from_request(&request)?)
            .await
    }

    /// Create a private channel
    #[instrument(skip(self), fields(name = %request.name))]
    pub async fn create(&self, request: CreateChannelRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("groups.create", Params::from_request(&request)?)
            .await
    }

    /// Invite a user
    #[instrument(skip(self))]
    pub async fn invite(&self, channel: &ChannelId, user: &UserId) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("user", user);
        self.api.post("groups.invite", params).await
    }

    /// Remove a user
    #[instrument(skip(self))]
    pub async fn kick(&self, channel: &ChannelId, user: &UserId) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("user", user);
        self.api.post("groups.kick", params).await
    }

    /// Leave a private channel
    #[instrument(skip(self))]
    pub async fn leave(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .post("groups.leave", Params::new().set("channel", channel))
            .await
    }

    /// Move the read cursor
    #[instrument(skip(self))]
    pub async fn mark(&self, channel: &ChannelId, ts: &Timestamp) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("ts", ts);
        self.api.post("groups.mark", params).await
    }

    /// Rename a private channel
    #[instrument(skip(self))]
    pub async fn rename(&self, channel: &ChannelId, name: &str) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("name", name);
        self.api.post("groups.rename", params).await
    }

    /// Archive a private channel
    #[instrument(skip(self))]
    pub async fn archive(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .post("groups.archive", Params::new().set("channel", channel))
            .await
    }

    /// Unarchive a private channel
    #[instrument(skip(self))]
    pub async fn unarchive(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .post("groups.unarchive", Params::new().set("channel", channel))
            .await
    }

    /// Open a private channel in the sidebar
    #[instrument(skip(self))]
    pub async fn open(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .post("groups.open", Params::new().set("channel", channel))
            .await
    }

    /// Close a private channel in the sidebar
    #[instrument(skip(self))]
    pub async fn close(&self, channel: &ChannelId) -> SlackResult<SlackResponse> {
        self.api
            .post("groups.close", Params::new().set("channel", channel))
            .await
    }

    /// Set the purpose
    #[instrument(skip(self, purpose))]
    pub async fn set_purpose(
        &self,
        channel: &ChannelId,
        purpose: &str,
    ) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("purpose", purpose);
        self.api.post("groups.setPurpose", params).await
    }

    /// Set the topic
    #[instrument(skip(self, topic))]
    pub async fn set_topic(&self, channel: &ChannelId, topic: &str) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("topic", topic);
        self.api.post("groups.setTopic", params).await
    }

    /// Look up a private channel ID by name, using `groups.list`
    #[instrument(skip(self))]
    pub async fn get_group_id(&self, name: &str) -> SlackResult<Option<ChannelId>> {
        let response = self.list(ListChannelsRequest::new()).await?;
        Ok(find_id_in(&response, "groups", name).map(ChannelId::from))
    }
}
