//! Chat service implementation.

use super::*;
use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use crate::types::{ChannelId, Timestamp};
use tracing::instrument;

/// Chat service
#[derive(Debug, Clone)]
pub struct ChatService {
    api: SlackApi,
}

impl ChatService {
    /// Create a new chat service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// Post a message
    #[instrument(skip(self, request), fields(channel = %request.channel))]
    pub async fn post_message(&self, request: PostMessageRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("chat.postMessage", Params::from_request(&request)?)
            .await
    }

    /// Post a message only one user can see
    #[instrument(skip(self, request), fields(channel = %request.channel, user = %request.user))]
    pub async fn post_ephemeral(
        &self,
        request: PostEphemeralRequest,
    ) -> SlackResult<SlackResponse> {
        self.api
            .post("chat.postEphemeral", Params::from_request(&request)?)
            .await
    }

    /// Share a `/me` message
    #[instrument(skip(self, text))]
    pub async fn me_message(&self, channel: &ChannelId, text: &str) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("text", text);
        self.api.post("chat.meMessage", params).await
    }

    /// Update a message
    #[instrument(skip(self, request), fields(channel = %request.channel, ts = %request.ts))]
    pub async fn update(&self, request: UpdateMessageRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("chat.update", Params::from_request(&request)?)
            .await
    }

    /// Delete a message
    #[instrument(skip(self))]
    pub async fn delete(&self, channel: &ChannelId, ts: &Timestamp) -> SlackResult<SlackResponse> {
        let params = Params::new().set("channel", channel).set("ts", ts);
        self.api.post("chat.delete", params).await
    }

    /// Schedule a message
    #[instrument(skip(self, request), fields(channel = %request.channel, post_at = request.post_at))]
    pub async fn schedule_message(
        &self,
        request: ScheduleMessageRequest,
    ) -> SlackResult<SlackResponse> {
        self.api
            .post("chat.scheduleMessage", Params::from_request(&request)?)
            .await
    }

    /// Delete a scheduled message
    #[instrument(skip(self))]
    pub async fn delete_scheduled_message(
        &self,
        channel: &ChannelId,
        scheduled_message_id: &str,
    ) -> SlackResult<SlackResponse> {
        let params = Params::new()
            .set("channel", channel)
            .set("scheduled_message_id", scheduled_message_id);
        self.api.post("chat.deleteScheduledMessage", params).await
    }
}
