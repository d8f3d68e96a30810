//! Emoji service for Slack API.

use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use tracing::instrument;

/// Emoji service
#[derive(Debug, Clone)]
pub struct EmojiService {
    api: SlackApi,
}

impl EmojiService {
    /// Create a new emoji service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// List the team's custom emoji
    #[instrument(skip(self))]
    pub async fn list(&self) -> SlackResult<SlackResponse> {
        self.api.get("emoji.list", Params::new()).await
    }
}
