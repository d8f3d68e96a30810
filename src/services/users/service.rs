//! Users service implementation.

use super::*;
use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use crate::services::find_id_in;
use crate::types::UserId;
use tracing::instrument;

/// Users service
#[derive(Debug, Clone)]
pub struct UsersService {
    api: SlackApi,
}

impl UsersService {
    /// Create a new users service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// List users
    #[instrument(skip(self))]
    pub async fn list(&self, request: ListUsersRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("users.list", Params::from_request(&request)?)
            .await
    }

    /// Get information about a user
    #[instrument(skip(self))]
    pub async fn info(&self, user: &UserId) -> SlackResult<SlackResponse> {
        self.api
            .get("users.info", Params::new().set("user", user))
            .await
    }

    /// Get a user's presence
    #[instrument(skip(self))]
    pub async fn get_presence(&self, user: &UserId) -> SlackResult<SlackResponse> {
        self.api
            .get("users.getPresence", Params::new().set("user", user))
            .await
    }

    /// Mark the authed user as active
    #[instrument(skip(self))]
    pub async fn set_active(&self) -> SlackResult<SlackResponse> {
        self.api.post("users.setActive", Params::new()).await
    }

    /// Set the authed user's presence
    #[instrument(skip(self))]
    pub async fn set_presence(&self, presence: Presence) -> SlackResult<SlackResponse> {
        self.api
            .post(
                "users.setPresence",
                Params::new().set("presence", presence.as_str()),
            )
            .await
    }

    /// Look up a user ID by name, using `users.list`
    #[instrument(skip(self))]
    pub async fn get_user_id(&self, name: &str) -> SlackResult<Option<UserId>> {
        let response = self.list(ListUsersRequest::new()).await?;
        Ok(find_id_in(&response, "members", name).map(UserId::from))
    }
}
