//! User groups service implementation.

use super::*;
use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use crate::types::UsergroupId;
use tracing::instrument;

/// User groups service
#[derive(Debug, Clone)]
pub struct UsergroupsService {
    api: SlackApi,
}

impl UsergroupsService {
    /// Create a new user groups service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// List user groups
    #[instrument(skip(self))]
    pub async fn list(&self, request: ListUsergroupsRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("usergroups.list", Params::from_request(&request)?)
            .await
    }

    /// Create a user group
    #[instrument(skip(self), fields(name = %request.name))]
    pub async fn create(&self, request: CreateUsergroupRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("usergroups.create", Params::from_request(&request)?)
            .await
    }

    /// Update a user group
    #[instrument(skip(self), fields(usergroup = %request.usergroup))]
    pub async fn update(&self, request: UpdateUsergroupRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("usergroups.update", Params::from_request(&request)?)
            .await
    }

    /// Enable a user group
    #[instrument(skip(self))]
    pub async fn enable(&self, usergroup: &UsergroupId) -> SlackResult<SlackResponse> {
        self.api
            .post("usergroups.enable", Params::new().set("usergroup", usergroup))
            .await
    }

    /// Disable a user group
    #[instrument(skip(self))]
    pub async fn disable(&self, usergroup: &UsergroupId) -> SlackResult<SlackResponse> {
        self.api
            .post("usergroups.disable", Params::new().set("usergroup", usergroup))
            .await
    }

    /// List the members of a user group
    #[instrument(skip(self))]
    pub async fn users_list(
        &self,
        usergroup: &UsergroupId,
        include_disabled: Option<bool>,
    ) -> SlackResult<SlackResponse> {
        let params = Params::new()
            .set("usergroup", usergroup)
            .set_opt("include_disabled", include_disabled.map(u8::from));
        self.api.get("usergroups.users.list", params).await
    }

    /// Replace the members of a user group
    #[instrument(skip(self), fields(usergroup = %request.usergroup, users = request.users.len()))]
    pub async fn users_update(
        &self,
        request: UpdateUsergroupUsersRequest,
    ) -> SlackResult<SlackResponse> {
        self.api
            .post("usergroups.users.update", Params::from_request(&request)?)
            .await
    }
}
