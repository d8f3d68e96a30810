//! Stars service for Slack API.

use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use crate::services::items::ItemRef;
use crate::types::UserId;
use serde::Serialize;
use tracing::instrument;

/// Request to list starred items
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListStarsRequest {
    /// Show stars of this user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ListStarsRequest {
    /// Create a new list request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user
    pub fn user(mut self, user: impl Into<UserId>) -> Self {
        self.user = Some(user.into());
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

/// Stars service
#[derive(Debug, Clone)]
pub struct StarsService {
    api: SlackApi,
}

impl StarsService {
    /// Create a new stars service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// List starred items
    #[instrument(skip(self))]
    pub async fn list(&self, request: ListStarsRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("stars.list", Params::from_request(&request)?)
            .await
    }

    /// Star an item
    #[instrument(skip(self))]
    pub async fn add(&self, item: ItemRef) -> SlackResult<SlackResponse> {
        self.api
            .post("stars.add", Params::from_request(&item)?)
            .await
    }

    /// Remove a star
    #[instrument(skip(self))]
    pub async fn remove(&self, item: ItemRef) -> SlackResult<SlackResponse> {
        self.api
            .post("stars.remove", Params::from_request(&item)?)
            .await
    }
}
