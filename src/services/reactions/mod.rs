//! Reactions service for Slack API.

use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::{flag, Params};
use crate::services::items::ItemRef;
use crate::types::UserId;
use serde::Serialize;
use tracing::instrument;

/// Request to add or remove a reaction
#[derive(Debug, Clone, Serialize)]
pub struct ReactionRequest {
    /// Emoji name, without colons
    pub name: String,
    /// Item reacted to
    #[serde(flatten)]
    pub item: ItemRef,
}

impl ReactionRequest {
    /// Create a new reaction request
    pub fn new(name: impl Into<String>, item: ItemRef) -> Self {
        Self {
            name: name.into().trim_matches(':').to_string(),
            item,
        }
    }
}

/// Request to get the reactions on an item
#[derive(Debug, Clone, Serialize)]
pub struct GetReactionsRequest {
    /// Item to inspect
    #[serde(flatten)]
    pub item: ItemRef,
    /// Return the complete reaction list
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub full: Option<bool>,
}

impl GetReactionsRequest {
    /// Create a new get request
    pub fn new(item: ItemRef) -> Self {
        Self { item, full: None }
    }

    /// Set full
    pub fn full(mut self, full: bool) -> Self {
        self.full = Some(full);
        self
    }
}

/// Request to list items reacted to by a user
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListReactionsRequest {
    /// User to list reactions for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
    /// Return the complete reaction list
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub full: Option<bool>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ListReactionsRequest {
    /// Create a new list request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user
    pub fn user(mut self, user: impl Into<UserId>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set full
    pub fn full(mut self, full: bool) -> Self {
        self.full = Some(full);
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

/// Reactions service
#[derive(Debug, Clone)]
pub struct ReactionsService {
    api: SlackApi,
}

impl ReactionsService {
    /// Create a new reactions service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// Add a reaction
    #[instrument(skip(self), fields(name = %request.name))]
    pub async fn add(&self, request: ReactionRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("reactions.add", Params::from_request(&request)?)
            .await
    }

    /// Remove a reaction
    #[instrument(skip(self), fields(name = %request.name))]
    pub async fn remove(&self, request: ReactionRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("reactions.remove", Params::from_request(&request)?)
            .await
    }

    /// Get the reactions on an item
    #[instrument(skip(self))]
    pub async fn get(&self, request: GetReactionsRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("reactions.get", Params::from_request(&request)?)
            .await
    }

    /// List items a user reacted to
    #[instrument(skip(self))]
    pub async fn list(&self, request: ListReactionsRequest) -> SlackResult<SlackResponse> {
        self.api
            .get("reactions.list", Params::from_request(&request)?)
            .await
    }
}
