//! Search service for Slack API.

use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::{flag, Params};
use serde::Serialize;
use tracing::instrument;

/// Sort order for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Search request, shared by all `search.*` methods
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Search query
    pub query: String,
    /// Sort field (score, timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDirection>,
    /// Enable query highlight markers
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub highlight: Option<bool>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl SearchRequest {
    /// Create a new search request
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            sort: None,
            sort_dir: None,
            highlight: None,
            count: None,
            page: None,
        }
    }

    /// Set sort field
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set sort direction
    pub fn sort_dir(mut self, dir: SortDirection) -> Self {
        self.sort_dir = Some(dir);
        self
    }

    /// Enable highlighting
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = Some(highlight);
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

/// Search service
#[derive(Debug, Clone)]
pub struct SearchService {
    api: SlackApi,
}

impl SearchService {
    /// Create a new search service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// Search messages and files
    #[instrument(skip(self), fields(query = %request.query))]
    pub async fn all(&self, request: SearchRequest) -> SlackResult<SlackResponse> {
        self.search("search.all", request).await
    }

    /// Search files
    #[instrument(skip(self), fields(query = %request.query))]
    pub async fn files(&self, request: SearchRequest) -> SlackResult<SlackResponse> {
        self.search("search.files", request).await
    }

    /// Search messages
    #[instrument(skip(self), fields(query = %request.query))]
    pub async fn messages(&self, request: SearchRequest) -> SlackResult<SlackResponse> {
        self.search("search.messages", request).await
    }

    async fn search(&self, endpoint: &str, request: SearchRequest) -> SlackResult<SlackResponse> {
        self.api.get(endpoint, Params::from_request(&request)?).await
    }
}
