//! Team service for Slack API.
//!
//! Workspace information and audit logs (`team.*`). All methods are reads.

use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use crate::types::UserId;
use serde::Serialize;
use tracing::instrument;

/// Paging for log queries
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Page {
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Page {
    /// Request a given page
    pub fn new(count: u32, page: u32) -> Self {
        Self {
            count: Some(count),
            page: Some(page),
        }
    }
}

/// Request for integration logs
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrationLogsRequest {
    /// Filter by service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    /// Filter by app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Filter by the user who made the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
    /// Filter by change type (added, removed, enabled, disabled, updated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,
    /// Paging
    #[serde(flatten)]
    pub page: Page,
}

impl IntegrationLogsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by service ID
    pub fn service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }

    /// Filter by app ID
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Filter by user
    pub fn user(mut self, user: impl Into<UserId>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Filter by change type
    pub fn change_type(mut self, change_type: impl Into<String>) -> Self {
        self.change_type = Some(change_type.into());
        self
    }

    /// Set paging
    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

/// Team service
#[derive(Debug, Clone)]
pub struct TeamService {
    api: SlackApi,
}

impl TeamService {
    /// Create a new team service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// Get information about the team
    #[instrument(skip(self))]
    pub async fn info(&self) -> SlackResult<SlackResponse> {
        self.api.get("team.info", Params::new()).await
    }

    /// Get the access logs
    #[instrument(skip(self))]
    pub async fn access_logs(&self, page: Page) -> SlackResult<SlackResponse> {
        self.api
            .get("team.accessLogs", Params::from_request(&page)?)
            .await
    }

    /// Get billable information, for one user or everyone
    #[instrument(skip(self))]
    pub async fn billable_info(&self, user: Option<&UserId>) -> SlackResult<SlackResponse> {
        self.api
            .get("team.billableInfo", Params::new().set_opt("user", user))
            .await
    }

    /// Get the integration logs
    #[instrument(skip(self))]
    pub async fn integration_logs(
        &self,
        request: IntegrationLogsRequest,
    ) -> SlackResult<SlackResponse> {
        self.api
            .get("team.integrationLogs", Params::from_request(&request)?)
            .await
    }
}
