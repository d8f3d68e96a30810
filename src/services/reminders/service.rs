//! Reminders service implementation.

use super::*;
use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use crate::types::ReminderId;
use tracing::instrument;

/// Reminders service
#[derive(Debug, Clone)]
pub struct RemindersService {
    api: SlackApi,
}

impl RemindersService {
    /// Create a new reminders service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// Create a reminder
    #[instrument(skip(self, request), fields(time = %request.time))]
    pub async fn add(&self, request: AddReminderRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("reminders.add", Params::from_request(&request)?)
            .await
    }

    /// Mark a reminder as complete
    #[instrument(skip(self))]
    pub async fn complete(&self, reminder: &ReminderId) -> SlackResult<SlackResponse> {
        self.api
            .post("reminders.complete", Params::new().set("reminder", reminder))
            .await
    }

    /// Delete a reminder
    #[instrument(skip(self))]
    pub async fn delete(&self, reminder: &ReminderId) -> SlackResult<SlackResponse> {
        self.api
            .post("reminders.delete", Params::new().set("reminder", reminder))
            .await
    }

    /// Get information about a reminder
    #[instrument(skip(self))]
    pub async fn info(&self, reminder: &ReminderId) -> SlackResult<SlackResponse> {
        self.api
            .get("reminders.info", Params::new().set("reminder", reminder))
            .await
    }

    /// List all reminders
    #[instrument(skip(self))]
    pub async fn list(&self) -> SlackResult<SlackResponse> {
        self.api.get("reminders.list", Params::new()).await
    }
}
