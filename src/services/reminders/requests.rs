//! Request types for reminders service.

use crate::types::UserId;
use serde::Serialize;

/// Request to add a reminder
#[derive(Debug, Clone, Serialize)]
pub struct AddReminderRequest {
    /// Text of the reminder
    pub text: String,
    /// When the reminder should occur (Unix timestamp, seconds from now, or natural language)
    pub time: String,
    /// User to receive the reminder (defaults to authed user)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
}

impl AddReminderRequest {
    /// Create a new reminder request
    pub fn new(text: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            time: time.into(),
            user: None,
        }
    }

    /// Remind at a point in time
    pub fn at(text: impl Into<String>, when: chrono::DateTime<chrono::Utc>) -> Self {
        Self::new(text, when.timestamp().to_string())
    }

    /// Set the user to remind
    pub fn user(mut self, user: impl Into<UserId>) -> Self {
        self.user = Some(user.into());
        self
    }
}
