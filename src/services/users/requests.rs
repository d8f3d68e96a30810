//! Request types for users service.

use crate::params::flag;
use serde::Serialize;

/// Request to list users
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUsersRequest {
    /// Include presence data
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub presence: Option<bool>,
    /// Maximum number of users per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Pagination cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl ListUsersRequest {
    /// Create a new list request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set presence
    pub fn presence(mut self, presence: bool) -> Self {
        self.presence = Some(presence);
        self
    }

    /// Set limit
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set cursor
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// Presence a user can set manually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Let Slack decide from activity
    Auto,
    /// Force away
    Away,
}

impl Presence {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Auto => "auto",
            Presence::Away => "away",
        }
    }
}
