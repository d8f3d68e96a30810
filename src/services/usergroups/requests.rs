//! Request types for usergroups service.

use crate::params::flag;
use crate::types::{ChannelId, UserId, UsergroupId};
use serde::Serialize;

/// Request to list user groups
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUsergroupsRequest {
    /// Include disabled groups
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_disabled: Option<bool>,
    /// Include the number of users in each group
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_count: Option<bool>,
    /// Include the users of each group
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_users: Option<bool>,
}

impl ListUsergroupsRequest {
    /// Create a new list request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set include_disabled
    pub fn include_disabled(mut self, include: bool) -> Self {
        self.include_disabled = Some(include);
        self
    }

    /// Set include_count
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Set include_users
    pub fn include_users(mut self, include: bool) -> Self {
        self.include_users = Some(include);
        self
    }
}

/// Request to create a user group
#[derive(Debug, Clone, Serialize)]
pub struct CreateUsergroupRequest {
    /// Group name
    pub name: String,
    /// Mention handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default channels for members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ChannelId>>,
    /// Include the number of users in the response
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_count: Option<bool>,
}

impl CreateUsergroupRequest {
    /// Create a new request
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: None,
            description: None,
            channels: None,
            include_count: None,
        }
    }

    /// Set handle
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set default channels
    pub fn channels<I, C>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChannelId>,
    {
        self.channels = Some(channels.into_iter().map(Into::into).collect());
        self
    }

    /// Set include_count
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }
}

/// Request to update a user group
#[derive(Debug, Clone, Serialize)]
pub struct UpdateUsergroupRequest {
    /// Group to update
    pub usergroup: UsergroupId,
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New default channels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ChannelId>>,
    /// Include the number of users in the response
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_count: Option<bool>,
}

impl UpdateUsergroupRequest {
    /// Create a new request
    pub fn new(usergroup: impl Into<UsergroupId>) -> Self {
        Self {
            usergroup: usergroup.into(),
            name: None,
            handle: None,
            description: None,
            channels: None,
            include_count: None,
        }
    }

    /// Set name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set handle
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set default channels
    pub fn channels<I, C>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChannelId>,
    {
        self.channels = Some(channels.into_iter().map(Into::into).collect());
        self
    }

    /// Set include_count
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }
}

/// Request to replace the members of a user group
#[derive(Debug, Clone, Serialize)]
pub struct UpdateUsergroupUsersRequest {
    /// Group to update
    pub usergroup: UsergroupId,
    /// Complete member list
    pub users: Vec<UserId>,
    /// Include the number of users in the response
    #[serde(
        serialize_with = "flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_count: Option<bool>,
}

impl UpdateUsergroupUsersRequest {
    /// Create a new request
    pub fn new<I, U>(usergroup: impl Into<UsergroupId>, users: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserId>,
    {
        Self {
            usergroup: usergroup.into(),
            users: users.into_iter().map(Into::into).collect(),
            include_count: None,
        }
    }

    /// Set include_count
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }
}
