//! Service implementations for Slack API endpoints.
//!
//! Each service wraps one family of Web API methods (`channels.*`,
//! `chat.*`, ...) over a clone of the shared [`SlackApi`](crate::api::SlackApi)
//! core and returns the raw [`SlackResponse`](crate::envelope::SlackResponse).

pub mod api_service;
pub mod auth_service;
pub mod channels;
pub mod chat;
pub mod emoji;
pub mod files;
pub mod groups;
pub mod im;
pub mod items;
pub mod oauth;
pub mod pins;
pub mod reactions;
pub mod reminders;
pub mod search;
pub mod stars;
pub mod team;
pub mod usergroups;
pub mod users;

pub use api_service::ApiService;
pub use auth_service::AuthService;
pub use channels::ChannelsService;
pub use chat::ChatService;
pub use emoji::EmojiService;
pub use files::FilesService;
pub use groups::GroupsService;
pub use im::ImService;
pub use items::ItemRef;
pub use oauth::OAuthService;
pub use pins::PinsService;
pub use reactions::ReactionsService;
pub use reminders::RemindersService;
pub use search::SearchService;
pub use stars::StarsService;
pub use team::TeamService;
pub use usergroups::UsergroupsService;
pub use users::UsersService;

use serde_json::Value;

/// Find the `id` of the first item whose `name` equals `name`.
///
/// Items without a string `name` or `id` are skipped.
pub fn get_item_id_by_name(items: &[Value], name: &str) -> Option<String> {
    items
        .iter()
        .find(|item| item.get("name").and_then(Value::as_str) == Some(name))
        .and_then(|item| item.get("id").and_then(Value::as_str))
        .map(String::from)
}

/// Look `name` up in the list stored under `field` of a list response
pub(crate) fn find_id_in(
    response: &crate::envelope::SlackResponse,
    field: &str,
    name: &str,
) -> Option<String> {
    response
        .get(field)
        .and_then(Value::as_array)
        .and_then(|items| get_item_id_by_name(items, name))
}
