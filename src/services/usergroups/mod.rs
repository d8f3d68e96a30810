//! User groups service for Slack API.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
