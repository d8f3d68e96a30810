//! Reminders service for Slack API.
//!
//! Provides methods for managing reminders.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
