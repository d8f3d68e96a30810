//! Chat service for Slack API.
//!
//! Posting, updating, deleting and scheduling messages (`chat.*`).

mod requests;
mod service;

pub use requests::*;
pub use service::*;
