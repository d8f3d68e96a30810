//! Files service for Slack API.
//!
//! Provides methods for listing, uploading and sharing files.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
