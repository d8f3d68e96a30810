//! Channels service for Slack API.
//!
//! Public channels (`channels.*`). The history and list requests defined
//! here are shared with the private-group and IM services, which take the
//! same arguments.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
