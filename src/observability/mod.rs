//! Observability helpers for the Slack client.
//!
//! The client emits `tracing` events and spans but never installs a
//! subscriber; these helpers keep secrets out of that output.

pub mod logging;

pub use logging::*;
