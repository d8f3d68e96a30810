//! Resilience patterns for the Slack client.
//!
//! Slack signals throttling with HTTP 429 and a `retry-after` header. The
//! only resilience behavior here is waiting that out a bounded number of
//! times; there is no backoff growth and no jitter.

pub mod retry;

pub use retry::{with_rate_limit_retry, RateLimitPolicy};
