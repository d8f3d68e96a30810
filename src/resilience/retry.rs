//! Bounded rate-limit retry.

use crate::config::SlackConfig;
use crate::errors::{SlackResult, TransportError};
use crate::transport::HttpResponse;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

const HTTP_OK: u16 = 200;
const HTTP_TOO_MANY_REQUESTS: u16 = 429;

/// How rate-limited responses are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Number of 429 responses waited out before the final attempt
    pub max_retries: u32,
    /// Wait used when a 429 carries no usable `retry-after`
    pub fallback_delay: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            max_retries: crate::DEFAULT_RATE_LIMIT_RETRIES,
            fallback_delay: Duration::from_secs(crate::RATE_LIMIT_FALLBACK_SECS),
        }
    }
}

impl RateLimitPolicy {
    /// Take the policy from a client configuration
    pub fn from_config(config: &SlackConfig) -> Self {
        Self {
            max_retries: config.rate_limit_retries,
            fallback_delay: config.rate_limit_fallback,
        }
    }

    /// Set maximum retries
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Set the fallback delay
    pub fn fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }

    /// How long to wait before retrying a rate-limited response
    pub fn delay_for(&self, response: &HttpResponse) -> Duration {
        retry_after(response).unwrap_or(self.fallback_delay)
    }
}

/// Parse the `retry-after` header as whole seconds
pub fn retry_after(response: &HttpResponse) -> Option<Duration> {
    response
        .header("retry-after")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Run an HTTP exchange, waiting out 429 responses.
///
/// While retries remain: 200 is returned, 429 sleeps for the advertised (or
/// fallback) delay and tries again, any other status fails at once. When the
/// budget is spent one last attempt is made and its result is final, so a
/// budget of `n` allows up to `n + 1` exchanges. A 429 on that last attempt
/// is an error and is not slept on.
pub async fn with_rate_limit_retry<F, Fut>(
    policy: &RateLimitPolicy,
    operation: F,
) -> SlackResult<HttpResponse>
where
    F: Fn() -> Fut,
    Fut: Future<Output = SlackResult<HttpResponse>>,
{
    for attempt in 1..=policy.max_retries {
        let response = operation().await?;

        match response.status {
            HTTP_OK => {
                if attempt > 1 {
                    debug!(attempt, "Exchange succeeded after rate-limit wait");
                }
                return Ok(response);
            }
            HTTP_TOO_MANY_REQUESTS => {
                let delay = policy.delay_for(&response);
                warn!(
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    "Rate limited, waiting before retry"
                );
                tokio::time::sleep(delay).await;
            }
            _ => return Err(status_error(response).into()),
        }
    }

    let response = operation().await?;
    if response.status == HTTP_OK {
        Ok(response)
    } else {
        warn!(
            status = response.status,
            max_retries = policy.max_retries,
            "Exchange failed permanently"
        );
        Err(status_error(response).into())
    }
}

fn status_error(response: HttpResponse) -> TransportError {
    if response.status == HTTP_TOO_MANY_REQUESTS {
        TransportError::RateLimited {
            retry_after: retry_after(&response),
        }
    } else {
        TransportError::Status {
            status: response.status,
            body: response.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SlackError;
    use http::HeaderValue;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use test_case::test_case;

    fn rate_limited(retry_after: Option<&'static str>) -> HttpResponse {
        let mut response = HttpResponse::new(429, r#"{"ok":false,"error":"ratelimited"}"#);
        if let Some(value) = retry_after {
            response
                .headers
                .insert("retry-after", HeaderValue::from_static(value));
        }
        response
    }

    #[test_case(Some("2"), Duration::from_secs(2) ; "header value in seconds")]
    #[test_case(Some(" 30 "), Duration::from_secs(30) ; "surrounding whitespace")]
    #[test_case(None, Duration::from_secs(20) ; "missing header uses fallback")]
    #[test_case(Some("soon"), Duration::from_secs(20) ; "unparsable header uses fallback")]
    fn test_delay_for(header: Option<&'static str>, expected: Duration) {
        let policy = RateLimitPolicy::default();
        assert_eq!(policy.delay_for(&rate_limited(header)), expected);
    }

    #[tokio::test]
    async fn test_zero_budget_makes_single_attempt() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();

        let result = with_rate_limit_retry(&RateLimitPolicy::default(), || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(rate_limited(Some("1")))
            }
        })
        .await;

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(matches!(
            result,
            Err(SlackError::Transport(TransportError::RateLimited {
                retry_after: Some(d)
            })) if d == Duration::from_secs(1)
        ));
    }

    #[tokio::test]
    async fn test_other_status_is_not_retried() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();
        let policy = RateLimitPolicy::default().max_retries(5);

        let result = with_rate_limit_retry(&policy, || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(HttpResponse::new(503, "unavailable"))
            }
        })
        .await;

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(matches!(
            result,
            Err(SlackError::Transport(TransportError::Status { status: 503, ref body })) if body == "unavailable"
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_after_wait() {
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();
        let policy = RateLimitPolicy::default().max_retries(3);
        let start = tokio::time::Instant::now();

        let result = with_rate_limit_retry(&policy, || {
            let counter = counter.clone();
            async move {
                match counter.fetch_add(1, Ordering::SeqCst) {
                    0 => Ok(rate_limited(Some("4"))),
                    _ => Ok(HttpResponse::new(200, r#"{"ok":true}"#)),
                }
            }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
        let waited = start.elapsed();
        assert!(waited >= Duration::from_secs(4) && waited < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let policy = RateLimitPolicy::default().max_retries(2);
        let result = with_rate_limit_retry(&policy, || async {
            Err(TransportError::Timeout.into())
        })
        .await;
        assert!(matches!(
            result,
            Err(SlackError::Transport(TransportError::Timeout))
        ));
    }
}
