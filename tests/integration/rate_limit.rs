use super::*;
use slacker::errors::{SlackError, TransportError};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::Mock;

fn rate_limited(retry_after: &str) -> ResponseTemplate {
    ResponseTemplate::new(429)
        .insert_header("retry-after", retry_after)
        .set_body_json(serde_json::json!({"ok": false, "error": "ratelimited"}))
}

#[tokio::test]
async fn test_retries_after_advertised_delay() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/users.list"))
        .respond_with(rate_limited("1"))
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users.list"))
        .respond_with(success_response(slacker::fixtures::users_list()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 2);
    let start = Instant::now();
    let response = client
        .users()
        .list(Default::default())
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_secs(1));
    assert!(response.successful());
}

#[tokio::test]
async fn test_rate_limit_without_budget_fails_immediately() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/users.list"))
        .respond_with(rate_limited("30"))
        .expect(1)
        .mount(&server)
        .await;

    let start = Instant::now();
    let err = client_for(&server, 0)
        .users()
        .list(Default::default())
        .await
        .unwrap_err();

    assert!(start.elapsed() < Duration::from_secs(30));
    assert!(matches!(
        err,
        SlackError::Transport(TransportError::RateLimited {
            retry_after: Some(d)
        }) if d == Duration::from_secs(30)
    ));
}
