//! Transport core tests: token injection, request shapes, envelope
//! handling and the rate-limit loop.

use super::{mock_api, TEST_TOKEN};
use crate::errors::{ApiError, DecodeError, SlackError, TransportError};
use crate::fixtures;
use crate::mocks::{MockHttpTransport, MockResponse};
use crate::params::Params;
use crate::transport::FileUpload;
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test]
async fn test_token_is_merged_into_params() {
    let transport = MockHttpTransport::new().add_json_response(&fixtures::channels_list());
    let api = mock_api(&transport, 0);

    api.get("channels.list", Params::new().set("exclude_archived", 1))
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.param("exclude_archived"), Some("1"));
    assert_eq!(request.param("token"), Some(TEST_TOKEN));
    assert_eq!(request.query.len(), 2);
}

#[tokio::test]
async fn test_explicit_token_is_kept() {
    let transport = MockHttpTransport::new().add_json_response(&fixtures::ok());
    let api = mock_api(&transport, 0);

    api.get("auth.test", Params::new().set("token", "xoxp-other"))
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.param("token"), Some("xoxp-other"));
    assert_eq!(request.query.len(), 1);
}

#[tokio::test]
async fn test_anonymous_core_sends_no_token() {
    let transport = MockHttpTransport::new().add_json_response(&fixtures::ok());
    let api = mock_api(&transport, 0).anonymous();

    api.post("oauth.access", Params::new().set("code", "abc"))
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.param("token"), None);
    assert_eq!(request.param("code"), Some("abc"));
}

#[tokio::test]
async fn test_successful_envelope_is_returned() {
    let body = fixtures::channels_list();
    let transport = MockHttpTransport::new().add_json_response(&body);
    let api = mock_api(&transport, 0);

    let response = api.get("channels.list", Params::new()).await.unwrap();

    assert!(response.successful());
    assert_eq!(response.error(), None);
    assert_eq!(response.body(), &body);
}

#[tokio::test]
async fn test_failed_envelope_is_api_error() {
    let transport = MockHttpTransport::new().add_response(MockResponse::slack_error("not_authed"));
    let api = mock_api(&transport, 0);

    let err = api.get("auth.test", Params::new()).await.unwrap_err();

    assert_eq!(err.api_error(), Some("not_authed"));
    assert!(matches!(err, SlackError::Api(ref api) if *api == ApiError::new("not_authed")));
}

#[tokio::test]
async fn test_failed_envelope_without_error_string() {
    let transport = MockHttpTransport::new().add_response(MockResponse::ok(r#"{"ok":false}"#));
    let api = mock_api(&transport, 0);

    let err = api.get("auth.test", Params::new()).await.unwrap_err();
    assert_eq!(err.api_error(), Some("unknown_error"));
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let transport = MockHttpTransport::new().add_response(MockResponse::ok("<html>oops</html>"));
    let api = mock_api(&transport, 0);

    let err = api.get("api.test", Params::new()).await.unwrap_err();
    assert!(matches!(
        err,
        SlackError::Decode(DecodeError::InvalidJson { .. })
    ));
}

#[tokio::test]
async fn test_get_sends_query_string() {
    let transport = MockHttpTransport::new().add_json_response(&fixtures::ok());
    let api = mock_api(&transport, 0);

    api.get("channels.info", Params::new().set("channel", "C111"))
        .await
        .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "https://slack.com/api/channels.info");
    assert_eq!(request.param("channel"), Some("C111"));
    assert!(request.fields.is_empty());
    assert_eq!(request.timeout, Some(Duration::from_secs(30)));
}

#[tokio::test]
async fn test_post_sends_form_body() {
    let transport = MockHttpTransport::new().add_json_response(&fixtures::ok());
    let api = mock_api(&transport, 0);

    api.post(
        "chat.delete",
        Params::new().set("channel", "C111").set("ts", "1.2"),
    )
    .await
    .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, "POST");
    assert!(request.query.is_empty());
    assert_eq!(
        request.fields,
        vec![
            ("channel".to_string(), "C111".to_string()),
            ("ts".to_string(), "1.2".to_string()),
            ("token".to_string(), TEST_TOKEN.to_string()),
        ]
    );
    assert_eq!(request.file_name, None);
}

#[tokio::test]
async fn test_upload_sends_multipart() {
    let transport =
        MockHttpTransport::new().add_json_response(&fixtures::file_uploaded("F1", "a.txt"));
    let api = mock_api(&transport, 0);

    api.upload(
        "files.upload",
        Params::new().set("title", "A"),
        FileUpload::new("file", "a.txt", "hello"),
    )
    .await
    .unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.file_name.as_deref(), Some("a.txt"));
    assert_eq!(request.param("title"), Some("A"));
    assert_eq!(request.param("token"), Some(TEST_TOKEN));
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_waits_retry_after() {
    let transport = MockHttpTransport::new()
        .add_response(MockResponse::rate_limited(Some(2)))
        .add_json_response(&fixtures::message_posted("C111", "1.5"));
    let api = mock_api(&transport, 1);
    let start = Instant::now();

    let response = api.post("chat.postMessage", Params::new()).await.unwrap();

    let waited = start.elapsed();
    assert!(waited >= Duration::from_secs(2) && waited < Duration::from_secs(3));
    assert_eq!(transport.request_count(), 2);
    assert_eq!(response.get("ts").and_then(|v| v.as_str()), Some("1.5"));
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_without_header_waits_fallback() {
    let transport = MockHttpTransport::new()
        .add_response(MockResponse::rate_limited(None))
        .add_json_response(&fixtures::ok());
    let api = mock_api(&transport, 3);
    let start = Instant::now();

    api.get("users.list", Params::new()).await.unwrap();

    let waited = start.elapsed();
    assert!(waited >= Duration::from_secs(20) && waited < Duration::from_secs(21));
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_budget_is_a_ceiling() {
    let transport =
        MockHttpTransport::new().with_default_response(MockResponse::rate_limited(Some(3)));
    let api = mock_api(&transport, 1);
    let start = Instant::now();

    let err = api.get("users.list", Params::new()).await.unwrap_err();

    let waited = start.elapsed();
    assert_eq!(transport.request_count(), 2);
    assert!(waited >= Duration::from_secs(3) && waited < Duration::from_secs(4));
    assert!(err.is_rate_limited());
    assert_eq!(err.retry_after(), Some(Duration::from_secs(3)));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let transport = MockHttpTransport::new()
        .with_default_response(MockResponse::status(500, "internal error"));
    let api = mock_api(&transport, 5);

    let err = api.get("users.list", Params::new()).await.unwrap_err();

    assert_eq!(transport.request_count(), 1);
    assert_eq!(err.http_status(), Some(500));
    assert!(matches!(
        err,
        SlackError::Transport(TransportError::Status { status: 500, ref body }) if body == "internal error"
    ));
}

#[tokio::test]
async fn test_connection_failure_propagates() {
    let transport = MockHttpTransport::new().add_response(MockResponse::connection_failure());
    let api = mock_api(&transport, 2);

    let err = api.get("api.test", Params::new()).await.unwrap_err();
    assert!(matches!(
        err,
        SlackError::Transport(TransportError::ConnectionFailed { .. })
    ));
    assert_eq!(transport.request_count(), 1);
}
