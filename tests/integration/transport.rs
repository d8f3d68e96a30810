use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use slacker::errors::{DecodeError, SlackError, TransportError};
use slacker::services::channels::ListChannelsRequest;
use slacker::services::chat::PostMessageRequest;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_get_sends_token_in_query() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/channels.list"))
        .and(query_param("token", TEST_TOKEN))
        .and(query_param("exclude_archived", "1"))
        .respond_with(success_response(slacker::fixtures::channels_list()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 0);
    let response = client
        .channels()
        .list(ListChannelsRequest::new().exclude_archived(true))
        .await
        .unwrap();

    assert!(response.successful());
    assert_eq!(
        response.get("channels").and_then(|c| c.as_array()).map(Vec::len),
        Some(2)
    );
}

#[tokio::test]
async fn test_post_sends_form_body() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/chat.postMessage"))
        .and(body_string_contains("channel=C111"))
        .and(body_string_contains("text=Hello+there"))
        .and(body_string_contains(format!("token={}", TEST_TOKEN).as_str()))
        .respond_with(success_response(slacker::fixtures::message_posted(
            "C111",
            "1500000000.000100",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 0);
    let response = client
        .chat()
        .post_message(PostMessageRequest::new("C111", "Hello there"))
        .await
        .unwrap();

    assert_eq!(response.get("ts"), Some(&json!("1500000000.000100")));
}

#[tokio::test]
async fn test_slack_error_is_api_error() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/auth.test"))
        .respond_with(success_response(json!({"ok": false, "error": "invalid_auth"})))
        .mount(&server)
        .await;

    let err = client_for(&server, 0).auth().test().await.unwrap_err();
    assert_eq!(err.api_error(), Some("invalid_auth"));
}

#[tokio::test]
async fn test_server_error_status() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/auth.test"))
        .respond_with(error_response(500, "upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server, 3).auth().test().await.unwrap_err();
    match err {
        SlackError::Transport(TransportError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/emoji.list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server, 0).emoji().list().await.unwrap_err();
    assert!(matches!(
        err,
        SlackError::Decode(DecodeError::InvalidJson { .. })
    ));
}
