use super::*;
use serde_json::json;
use slacker::errors::{ConfigurationError, SlackError};
use slacker::services::files::UploadFileRequest;
use slacker::services::oauth::OAuthAccessRequest;
use slacker::services::usergroups::UpdateUsergroupUsersRequest;
use slacker::webhooks::IncomingWebhookPayload;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_file_upload_is_multipart() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/files.upload"))
        .and(body_string_contains(r#"name="file"; filename="notes.txt""#))
        .and(body_string_contains("remember the milk"))
        .and(body_string_contains(r#"name="channels""#))
        .and(body_string_contains("C1,C2"))
        .respond_with(success_response(slacker::fixtures::file_uploaded(
            "F123", "notes.txt",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 0);
    let response = client
        .files()
        .upload(UploadFileRequest::from_bytes("notes.txt", "remember the milk").channels(["C1", "C2"]))
        .await
        .unwrap();

    assert_eq!(
        response.get("file").and_then(|f| f.get("id")),
        Some(&json!("F123"))
    );
}

#[tokio::test]
async fn test_usergroup_users_update_joins_ids() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/usergroups.users.update"))
        .and(body_string_contains("users=U1%2CU2"))
        .respond_with(success_response(slacker::fixtures::ok()))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, 0)
        .usergroups()
        .users_update(UpdateUsergroupUsersRequest::new("S1", ["U1", "U2"]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_oauth_access_without_token() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/oauth.access"))
        .and(body_string_contains("code=tmp-code"))
        .respond_with(success_response(slacker::fixtures::oauth_access()))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, 0)
        .oauth()
        .access(OAuthAccessRequest::new("id", "secret", "tmp-code"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body).to_string();
    assert!(!body.contains("token="));
}

#[tokio::test]
async fn test_incoming_webhook_post() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/services/T000/B000/XXXX"))
        .and(body_json(json!({"text": "Build green"})))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let config = SlackConfigBuilder::new()
        .incoming_webhook_url(&format!("{}/services/T000/B000/XXXX", server.uri()))
        .unwrap()
        .build()
        .unwrap();
    let client = SlackClient::new(config).unwrap();

    let body = client
        .webhook()
        .post(&IncomingWebhookPayload::new("Build green"))
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_incoming_webhook_requires_url() {
    let server = setup_mock_server().await;
    let client = client_for(&server, 0);

    let err = client
        .webhook()
        .post(&IncomingWebhookPayload::new("Build green"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SlackError::Configuration(ConfigurationError::MissingWebhookUrl)
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
