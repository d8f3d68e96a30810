//! Post a message
//!
//! Posts an attachment-only message to `#general` as the token's user.
//!
//! Run with `SLACK_TOKEN=xoxp-... cargo run --example post`.

use serde_json::json;
use slacker::services::chat::PostMessageRequest;
use slacker::{SlackClient, SlackConfig, SlackError};

#[tokio::main]
async fn main() -> Result<(), SlackError> {
    let Ok(token) = std::env::var("SLACK_TOKEN") else {
        println!("Environment variable SLACK_TOKEN not set.");
        return Ok(());
    };

    let client = SlackClient::new(SlackConfig::builder().token(token).build()?)?;

    let request = PostMessageRequest::new("#general", "")
        .as_user(true)
        .attachments(vec![json!({"pretext": "Subject", "text": "Body"})]);
    let response = client.chat().post_message(request).await?;

    println!(
        "{} {} {}",
        response.successful(),
        response.get("channel").and_then(|c| c.as_str()).unwrap_or_default(),
        response.get("ts").and_then(|t| t.as_str()).unwrap_or_default()
    );

    Ok(())
}
