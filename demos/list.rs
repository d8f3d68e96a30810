//! List channels and users
//!
//! Prints every channel's id and name, then every active member with
//! their admin and owner flags.
//!
//! Run with `SLACK_TOKEN=xoxb-... cargo run --example list`.

use slacker::services::channels::ListChannelsRequest;
use slacker::services::users::ListUsersRequest;
use slacker::{SlackClient, SlackConfig, SlackError};

#[tokio::main]
async fn main() -> Result<(), SlackError> {
    let token = match std::env::var("SLACK_TOKEN") {
        Ok(token) => token,
        Err(_) => {
            println!("Environment variable SLACK_TOKEN not set.");
            return Ok(());
        }
    };

    let config = SlackConfig::builder().token(token).build()?;
    let client = SlackClient::new(config)?;

    // Get channel list
    let response = client.channels().list(ListChannelsRequest::new()).await?;
    for channel in response.get("channels").and_then(|c| c.as_array()).into_iter().flatten() {
        println!(
            "{} {}",
            channel["id"].as_str().unwrap_or_default(),
            channel["name"].as_str().unwrap_or_default()
        );
    }
    println!();

    // Get users list
    let response = client.users().list(ListUsersRequest::new()).await?;
    for user in response.get("members").and_then(|m| m.as_array()).into_iter().flatten() {
        if user["deleted"].as_bool().unwrap_or(false) {
            continue;
        }
        println!(
            "{} {} {} {}",
            user["id"].as_str().unwrap_or_default(),
            user["name"].as_str().unwrap_or_default(),
            user["is_admin"].as_bool().unwrap_or(false),
            user["is_owner"].as_bool().unwrap_or(false)
        );
    }
    println!();

    Ok(())
}
