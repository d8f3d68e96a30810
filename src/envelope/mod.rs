//! Slack response envelope.
//!
//! Every Web API method answers with a JSON object carrying a boolean `ok`,
//! an `error` string when `ok` is false, and whatever fields the method
//! defines. [`SlackResponse`] wraps one such answer.

use crate::errors::DecodeError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A parsed Slack API response
#[derive(Debug, Clone, PartialEq)]
pub struct SlackResponse {
    raw: String,
    body: Value,
    successful: bool,
    error: Option<String>,
}

impl SlackResponse {
    /// Parse a raw response body.
    ///
    /// Fails when the text is not JSON or has no boolean `ok` field. No
    /// other validation is done; unknown fields are kept as they are.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DecodeError> {
        let raw = raw.into();
        let body: Value = serde_json::from_str(&raw)?;

        let successful = body
            .get("ok")
            .and_then(Value::as_bool)
            .ok_or(DecodeError::MissingOkField)?;

        let error = if successful {
            None
        } else {
            body.get("error").and_then(Value::as_str).map(String::from)
        };

        Ok(Self {
            raw,
            body,
            successful,
            error,
        })
    }

    /// The response text exactly as received
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The decoded body
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Value of the `ok` field
    pub fn successful(&self) -> bool {
        self.successful
    }

    /// Value of the `error` field, present only when `ok` is false
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Slack's advisory `warning` field (e.g. `superfluous_charset`)
    pub fn warning(&self) -> Option<&str> {
        self.body.get("warning").and_then(Value::as_str)
    }

    /// A top-level field of the body
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }

    /// Deserialize the whole body into a caller-defined type
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        Ok(T::deserialize(&self.body)?)
    }

    /// Take the decoded body
    pub fn into_body(self) -> Value {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_parse_success() {
        let body = json!({
            "ok": true,
            "channels": [{"id": "C111", "name": "general"}]
        });
        let raw = body.to_string();

        let response = SlackResponse::parse(raw.clone()).unwrap();
        assert!(response.successful());
        assert_eq!(response.error(), None);
        assert_eq!(response.body(), &body);
        assert_eq!(response.raw(), raw);
    }

    #[test]
    fn test_parse_failure_keeps_error() {
        let response = SlackResponse::parse(r#"{"ok":false,"error":"not_authed"}"#).unwrap();
        assert!(!response.successful());
        assert_eq!(response.error(), Some("not_authed"));
    }

    #[test]
    fn test_error_ignored_when_ok() {
        let response = SlackResponse::parse(r#"{"ok":true,"error":"stale"}"#).unwrap();
        assert_eq!(response.error(), None);
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = SlackResponse::parse("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_or_non_boolean_ok() {
        assert!(matches!(
            SlackResponse::parse(r#"{"channels":[]}"#).unwrap_err(),
            DecodeError::MissingOkField
        ));
        assert!(matches!(
            SlackResponse::parse(r#"{"ok":"true"}"#).unwrap_err(),
            DecodeError::MissingOkField
        ));
        assert!(matches!(
            SlackResponse::parse("[1, 2]").unwrap_err(),
            DecodeError::MissingOkField
        ));
    }

    #[test]
    fn test_field_access_and_warning() {
        let response = SlackResponse::parse(
            r#"{"ok":true,"warning":"superfluous_charset","ts":"1500000000.000100"}"#,
        )
        .unwrap();

        assert_eq!(response.warning(), Some("superfluous_charset"));
        assert_eq!(response.get("ts"), Some(&json!("1500000000.000100")));
        assert_eq!(response.get("channel"), None);
    }

    #[test]
    fn test_deserialize_typed() {
        #[derive(Debug, Deserialize)]
        struct Posted {
            channel: String,
            ts: String,
        }

        let response =
            SlackResponse::parse(r#"{"ok":true,"channel":"C111","ts":"1.2"}"#).unwrap();
        let posted: Posted = response.deserialize().unwrap();
        assert_eq!(posted.channel, "C111");
        assert_eq!(posted.ts, "1.2");

        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct NeedsMembers {
            members: Vec<String>,
        }
        assert!(response.deserialize::<NeedsMembers>().is_err());
    }
}
