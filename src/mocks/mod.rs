//! Mock implementations for testing.
//!
//! [`MockHttpTransport`] replays queued responses and records every request
//! it receives, so tests can assert on exactly what went over the wire.

use crate::errors::{SlackError, SlackResult, TransportError};
use crate::transport::{HttpResponse, HttpTransport, RequestBody, TransportRequest};
use async_trait::async_trait;
use http::{HeaderName, HeaderValue};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// Mock response configuration
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// Response body
    pub body: String,
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Vec<(String, String)>,
    /// Delay before response
    pub delay: Option<Duration>,
    /// Fail the exchange instead of answering
    pub fail: bool,
}

impl MockResponse {
    /// Create a 200 response with a JSON body
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self::ok(serde_json::to_string(data).unwrap_or_default())
    }

    /// Create a 200 response with a raw body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::status(200, body)
    }

    /// Create a response with any status
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status,
            headers: Vec::new(),
            delay: None,
            fail: false,
        }
    }

    /// Create a 200 response carrying a Slack error
    pub fn slack_error(error_code: &str) -> Self {
        Self::ok(format!(r#"{{"ok":false,"error":"{}"}}"#, error_code))
    }

    /// Create a 429 response, optionally with `retry-after` seconds
    pub fn rate_limited(retry_after: Option<u64>) -> Self {
        let response = Self::status(429, r#"{"ok":false,"error":"ratelimited"}"#);
        match retry_after {
            Some(secs) => response.with_header("retry-after", &secs.to_string()),
            None => response,
        }
    }

    /// Fail the exchange with a connection error
    pub fn connection_failure() -> Self {
        Self {
            fail: true,
            ..Self::status(0, "")
        }
    }

    /// Add a response header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Add delay to response
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn into_http(self) -> HttpResponse {
        let mut response = HttpResponse::new(self.status, self.body);
        for (name, value) in self.headers {
            if let (Ok(name), Ok(value)) = (
                name.parse::<HeaderName>(),
                HeaderValue::from_str(&value),
            ) {
                response.headers.append(name, value);
            }
        }
        response
    }
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request method
    pub method: String,
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Form or multipart text fields
    pub fields: Vec<(String, String)>,
    /// Uploaded file name, for multipart requests
    pub file_name: Option<String>,
    /// JSON body, for JSON requests
    pub json: Option<serde_json::Value>,
    /// Timeout requested by the caller
    pub timeout: Option<Duration>,
}

impl RecordedRequest {
    /// Endpoint name: the last path segment of the URL
    pub fn endpoint(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or_default()
    }

    /// Look up a parameter in the query or the body fields
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .chain(self.fields.iter())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn from_request(request: &TransportRequest) -> Self {
        let (fields, file_name, json) = match &request.body {
            RequestBody::Empty => (Vec::new(), None, None),
            RequestBody::Form(fields) => (fields.clone(), None, None),
            RequestBody::Multipart { fields, file } => {
                (fields.clone(), Some(file.file_name.clone()), None)
            }
            RequestBody::Json(value) => (Vec::new(), None, Some(value.clone())),
        };

        Self {
            url: request.url.clone(),
            method: request.method.to_string(),
            query: request.query.clone(),
            fields,
            file_name,
            json,
            timeout: request.timeout,
        }
    }
}

/// Mock HTTP transport for testing
#[derive(Clone)]
pub struct MockHttpTransport {
    /// Queue of responses to return
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Recorded requests
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// Default response if queue is empty
    default_response: Option<MockResponse>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            default_response: None,
        }
    }

    /// Add a response to the queue
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Add multiple responses
    pub fn add_responses(self, responses: impl IntoIterator<Item = MockResponse>) -> Self {
        self.responses.lock().extend(responses);
        self
    }

    /// Add a JSON response
    pub fn add_json_response<T: Serialize>(self, data: &T) -> Self {
        self.add_response(MockResponse::json(data))
    }

    /// Set default response when queue is empty
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of exchanges performed
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Clear recorded requests
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }

    /// Get remaining response count
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }

    fn next_response(&self) -> Option<MockResponse> {
        let mut queue = self.responses.lock();
        queue.pop_front().or_else(|| self.default_response.clone())
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: TransportRequest) -> SlackResult<HttpResponse> {
        self.requests
            .lock()
            .push(RecordedRequest::from_request(&request));

        let response = self.next_response().ok_or_else(|| {
            SlackError::Transport(TransportError::Http(
                "No mock response configured".to_string(),
            ))
        })?;

        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }

        if response.fail {
            return Err(TransportError::ConnectionFailed {
                message: format!("mock connection to {} refused", request.url),
            }
            .into());
        }

        Ok(response.into_http())
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}
