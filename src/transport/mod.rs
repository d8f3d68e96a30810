//! HTTP transport layer for the Slack client.
//!
//! The transport performs exactly one HTTP exchange per call and reports
//! what came back (status, headers, body text). Interpreting the status,
//! waiting out rate limits and decoding the envelope happen above it, in
//! [`crate::api`].

use crate::config::SlackConfig;
use crate::errors::{ConfigurationError, SlackResult, TransportError};
use crate::observability::redact_url;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use reqwest::{Client, ClientBuilder, Proxy};
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform one HTTP exchange.
    ///
    /// Any status code is a successful exchange; only failures to get a
    /// response at all (connect, timeout, I/O) are errors.
    async fn send(&self, request: TransportRequest) -> SlackResult<HttpResponse>;
}

/// Request body
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body
    Empty,
    /// `application/x-www-form-urlencoded` fields
    Form(Vec<(String, String)>),
    /// `multipart/form-data` with text fields and one file
    Multipart {
        /// Text fields
        fields: Vec<(String, String)>,
        /// File part
        file: FileUpload,
    },
    /// JSON document
    Json(serde_json::Value),
}

/// A fully built HTTP request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, without query string
    pub url: String,
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl TransportRequest {
    /// Create a GET request with query parameters
    pub fn get(url: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            query,
            body: RequestBody::Empty,
            timeout: None,
        }
    }

    /// Create a form-encoded POST request
    pub fn form(url: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            query: Vec::new(),
            body: RequestBody::Form(fields),
            timeout: None,
        }
    }

    /// Create a multipart POST request carrying a file
    pub fn multipart(
        url: impl Into<String>,
        fields: Vec<(String, String)>,
        file: FileUpload,
    ) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            query: Vec::new(),
            body: RequestBody::Multipart { fields, file },
            timeout: None,
        }
    }

    /// Create a JSON POST request
    pub fn json(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            query: Vec::new(),
            body: RequestBody::Json(body),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// What the server sent back
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Body text
    pub body: String,
}

impl HttpResponse {
    /// Create a response with no headers
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Value of a header as text, if present and printable
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// File upload data
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Form field name
    pub field_name: String,
    /// File name
    pub file_name: String,
    /// File content
    pub content: Bytes,
    /// MIME type
    pub mime_type: String,
}

impl FileUpload {
    /// Create a new file upload, guessing the MIME type from the name
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        let file_name_str = file_name.into();
        let mime_type = mime_guess::from_path(&file_name_str)
            .first_or_octet_stream()
            .to_string();

        Self {
            field_name: field_name.into(),
            file_name: file_name_str,
            content: content.into(),
            mime_type,
        }
    }

    /// Set the MIME type
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> SlackResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create the transport a configuration asks for.
    ///
    /// A shared client from the configuration is reused as-is (validation
    /// rejects proxies alongside it); otherwise a client is built with the
    /// configured timeout and proxies.
    pub fn from_config(config: &SlackConfig) -> SlackResult<Self> {
        if let Some(client) = config.http_client() {
            return Ok(Self::with_client(client.clone(), config.timeout));
        }

        let mut builder = ClientBuilder::new()
            .timeout(config.timeout)
            .pool_max_idle_per_host(10);

        if let Some(url) = &config.proxies.http {
            let proxy = Proxy::http(url.as_str()).map_err(|e| ConfigurationError::InvalidProxy {
                url: url.to_string(),
                message: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }
        if let Some(url) = &config.proxies.https {
            let proxy = Proxy::https(url.as_str()).map_err(|e| ConfigurationError::InvalidProxy {
                url: url.to_string(),
                message: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            default_timeout: config.timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %redact_url(&request.url)))]
    async fn send(&self, request: TransportRequest) -> SlackResult<HttpResponse> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut req_builder = self
            .client
            .request(request.method, &request.url)
            .timeout(timeout);

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        req_builder = match request.body {
            RequestBody::Empty => req_builder,
            RequestBody::Form(fields) => req_builder.form(&fields),
            RequestBody::Json(value) => req_builder.json(&value),
            RequestBody::Multipart { fields, file } => {
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                let part = reqwest::multipart::Part::bytes(file.content.to_vec())
                    .file_name(file.file_name)
                    .mime_str(&file.mime_type)
                    .map_err(TransportError::from)?;
                req_builder.multipart(form.part(file.field_name, part))
            }
        };

        let response = req_builder.send().await.map_err(TransportError::from)?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(TransportError::from)?;

        debug!(status, body_len = body.len(), "Received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlackConfigBuilder;

    #[test]
    fn test_get_request_builder() {
        let request = TransportRequest::get(
            "https://slack.com/api/channels.list",
            vec![("exclude_archived".into(), "1".into())],
        );

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.query.len(), 1);
        assert!(matches!(request.body, RequestBody::Empty));
        assert!(request.timeout.is_none());
    }

    #[test]
    fn test_form_request_builder() {
        let request = TransportRequest::form(
            "https://slack.com/api/chat.postMessage",
            vec![
                ("channel".into(), "C123".into()),
                ("text".into(), "Hello".into()),
            ],
        )
        .with_timeout(Duration::from_secs(3));

        assert_eq!(request.method, Method::POST);
        assert!(request.query.is_empty());
        assert_eq!(request.timeout, Some(Duration::from_secs(3)));
        match request.body {
            RequestBody::Form(fields) => {
                assert_eq!(fields[0], ("channel".to_string(), "C123".to_string()))
            }
            other => panic!("expected form body, got {:?}", other),
        }
    }

    #[test]
    fn test_file_upload_mime_detection() {
        let upload = FileUpload::new("file", "test.png", vec![0u8; 10]);
        assert_eq!(upload.mime_type, "image/png");

        let upload = FileUpload::new("file", "document.pdf", vec![0u8; 10]);
        assert_eq!(upload.mime_type, "application/pdf");

        let upload = FileUpload::new("file", "blob", vec![0u8; 10]).with_mime_type("text/csv");
        assert_eq!(upload.mime_type, "text/csv");
    }

    #[test]
    fn test_response_header_lookup() {
        let mut response = HttpResponse::new(429, "");
        response
            .headers
            .insert("retry-after", http::HeaderValue::from_static("2"));
        assert_eq!(response.header("Retry-After"), Some("2"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_from_config_with_proxies() {
        let config = SlackConfigBuilder::new()
            .http_proxy("http://proxy.internal:3128")
            .unwrap()
            .https_proxy("http://proxy.internal:3129")
            .unwrap()
            .build()
            .unwrap();
        assert!(ReqwestTransport::from_config(&config).is_ok());
    }

    #[test]
    fn test_from_config_reuses_shared_client() {
        let config = SlackConfigBuilder::new()
            .http_client(Client::new())
            .timeout(Duration::from_secs(7))
            .build()
            .unwrap();
        let transport = ReqwestTransport::from_config(&config).unwrap();
        assert_eq!(transport.default_timeout, Duration::from_secs(7));
    }
}
