//! Transport core.
//!
//! [`SlackApi`] turns one [`ApiRequest`] into one logical Web API call:
//! it injects the token, resolves the endpoint URL, performs the exchange
//! under the rate-limit policy and decodes the envelope. Every resource
//! group is a thin layer of `get`/`post`/`upload` calls on top of it.

use crate::config::{SlackConfig, SlackToken};
use crate::envelope::SlackResponse;
use crate::errors::{ApiError, SlackResult};
use crate::params::Params;
use crate::resilience::{with_rate_limit_retry, RateLimitPolicy};
use crate::transport::{FileUpload, HttpResponse, HttpTransport, TransportRequest};
use http::Method;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Name of the parameter carrying the token
const TOKEN_PARAM: &str = "token";

/// Error string used when Slack reports `ok: false` without one
const UNKNOWN_ERROR: &str = "unknown_error";

/// One Web API call, before the token is attached
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Endpoint name, e.g. `channels.list`
    pub endpoint: String,
    /// GET for reads, POST for mutations
    pub method: Method,
    /// Parameters; absent values are already omitted
    pub params: Params,
    /// File for multipart upload
    pub file: Option<FileUpload>,
}

impl ApiRequest {
    /// A read call
    pub fn get(endpoint: impl Into<String>, params: Params) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::GET,
            params,
            file: None,
        }
    }

    /// A mutating call
    pub fn post(endpoint: impl Into<String>, params: Params) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::POST,
            params,
            file: None,
        }
    }

    /// A mutating call carrying a file
    pub fn upload(endpoint: impl Into<String>, params: Params, file: FileUpload) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::POST,
            params,
            file: Some(file),
        }
    }
}

/// The shared transport core
#[derive(Clone)]
pub struct SlackApi {
    transport: Arc<dyn HttpTransport>,
    config: Arc<SlackConfig>,
    policy: RateLimitPolicy,
    anonymous: bool,
}

impl SlackApi {
    /// Create a core over a transport and configuration
    pub fn new(transport: Arc<dyn HttpTransport>, config: Arc<SlackConfig>) -> Self {
        let policy = RateLimitPolicy::from_config(&config);
        Self {
            transport,
            config,
            policy,
            anonymous: false,
        }
    }

    /// The same core, but never sending the configured token
    pub fn anonymous(&self) -> Self {
        Self {
            anonymous: true,
            ..self.clone()
        }
    }

    /// The configuration this core was built with
    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    /// The rate-limit policy in force
    pub fn policy(&self) -> &RateLimitPolicy {
        &self.policy
    }

    /// Token sent with each call, if any
    pub fn token(&self) -> Option<&SlackToken> {
        if self.anonymous {
            None
        } else {
            self.config.token()
        }
    }

    /// Full URL for an endpoint
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        self.config.build_url(endpoint)
    }

    /// Call a read endpoint
    pub async fn get(&self, endpoint: &str, params: Params) -> SlackResult<SlackResponse> {
        self.execute(ApiRequest::get(endpoint, params)).await
    }

    /// Call a mutating endpoint
    pub async fn post(&self, endpoint: &str, params: Params) -> SlackResult<SlackResponse> {
        self.execute(ApiRequest::post(endpoint, params)).await
    }

    /// Call a mutating endpoint with a file attached
    pub async fn upload(
        &self,
        endpoint: &str,
        params: Params,
        file: FileUpload,
    ) -> SlackResult<SlackResponse> {
        self.execute(ApiRequest::upload(endpoint, params, file)).await
    }

    /// Perform one logical API call.
    ///
    /// Fails with a transport error when no 200 is obtained, a decode error
    /// when the body is not an envelope, and an API error when the envelope
    /// says `ok: false`.
    #[instrument(skip(self, request), fields(endpoint = %request.endpoint, method = %request.method))]
    pub async fn execute(&self, request: ApiRequest) -> SlackResult<SlackResponse> {
        let ApiRequest {
            endpoint,
            method,
            mut params,
            file,
        } = request;

        if let Some(token) = self.token() {
            params.insert_default(TOKEN_PARAM, token.expose());
        }

        let url = self.endpoint_url(&endpoint);
        let fields = params.into_pairs();
        let transport_request = if method == Method::GET {
            TransportRequest::get(url, fields)
        } else {
            match file {
                Some(file) => TransportRequest::multipart(url, fields, file),
                None => TransportRequest::form(url, fields),
            }
        }
        .with_timeout(self.config.timeout);

        let response = self.exchange(transport_request).await?;
        let envelope = SlackResponse::parse(response.body)?;

        if !envelope.successful() {
            let error = envelope.error().unwrap_or(UNKNOWN_ERROR);
            debug!(error, "Slack rejected the call");
            return Err(ApiError::new(error).into());
        }

        Ok(envelope)
    }

    /// Perform an HTTP exchange under the rate-limit policy.
    ///
    /// Returns the first 200 response; the body is not interpreted.
    pub async fn exchange(&self, request: TransportRequest) -> SlackResult<HttpResponse> {
        let transport = &self.transport;
        with_rate_limit_retry(&self.policy, || transport.send(request.clone())).await
    }
}

impl std::fmt::Debug for SlackApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackApi")
            .field("base_url", &self.config.base_url.as_str())
            .field("policy", &self.policy)
            .field("anonymous", &self.anonymous)
            .finish()
    }
}
