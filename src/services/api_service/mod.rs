//! API service for Slack API.
//!
//! Provides `api.test`, which echoes its arguments back.

use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use std::collections::BTreeMap;
use tracing::instrument;

/// Request for api.test
#[derive(Debug, Clone, Default)]
pub struct ApiTestRequest {
    /// Error to make Slack return
    pub error: Option<String>,
    /// Arbitrary arguments echoed back under `args`
    pub args: BTreeMap<String, String>,
}

impl ApiTestRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask Slack to fail with this error
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Add an argument to echo
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    fn into_params(self) -> Params {
        let params = self
            .args
            .into_iter()
            .fold(Params::new(), |params, (name, value)| params.set(&name, value));
        params.set_opt("error", self.error)
    }
}

/// API service
#[derive(Debug, Clone)]
pub struct ApiService {
    api: SlackApi,
}

impl ApiService {
    /// Create a new API service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// Check API calling code
    #[instrument(skip(self))]
    pub async fn test(&self, request: ApiTestRequest) -> SlackResult<SlackResponse> {
        self.api.get("api.test", request.into_params()).await
    }
}
