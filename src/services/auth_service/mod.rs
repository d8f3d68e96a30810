//! Authentication service for Slack API.

use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use tracing::instrument;

/// Auth service
#[derive(Debug, Clone)]
pub struct AuthService {
    api: SlackApi,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(api: SlackApi) -> Self {
        Self { api }
    }

    /// Check authentication and identity
    #[instrument(skip(self))]
    pub async fn test(&self) -> SlackResult<SlackResponse> {
        self.api.get("auth.test", Params::new()).await
    }

    /// Revoke the token. With `test` set, only checks that it could be revoked.
    #[instrument(skip(self))]
    pub async fn revoke(&self, test: Option<bool>) -> SlackResult<SlackResponse> {
        let params = Params::new().set_opt("test", test.map(u8::from));
        self.api.post("auth.revoke", params).await
    }
}
