//! OAuth service for Slack API.
//!
//! `oauth.access` exchanges a temporary code for a token. It authenticates
//! with the client credentials, so the service runs on an anonymous view of
//! the core and never sends the configured token.

use crate::api::SlackApi;
use crate::envelope::SlackResponse;
use crate::errors::SlackResult;
use crate::params::Params;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};
use tracing::instrument;

/// Request to exchange an OAuth code
#[derive(Debug, Clone, Serialize)]
pub struct OAuthAccessRequest {
    /// Client ID
    pub client_id: String,
    /// Client secret
    #[serde(serialize_with = "expose")]
    pub client_secret: SecretString,
    /// Code from the redirect
    pub code: String,
    /// Redirect URI used in the authorization request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

impl OAuthAccessRequest {
    /// Create a new access request
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
            code: code.into(),
            redirect_uri: None,
        }
    }

    /// Set redirect URI
    pub fn redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }
}

/// OAuth service
#[derive(Debug, Clone)]
pub struct OAuthService {
    api: SlackApi,
}

impl OAuthService {
    /// Create a new OAuth service. Any token on `api` is not used.
    pub fn new(api: SlackApi) -> Self {
        Self {
            api: api.anonymous(),
        }
    }

    /// Exchange a temporary code for an access token
    #[instrument(skip(self, request), fields(client_id = %request.client_id))]
    pub async fn access(&self, request: OAuthAccessRequest) -> SlackResult<SlackResponse> {
        self.api
            .post("oauth.access", Params::from_request(&request)?)
            .await
    }
}
