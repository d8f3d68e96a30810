//! Slack client implementation.
//!
//! Provides the main entry point for interacting with Slack APIs.

use crate::api::SlackApi;
use crate::config::SlackConfig;
use crate::errors::SlackResult;
use crate::services::{
    ApiService, AuthService, ChannelsService, ChatService, EmojiService, FilesService,
    GroupsService, ImService, OAuthService, PinsService, ReactionsService, RemindersService,
    SearchService, StarsService, TeamService, UsergroupsService, UsersService,
};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::webhooks::IncomingWebhookService;
use std::sync::Arc;
use tracing::debug;

/// Main Slack client.
///
/// Every resource group shares one [`SlackApi`] core, and with it one
/// transport and one configuration. Cloning the client is cheap.
#[derive(Clone)]
pub struct SlackClient {
    api: SlackApi,
    api_service: ApiService,
    auth_service: AuthService,
    channels_service: ChannelsService,
    chat_service: ChatService,
    emoji_service: EmojiService,
    files_service: FilesService,
    groups_service: GroupsService,
    im_service: ImService,
    oauth_service: OAuthService,
    pins_service: PinsService,
    reactions_service: ReactionsService,
    reminders_service: RemindersService,
    search_service: SearchService,
    stars_service: StarsService,
    team_service: TeamService,
    usergroups_service: UsergroupsService,
    users_service: UsersService,
    webhook_service: IncomingWebhookService,
}

impl SlackClient {
    /// Create a new Slack client with the given configuration
    pub fn new(config: SlackConfig) -> SlackResult<Self> {
        let transport = Arc::new(ReqwestTransport::from_config(&config)?);
        Self::with_transport(config, transport)
    }

    /// Create a new Slack client with a custom transport
    pub fn with_transport(
        config: SlackConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> SlackResult<Self> {
        config.validate()?;
        debug!(
            base_url = %config.base_url,
            has_token = config.token().is_some(),
            rate_limit_retries = config.rate_limit_retries,
            "Creating Slack client"
        );

        let api = SlackApi::new(transport, Arc::new(config));

        Ok(Self {
            api_service: ApiService::new(api.clone()),
            auth_service: AuthService::new(api.clone()),
            channels_service: ChannelsService::new(api.clone()),
            chat_service: ChatService::new(api.clone()),
            emoji_service: EmojiService::new(api.clone()),
            files_service: FilesService::new(api.clone()),
            groups_service: GroupsService::new(api.clone()),
            im_service: ImService::new(api.clone()),
            oauth_service: OAuthService::new(api.clone()),
            pins_service: PinsService::new(api.clone()),
            reactions_service: ReactionsService::new(api.clone()),
            reminders_service: RemindersService::new(api.clone()),
            search_service: SearchService::new(api.clone()),
            stars_service: StarsService::new(api.clone()),
            team_service: TeamService::new(api.clone()),
            usergroups_service: UsergroupsService::new(api.clone()),
            users_service: UsersService::new(api.clone()),
            webhook_service: IncomingWebhookService::new(api.clone()),
            api,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &SlackConfig {
        self.api.config()
    }

    /// The shared transport core, for endpoints without a wrapper
    pub fn api(&self) -> &SlackApi {
        &self.api
    }

    /// Get the api service (`api.*`)
    pub fn api_methods(&self) -> &ApiService {
        &self.api_service
    }

    /// Get the auth service
    pub fn auth(&self) -> &AuthService {
        &self.auth_service
    }

    /// Get the channels service
    pub fn channels(&self) -> &ChannelsService {
        &self.channels_service
    }

    /// Get the chat service
    pub fn chat(&self) -> &ChatService {
        &self.chat_service
    }

    /// Get the emoji service
    pub fn emoji(&self) -> &EmojiService {
        &self.emoji_service
    }

    /// Get the files service
    pub fn files(&self) -> &FilesService {
        &self.files_service
    }

    /// Get the groups service
    pub fn groups(&self) -> &GroupsService {
        &self.groups_service
    }

    /// Get the IM service
    pub fn im(&self) -> &ImService {
        &self.im_service
    }

    /// Get the OAuth service
    pub fn oauth(&self) -> &OAuthService {
        &self.oauth_service
    }

    /// Get the pins service
    pub fn pins(&self) -> &PinsService {
        &self.pins_service
    }

    /// Get the reactions service
    pub fn reactions(&self) -> &ReactionsService {
        &self.reactions_service
    }

    /// Get the reminders service
    pub fn reminders(&self) -> &RemindersService {
        &self.reminders_service
    }

    /// Get the search service
    pub fn search(&self) -> &SearchService {
        &self.search_service
    }

    /// Get the stars service
    pub fn stars(&self) -> &StarsService {
        &self.stars_service
    }

    /// Get the team service
    pub fn team(&self) -> &TeamService {
        &self.team_service
    }

    /// Get the usergroups service
    pub fn usergroups(&self) -> &UsergroupsService {
        &self.usergroups_service
    }

    /// Get the users service
    pub fn users(&self) -> &UsersService {
        &self.users_service
    }

    /// Get the incoming webhook service
    pub fn webhook(&self) -> &IncomingWebhookService {
        &self.webhook_service
    }
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("config", self.config())
            .finish()
    }
}
