//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds:
//! - HTTP client for Discord REST calls made with the caller's token
//! - OAuth2 client for the code-for-token exchange
//! - The bot session, the only way handlers see Discord's cache

use oauth2::basic::{BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse};
use oauth2::{Client, EndpointNotSet, EndpointSet, StandardRevocableToken};
use std::sync::Arc;

use crate::server::{bot::session::BotSession, model::token::DiscordTokenResponse};

/// Type alias for the OAuth2 client configured for Discord authentication.
///
/// Only the token endpoint is set; the frontend drives the authorize redirect itself.
/// Token responses are kept as Discord sent them.
pub(crate) type OAuth2Client<HasTokenUrl = EndpointSet> = Client<
    BasicErrorResponse,
    DiscordTokenResponse,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    HasTokenUrl,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `reqwest::Client` and the session are
/// reference-counted, and the OAuth2 client is designed to be cloned.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for calls to Discord's REST API on behalf of the caller.
    ///
    /// Configured without redirects to prevent SSRF vulnerabilities.
    pub http_client: reqwest::Client,

    /// OAuth2 client exchanging authorization codes for access tokens.
    pub oauth_client: OAuth2Client,

    /// Live bot session over the gateway cache.
    pub session: Arc<dyn BotSession>,

    /// Base URL of Discord's REST API, without a trailing slash.
    pub discord_api_url: String,
}

impl AppState {
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        session: Arc<dyn BotSession>,
        discord_api_url: String,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            session,
            discord_api_url,
        }
    }
}
