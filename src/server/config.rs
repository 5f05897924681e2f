use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_API_URL: &str = "https://discord.com/api";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub bot_token: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: Option<String>,

    /// Base URL of Discord's REST API, without a trailing slash.
    pub discord_api_url: String,

    pub port: u16,
    /// Origin allowed by CORS; `None` leaves CORS open.
    pub frontend_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match optional_var("PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                value: port.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let discord_api_url =
            optional_var("DISCORD_API_URL").unwrap_or_else(|| DISCORD_API_URL.to_string());
        Url::parse(&discord_api_url).map_err(|e| ConfigError::InvalidValue {
            name: "DISCORD_API_URL".to_string(),
            value: discord_api_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            bot_token: std::env::var("BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?,
            discord_client_id: optional_var("CLIENT_ID").unwrap_or_default(),
            discord_client_secret: optional_var("CLIENT_SECRET").unwrap_or_default(),
            discord_redirect_url: optional_var("REDIRECT_URI"),
            discord_api_url: discord_api_url.trim_end_matches('/').to_string(),
            port,
            frontend_url: optional_var("FRONTEND_URL").filter(|origin| origin != "*"),
        })
    }

    /// OAuth2 code-for-token exchange endpoint.
    pub fn discord_token_url(&self) -> String {
        format!("{}/oauth2/token", self.discord_api_url)
    }
}

/// Reads an environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
