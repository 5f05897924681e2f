//! Construction of the shared clients and layers the server needs at startup.

use axum::http::{header, HeaderValue, Method};
use std::future::Future;
use oauth2::{AuthType, ClientId, ClientSecret, EndpointNotSet, RedirectUrl, TokenUrl};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Installs the global tracing subscriber.
///
/// Verbosity follows `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for Discord REST calls.
///
/// Redirects are disabled so a crafted upstream response cannot bounce requests
/// carrying the caller's token to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for exchanging authorization codes with Discord.
///
/// Credentials are sent in the request body, as Discord's token endpoint expects.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client pointed at `{DISCORD_API_URL}/oauth2/token`
/// - `Err(AppError::ConfigErr)` - Token URL is not a valid URL
///
/// An unparsable `REDIRECT_URI` is logged and left out of the exchange.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let token_url = config.discord_token_url();
    let token_url = TokenUrl::new(token_url.clone()).map_err(|e| ConfigError::InvalidValue {
        name: "DISCORD_API_URL".to_string(),
        value: token_url,
        reason: e.to_string(),
    })?;

    let client_id = ClientId::new(config.discord_client_id.clone());
    let client = OAuth2Client::<EndpointNotSet>::new(client_id)
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_token_uri(token_url)
        .set_auth_type(AuthType::RequestBody);

    let redirect_url = config
        .discord_redirect_url
        .as_ref()
        .and_then(|url| match RedirectUrl::new(url.clone()) {
            Ok(redirect_url) => Some(redirect_url),
            Err(e) => {
                tracing::warn!("Ignoring invalid REDIRECT_URI {}: {}", url, e);
                None
            }
        });

    let client = match redirect_url {
        Some(redirect_url) => client.set_redirect_uri(redirect_url),
        None => client,
    };

    Ok(client)
}

/// Builds the CORS layer.
///
/// With `FRONTEND_URL` set only that origin is allowed, with credentials. Without it
/// any origin may call the API.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(frontend_url) = &config.frontend_url else {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    };

    let origin = HeaderValue::from_str(frontend_url.trim_end_matches('/')).map_err(|e| {
        ConfigError::InvalidValue {
            name: "FRONTEND_URL".to_string(),
            value: frontend_url.clone(),
            reason: e.to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}

/// Resolves with the signal's name once the process is asked to stop, by ctrl-c or,
/// on Unix, SIGTERM.
///
/// The SIGTERM handler is installed before this returns.
pub fn shutdown_signal() -> std::io::Result<impl Future<Output = &'static str>> {
    #[cfg(unix)]
    let mut terminate =
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

    Ok(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async move {
            terminate.recv().await;
        };
        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => "ctrl-c",
            _ = terminate => "SIGTERM",
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            bot_token: "token".to_string(),
            discord_client_id: "client".to_string(),
            discord_client_secret: "secret".to_string(),
            discord_redirect_url: Some("http://localhost:5173/callback".to_string()),
            discord_api_url: "https://discord.com/api".to_string(),
            port: 3000,
            frontend_url: None,
        }
    }

    #[test]
    fn builds_oauth_client() {
        assert!(setup_oauth_client(&config()).is_ok());
    }

    #[test]
    fn ignores_invalid_redirect_url() {
        let config = Config {
            discord_redirect_url: Some("not a url".to_string()),
            ..config()
        };

        assert!(setup_oauth_client(&config).is_ok());
    }

    #[test]
    fn rejects_invalid_token_url() {
        let config = Config {
            discord_api_url: "not a url".to_string(),
            ..config()
        };

        assert!(matches!(
            setup_oauth_client(&config),
            Err(AppError::ConfigErr(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn rejects_invalid_frontend_origin() {
        let config = Config {
            frontend_url: Some("http://bad\norigin".to_string()),
            ..config()
        };

        assert!(setup_cors(&config).is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn sigterm_resolves_shutdown_signal() {
        let signal = shutdown_signal().unwrap();

        let status = std::process::Command::new("kill")
            .args(["-TERM", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        let received = tokio::time::timeout(std::time::Duration::from_secs(5), signal)
            .await
            .unwrap();

        assert_eq!(received, "SIGTERM");
    }
}
