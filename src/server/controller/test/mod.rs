//! Router-level tests driving the full application with an in-memory bot session
//! and a mock Discord REST API.


use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use serenity::all::ChannelType;
use std::sync::Arc;
use test_utils::serenity::{create_test_channel, create_test_guild};
use tower::ServiceExt;

use crate::server::{
    bot::fake::FakeBotSession, config::Config, router, startup, state::AppState,
};

pub const GUILD_ID: u64 = 100;
pub const ANNOUNCEMENTS_ID: u64 = 10;

/// A ready session in one guild with a mix of channel kinds.
pub fn ready_session() -> FakeBotSession {
    FakeBotSession::ready(1, "EmbedBot#0001").with_guild(&create_test_guild(
        GUILD_ID,
        "Test Guild",
        vec![
            create_test_channel(12, GUILD_ID, "rules", ChannelType::Text, 2),
            create_test_channel(ANNOUNCEMENTS_ID, GUILD_ID, "announcements", ChannelType::Text, 0),
            create_test_channel(11, GUILD_ID, "Lobby", ChannelType::Voice, 1),
            create_test_channel(13, GUILD_ID, "Info", ChannelType::Category, 0),
        ],
    ))
}

/// Builds the application against the given session and upstream API URL.
pub fn test_app(session: Arc<FakeBotSession>, api_url: &str) -> Router {
    let config = Config {
        bot_token: "bot-token".to_string(),
        discord_client_id: "client-id".to_string(),
        discord_client_secret: "client-secret".to_string(),
        discord_redirect_url: Some("http://localhost:5173/callback".to_string()),
        discord_api_url: api_url.to_string(),
        port: 3000,
        frontend_url: None,
    };

    let state = AppState::new(
        startup::setup_reqwest_client().unwrap(),
        startup::setup_oauth_client(&config).unwrap(),
        session,
        config.discord_api_url.clone(),
    );

    router::app(state, startup::setup_cors(&config).unwrap())
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Sends a request and returns the status with the parsed JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
