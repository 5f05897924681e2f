use serenity::all::{Client, GatewayIntents};
use std::fmt::Display;
use tokio::task::JoinHandle;

use crate::server::{
    bot::{
        handler::Handler,
        session::{ReadyReceiver, SerenityBotSession},
    },
    config::Config,
    error::{internal::InternalError, session::SessionError, AppError},
};

/// Logs the bot in and waits until its cache is populated.
///
/// Builds the Serenity client, spawns the gateway connection on its own task and
/// returns once the session has announced readiness. The gateway task keeps running
/// in the background afterwards; its exit is logged.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
///
/// # Returns
/// - `Ok(SerenityBotSession)` - Session connected with a populated cache
/// - `Err(AppError)` - Client creation failed, or the gateway stopped (for example
///   because Discord rejected the token) before the session became ready
pub async fn start_session(config: &Config) -> Result<SerenityBotSession, AppError> {
    // Configure gateway intents - what events the bot will receive
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let (ready_tx, ready_rx) = tokio::sync::watch::channel(None);

    let mut client = Client::builder(&config.bot_token, intents)
        .event_handler(Handler::new(ready_tx))
        .await?;

    let session = SerenityBotSession::new(
        client.cache.clone(),
        client.http.clone(),
        client.shard_manager.clone(),
        ready_rx.clone(),
    );

    tracing::info!("Starting Discord bot...");

    let gateway = tokio::spawn(async move { client.start().await });

    wait_until_ready(ready_rx, gateway).await?;

    Ok(session)
}

/// Waits for the readiness signal while watching the gateway task.
///
/// Whichever happens first wins: readiness returns `Ok`, while the gateway task
/// ending (successfully or not) means the session will never become ready.
pub async fn wait_until_ready<E>(
    mut ready_rx: ReadyReceiver,
    mut gateway: JoinHandle<Result<(), E>>,
) -> Result<(), AppError>
where
    E: Into<AppError> + Display + Send + 'static,
{
    let ready = async { ready_rx.wait_for(Option::is_some).await.map(|_| ()) };

    tokio::select! {
        result = ready => {
            if result.is_err() {
                return Err(SessionError::NotReady.into());
            }
        }
        result = &mut gateway => {
            return Err(match result {
                Ok(Ok(())) => SessionError::NotReady.into(),
                Ok(Err(e)) => e.into(),
                Err(e) => InternalError::GatewayTask(e.to_string()).into(),
            });
        }
    }

    tokio::spawn(async move {
        match gateway.await {
            Ok(Ok(())) => tracing::info!("Discord gateway connection closed"),
            Ok(Err(e)) => tracing::error!("Discord bot error: {}", e),
            Err(e) => tracing::error!("Discord gateway task failed: {}", e),
        }
    });

    Ok(())
}
