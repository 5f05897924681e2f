mod model;
mod server;

use std::{future::IntoFuture, sync::Arc};

use crate::server::{
    bot::{self, session::BotSession},
    config::Config,
    error::AppError,
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let cors = startup::setup_cors(&config)?;

    // The listener is only bound once the bot cache is populated
    let session: Arc<dyn BotSession> = Arc::new(bot::start::start_session(&config).await?);

    let state = AppState::new(
        http_client,
        oauth_client,
        session.clone(),
        config.discord_api_url.clone(),
    );
    let app = router::app(state, cors);

    let shutdown = startup::shutdown_signal()?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on http://0.0.0.0:{}", config.port);

    tokio::select! {
        result = axum::serve(listener, app).into_future() => {
            result?;
        }
        signal = shutdown => {
            tracing::info!("Received {}, shutting down", signal);
        }
    }

    session.shutdown().await;

    Ok(())
}
