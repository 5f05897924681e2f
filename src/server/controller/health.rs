use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::health::{BotStatusDto, HealthDto},
    server::state::AppState,
};

pub static HEALTH_TAG: &str = "health";

/// Reports that the bridge is up, and who the bot is once its session is ready.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Bridge is online", body = HealthDto)
    ),
)]
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let bot = match state.session.identity() {
        Some(identity) => BotStatusDto::Online(identity.into_dto(state.session.guild_count())),
        None => BotStatusDto::Offline("offline".to_string()),
    };

    Json(HealthDto {
        status: "online".to_string(),
        bot,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
