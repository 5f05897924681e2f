use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        discord::{ChannelDto, UserGuildDto},
    },
    server::{
        error::AppError,
        middleware::auth::BearerToken,
        service::discord::{GuildChannelService, UserGuildService},
        state::AppState,
    },
};

pub static DISCORD_TAG: &str = "discord";

/// Lists the servers the caller administers that the bot has also joined.
#[utoipa::path(
    get,
    path = "/guilds",
    tag = DISCORD_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Guilds the caller can manage through the bot", body = Vec<UserGuildDto>),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorDto),
        (status = 500, description = "Discord API failure", body = ErrorDto)
    ),
)]
pub async fn get_user_guilds(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let bot_guilds = state.session.guild_ids();

    let guilds = UserGuildService::new(&state.http_client, &state.discord_api_url)
        .admin_guilds(token.secret(), &bot_guilds)
        .await?;

    tracing::info!("Caller can manage {} guilds through the bot", guilds.len());

    Ok((StatusCode::OK, Json(guilds)))
}

/// Lists the text channels of a server the bot has joined, in display order.
#[utoipa::path(
    get,
    path = "/guilds/{guild_id}/channels",
    tag = DISCORD_TAG,
    security(("bearer" = [])),
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Text channels ordered by position", body = Vec<ChannelDto>),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorDto),
        (status = 404, description = "Bot is not a member of the guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_channels(
    State(state): State<AppState>,
    _token: BearerToken,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let channels = GuildChannelService::new(state.session.as_ref()).text_channels(&guild_id)?;

    let dtos: Vec<ChannelDto> = channels
        .into_iter()
        .map(|channel| channel.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
