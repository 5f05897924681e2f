use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        embed::{SendEmbedDto, SendEmbedResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::BearerToken,
        service::{discord::UserGuildService, embed::EmbedService},
        state::AppState,
    },
};

pub static EMBED_TAG: &str = "embed";

const MISSING_FIELDS: &str = "Missing required fields (channelId, embed)";
const INVALID_JSON: &str = "Invalid JSON body";

/// Posts an embed to a channel on the caller's behalf.
#[utoipa::path(
    post,
    path = "/send-embed",
    tag = EMBED_TAG,
    security(("bearer" = [])),
    request_body = SendEmbedDto,
    responses(
        (status = 200, description = "Embed sent", body = SendEmbedResponseDto),
        (status = 400, description = "Invalid JSON, missing channel ID or embed, or invalid color", body = ErrorDto),
        (status = 401, description = "Missing or malformed bearer token", body = ErrorDto),
        (status = 403, description = "Bot cannot post there, or caller is not in the channel's guild", body = ErrorDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_embed(
    State(state): State<AppState>,
    token: BearerToken,
    payload: Result<Json<SendEmbedDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::debug!("Rejected send-embed body: {}", rejection.body_text());
            let message = match rejection {
                JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
                    INVALID_JSON
                }
                _ => MISSING_FIELDS,
            };
            return Err(AppError::BadRequest(message.to_string()));
        }
    };

    let (Some(channel_id), Some(embed)) = (
        payload.channel_id.filter(|id| !id.is_empty()),
        payload.embed,
    ) else {
        return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
    };

    let user_guilds = UserGuildService::new(&state.http_client, &state.discord_api_url);
    let channel = EmbedService::new(state.session.as_ref(), user_guilds)
        .send(token.secret(), &channel_id, embed)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SendEmbedResponseDto {
            success: true,
            message: "Embed sent successfully!".to_string(),
            channel: channel.into_ref_dto(),
        }),
    ))
}
