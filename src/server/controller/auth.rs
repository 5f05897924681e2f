use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{ExchangeCodeDto, TokenResponseDto},
    },
    server::{error::AppError, service::oauth::DiscordAuthService, state::AppState},
};

pub static AUTH_TAG: &str = "auth";

/// Exchanges the OAuth2 authorization code the frontend received for an access token.
#[utoipa::path(
    post,
    path = "/auth/token",
    tag = AUTH_TAG,
    request_body = ExchangeCodeDto,
    responses(
        (status = 200, description = "Discord's token response", body = TokenResponseDto),
        (status = 400, description = "Missing authorization code", body = ErrorDto),
        (status = 500, description = "Discord rejected the exchange", body = ErrorDto)
    ),
)]
pub async fn exchange_token(
    State(state): State<AppState>,
    payload: Result<Json<ExchangeCodeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let code = match payload {
        Ok(Json(payload)) => payload.code.filter(|code| !code.is_empty()),
        Err(rejection) => {
            tracing::debug!("Rejected token exchange body: {}", rejection.body_text());
            None
        }
    };

    let Some(code) = code else {
        return Err(AppError::BadRequest("Missing authorization code".to_string()));
    };

    let token = DiscordAuthService::new(&state.http_client, &state.oauth_client)
        .exchange_code(code)
        .await?;

    tracing::info!("Exchanged authorization code for an access token");

    Ok((StatusCode::OK, Json(token)))
}
