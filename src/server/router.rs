use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::api::ErrorDto,
    server::{
        controller::{auth, discord, embed, health},
        middleware::{logging::log_request, panic::handle_panic},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Embed Bridge API"),
    modifiers(&BearerSecurity),
    tags(
        (name = "health", description = "Bridge status"),
        (name = "auth", description = "OAuth2 code exchange"),
        (name = "discord", description = "Guilds and channels shared with the bot"),
        (name = "embed", description = "Posting embeds"),
    )
)]
struct ApiDoc;

/// Registers the caller's Discord access token as the `bearer` security scheme.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// Routes of the bridge plus the OpenAPI document at `/api/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::status))
        .routes(routes!(auth::exchange_token))
        .routes(routes!(discord::get_user_guilds))
        .routes(routes!(discord::get_guild_channels))
        .routes(routes!(embed::send_embed))
        .split_for_parts();

    router
        .route("/api/openapi.json", get(move || async move { Json(api) }))
        .fallback(not_found)
}

/// Builds the complete application with logging, panic recovery and CORS applied.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    router()
        .layer(middleware::from_fn(log_request))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorDto::new("Not found")))
}
