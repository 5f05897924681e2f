use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer <token>` header.
    ///
    /// Raised before any upstream call is made. Results in a 401 Unauthorized response.
    #[error("Request is missing a well-formed bearer token")]
    MissingBearerToken,

    /// The caller's guild list does not contain the guild the target channel belongs to.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Caller is not a member of guild {0}")]
    GuildAccessDenied(u64),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingBearerToken` → 401 Unauthorized
/// - `GuildAccessDenied` → 403 Forbidden
///
/// Errors are logged at debug level; the client only receives a short message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingBearerToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Missing authorization token")),
            )
                .into_response(),
            Self::GuildAccessDenied(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("You do not have access to this server")),
            )
                .into_response(),
        }
    }
}
