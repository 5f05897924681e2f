use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::error::{auth::AuthError, AppError};

/// The caller's Discord OAuth2 access token.
///
/// Extracted from an `Authorization: Bearer <token>` header. The token is only ever
/// forwarded to Discord; it is never logged or stored. Requests without a
/// well-formed header are rejected with 401 before the handler runs.
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn secret(&self) -> &str {
        &self.0
    }

    /// Parses an `Authorization` header value.
    pub fn from_header(value: &str) -> Option<Self> {
        let token = value.strip_prefix("Bearer ")?.trim();

        if token.is_empty() {
            return None;
        }

        Some(Self(token.to_string()))
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(BearerToken::from_header)
            .ok_or(AuthError::MissingBearerToken)?;

        Ok(token)
    }
}
