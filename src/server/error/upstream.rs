use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oauth2::{basic::BasicErrorResponse, RequestTokenError};
use serde_json::Value;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure reported by, or while talking to, Discord's REST API.
///
/// Carries whatever Discord answered (its JSON error body, or the raw text when it
/// is not JSON) so the frontend can see why the call failed. Transport failures
/// carry the transport error message instead.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct UpstreamError {
    /// Short description of the operation that failed, returned as `error`.
    pub message: String,
    /// Upstream payload or transport error, returned as `details`.
    pub details: Option<Value>,
}

impl UpstreamError {
    pub fn new(message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            message: message.into(),
            details,
        }
    }

    /// Builds an error from a non-success upstream response body.
    pub fn from_body(message: impl Into<String>, body: &[u8]) -> Self {
        Self::new(message, Some(details_from_body(body)))
    }

    /// Builds an error from a failed outbound request.
    pub fn from_transport(message: impl Into<String>, err: &reqwest::Error) -> Self {
        Self::new(message, Some(Value::String(err.to_string())))
    }
}

/// Parses an upstream body as JSON, falling back to the body text.
fn details_from_body(body: &[u8]) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

impl<RE> From<RequestTokenError<RE, BasicErrorResponse>> for UpstreamError
where
    RE: std::error::Error + 'static,
{
    fn from(err: RequestTokenError<RE, BasicErrorResponse>) -> Self {
        let details = match &err {
            RequestTokenError::ServerResponse(response) => serde_json::to_value(response)
                .unwrap_or_else(|_| Value::String(response.to_string())),
            RequestTokenError::Parse(_, body) => details_from_body(body),
            RequestTokenError::Request(e) => Value::String(e.to_string()),
            RequestTokenError::Other(message) => Value::String(message.clone()),
        };

        Self::new("Discord authorization failed", Some(details))
    }
}

/// Upstream failures are surfaced to the caller as 500 with the upstream payload.
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::error!("{}: {:?}", self.message, self.details);

        let mut body = ErrorDto::new(self.message);
        body.details = self.details;

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
