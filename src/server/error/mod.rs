//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every error body has the shape of [`ErrorDto`]: an `error` message, plus `details`
//! carrying an upstream payload or underlying error message where one exists.

pub mod auth;
pub mod config;
pub mod internal;
pub mod session;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, session::SessionError,
        upstream::UpstreamError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing credentials or denied caller access.
    ///
    /// Delegates to `AuthError::into_response()` (401 / 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Bot session lookup or messaging failure.
    ///
    /// Delegates to `SessionError::into_response()` (404 / 403 / 503 / 500).
    #[error(transparent)]
    SessionErr(#[from] SessionError),

    /// Discord REST API failure with the upstream payload attached.
    ///
    /// Results in 500 Internal Server Error carrying the upstream details.
    #[error(transparent)]
    UpstreamErr(#[from] UpstreamError),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Results in 500 Internal Server Error when
    /// Discord bot operations fail.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error, e.g. failing to bind the listen socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal failure.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message and an optional hint
    /// telling the user how to fix the situation.
    #[error("{message}")]
    NotFound {
        message: String,
        hint: Option<String>,
    },
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - Variable - For `AuthErr`, `SessionErr` and `UpstreamErr`, delegated to their own mapping
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::SessionErr(err) => err.into_response(),
            Self::UpstreamErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::NotFound { message, hint } => {
                let mut body = ErrorDto::new(message);
                body.hint = hint;
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This is the catch-all for request-level failures: the error is logged and its
/// message is returned under `details` so the dashboard can show what went wrong.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(
                ErrorDto::new("Internal server error")
                    .with_details(serde_json::Value::String(self.0.to_string())),
            ),
        )
            .into_response()
    }
}
