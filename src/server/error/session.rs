use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{internal::InternalError, InternalServerError},
};

/// Failures of the bot session's channel and messaging operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The channel is not in the bot's cache (unknown, deleted, or not visible to the bot).
    ///
    /// Results in a 404 Not Found response.
    #[error("Channel {0} not found in the bot's cache")]
    ChannelNotFound(u64),

    /// The bot is missing the permissions needed to post embeds in the channel.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Bot lacks permission to post embeds in channel {0}")]
    PermissionDenied(u64),

    /// The gateway connection ended before the session became ready.
    ///
    /// Results in a 503 Service Unavailable response.
    #[error("Bot session closed before becoming ready")]
    NotReady,

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Results in 500 Internal Server Error.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// The embed could not be converted into Discord's message format.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    InvalidEmbed(#[from] InternalError),
}

impl From<serenity::Error> for SessionError {
    fn from(err: serenity::Error) -> Self {
        SessionError::Discord(Box::new(err))
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        match self {
            Self::ChannelNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(
                    ErrorDto::new("Channel not found")
                        .with_hint("Make sure the bot has access to this channel"),
                ),
            )
                .into_response(),
            Self::PermissionDenied(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new(
                    "Bot lacks permission to send messages or embeds in this channel",
                )),
            )
                .into_response(),
            Self::NotReady => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto::new("Bot is offline")),
            )
                .into_response(),
            err @ (Self::Discord(_) | Self::InvalidEmbed(_)) => {
                InternalServerError(err).into_response()
            }
        }
    }
}
