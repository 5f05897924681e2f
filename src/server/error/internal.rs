use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to convert Unix timestamp to Discord timestamp
    ///
    /// Occurs when the send time of an embed cannot be converted to Discord's
    /// timestamp format, typically due to timestamp being out of range.
    /// Results in a 500 Internal Server Error.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },

    /// The task driving the gateway connection panicked or was cancelled.
    #[error("Discord gateway task failed: {0}")]
    GatewayTask(String),
}
