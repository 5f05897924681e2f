use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Only the bot token is mandatory; the OAuth2 variables fall back to empty values
    /// and surface later as upstream authorization failures. Check the `.env.example`
    /// file for the full list of variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidValue {
        /// Name of the offending variable
        name: String,
        /// The value as found in the environment
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
