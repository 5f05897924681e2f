use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /auth/token`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct ExchangeCodeDto {
    /// OAuth2 authorization code returned to the frontend by Discord.
    pub code: Option<String>,
}

/// Discord's OAuth2 token response as forwarded to the frontend.
///
/// Documents the common fields; any other field Discord returns for the grant
/// (`webhook`, `guild`, ...) is passed through unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TokenResponseDto {
    pub access_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Space separated list of granted scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}
