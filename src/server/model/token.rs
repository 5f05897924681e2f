//! Discord's OAuth2 token response, kept exactly as Discord sent it.
//!
//! The oauth2 crate needs typed access to the token, its type, lifetime and scopes.
//! Those are read out of the received JSON object, which is kept whole so the
//! frontend gets every field, including grant-specific ones such as `webhook` or
//! `guild`, untouched.

use oauth2::{AccessToken, RefreshToken, Scope, TokenResponse, TokenType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, time::Duration};

/// Token type as Discord spells it, e.g. `Bearer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscordTokenType(pub String);

impl TokenType for DiscordTokenType {}

#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct DiscordTokenResponse {
    access_token: AccessToken,
    token_type: DiscordTokenType,
    expires_in: Option<u64>,
    refresh_token: Option<RefreshToken>,
    scopes: Option<Vec<Scope>>,
    raw: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for DiscordTokenResponse {
    type Error = String;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let text = |name: &str| raw.get(name).and_then(Value::as_str).map(str::to_string);

        let access_token = text("access_token").ok_or("missing field `access_token`")?;
        let token_type = text("token_type").ok_or("missing field `token_type`")?;

        Ok(Self {
            access_token: AccessToken::new(access_token),
            token_type: DiscordTokenType(token_type),
            expires_in: raw.get("expires_in").and_then(Value::as_u64),
            refresh_token: text("refresh_token").map(RefreshToken::new),
            scopes: text("scope").map(|scope| {
                scope
                    .split_whitespace()
                    .map(|scope| Scope::new(scope.to_string()))
                    .collect()
            }),
            raw,
        })
    }
}

impl From<DiscordTokenResponse> for Map<String, Value> {
    fn from(token: DiscordTokenResponse) -> Self {
        token.raw
    }
}

// Keeps the secrets out of logs; the raw map holds them in clear text.
impl fmt::Debug for DiscordTokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordTokenResponse")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scopes", &self.scopes)
            .finish_non_exhaustive()
    }
}

impl TokenResponse for DiscordTokenResponse {
    type TokenType = DiscordTokenType;

    fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    fn token_type(&self) -> &DiscordTokenType {
        &self.token_type
    }

    fn expires_in(&self) -> Option<Duration> {
        self.expires_in.map(Duration::from_secs)
    }

    fn refresh_token(&self) -> Option<&RefreshToken> {
        self.refresh_token.as_ref()
    }

    fn scopes(&self) -> Option<&Vec<Scope>> {
        self.scopes.as_ref()
    }
}
