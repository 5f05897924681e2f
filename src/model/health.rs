use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HealthDto {
    /// Always `"online"` while the process is serving requests.
    pub status: String,
    pub bot: BotStatusDto,
    pub version: String,
}

/// Bot identity once the session is ready, otherwise the literal string `"offline"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum BotStatusDto {
    Online(BotIdentityDto),
    Offline(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BotIdentityDto {
    /// Bot account tag, e.g. `EmbedBot#1234`.
    pub username: String,
    pub id: String,
    /// Number of servers currently in the bot's cache.
    pub servers: usize,
}
