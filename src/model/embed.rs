use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Reads an optional field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Body of `POST /send-embed`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct SendEmbedDto {
    #[serde(rename = "channelId", default, deserialize_with = "lenient")]
    pub channel_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub embed: Option<EmbedDto>,
}

/// Formatted message as composed in the dashboard.
///
/// Every field is optional; only those present and non-empty end up in the message.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct EmbedDto {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Either an integer or a `#rrggbb` hex string.
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<EmbedColorDto>,
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<EmbedMediaDto>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<EmbedMediaDto>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<EmbedAuthorDto>,
    #[serde(default, deserialize_with = "lenient")]
    pub footer: Option<EmbedFooterDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum EmbedColorDto {
    Number(u32),
    Hex(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct EmbedMediaDto {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct EmbedAuthorDto {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct EmbedFooterDto {
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SendEmbedResponseDto {
    pub success: bool,
    pub message: String,
    pub channel: ChannelRefDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ChannelRefDto {
    pub id: String,
    pub name: String,
}
