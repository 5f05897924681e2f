use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A guild as listed by Discord's `GET /users/@me/guilds` for the calling user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserGuildDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    /// The caller's permission bitmask in this guild.
    ///
    /// Discord sends this as a decimal string; plain integers are accepted as well.
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_permissions"
    )]
    #[schema(value_type = String)]
    pub permissions: u64,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A text channel of a guild the bot belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ChannelDto {
    pub id: String,
    pub name: String,
    /// Discord channel type number, `0` for guild text channels.
    #[serde(rename = "type")]
    pub kind: u8,
    pub position: u16,
}

fn serialize_u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

fn deserialize_permissions<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Permissions {
        Number(u64),
        Text(String),
    }

    match Permissions::deserialize(deserializer)? {
        Permissions::Number(bits) => Ok(bits),
        Permissions::Text(bits) => bits.parse::<u64>().map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_permissions() {
        let guild: UserGuildDto = serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "Guild",
            "icon": null,
            "owner": false,
            "permissions": "2147483656",
            "features": []
        }))
        .unwrap();

        assert_eq!(guild.permissions, 2147483656);
    }

    #[test]
    fn parses_numeric_permissions_and_missing_optionals() {
        let guild: UserGuildDto =
            serde_json::from_value(serde_json::json!({ "id": "2", "name": "Guild", "permissions": 8 }))
                .unwrap();

        assert_eq!(guild.permissions, 8);
        assert!(!guild.owner);
        assert!(guild.icon.is_none());
    }

    #[test]
    fn serializes_permissions_as_string() {
        let guild = UserGuildDto {
            id: "3".to_string(),
            name: "Guild".to_string(),
            icon: None,
            owner: true,
            permissions: 8,
            features: Vec::new(),
        };

        let value = serde_json::to_value(&guild).unwrap();
        assert_eq!(value["permissions"], "8");
    }

    #[test]
    fn rejects_garbage_permissions() {
        let result: Result<UserGuildDto, _> = serde_json::from_value(
            serde_json::json!({ "id": "4", "name": "Guild", "permissions": "admin" }),
        );

        assert!(result.is_err());
    }
}
