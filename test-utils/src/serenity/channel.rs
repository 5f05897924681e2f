//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::{ChannelType, GuildChannel, PermissionOverwrite, Permissions};

/// Creates a test Serenity GuildChannel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - ID of the guild the channel belongs to
/// - `name` - Channel name
/// - `kind` - Channel type (text, voice, category, ...)
/// - `position` - Sorting position within the guild
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: ChannelType,
    position: u16,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": u8::from(kind),
        "name": name,
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "topic": null,
        "last_message_id": null,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}

/// Creates a role permission overwrite for a channel.
///
/// Pass the guild ID as `role_id` to target `@everyone`.
///
/// # Panics
/// - If the JSON cannot be deserialized into a PermissionOverwrite (indicates invalid test data)
pub fn create_test_role_overwrite(
    role_id: u64,
    allow: Permissions,
    deny: Permissions,
) -> PermissionOverwrite {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "type": 0,
        "allow": allow.bits().to_string(),
        "deny": deny.bits().to_string(),
    }))
    .expect("Failed to create test overwrite - invalid JSON structure")
}
