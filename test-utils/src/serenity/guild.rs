//! Test factory for creating Serenity Guild objects.
//!
//! Creates a `Guild` the way the gateway delivers it on `GUILD_CREATE`, then attaches
//! the given channels so tests can exercise channel lookups against a populated cache
//! snapshot.

use serenity::all::{Guild, GuildChannel};

/// Creates a test Serenity Guild holding the provided channels.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `channels` - Channels to attach, keyed by their own IDs
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::guild::create_test_guild;
///
/// let guild = create_test_guild(123456789, "Test Guild", Vec::new());
/// assert!(guild.channels.is_empty());
/// ```
pub fn create_test_guild(guild_id: u64, name: &str, channels: Vec<GuildChannel>) -> Guild {
    let mut guild: Guild = serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure");

    for channel in channels {
        guild.channels.insert(channel.id, channel);
    }

    guild
}
