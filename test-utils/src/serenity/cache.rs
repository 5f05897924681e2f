//! Test factory for a Serenity cache populated from guilds.

use serenity::{
    all::{Guild, GuildCreateEvent},
    cache::Cache,
};

/// Creates a cache that has seen a `GUILD_CREATE` for each of the given guilds.
///
/// Channels, roles and members attached to the guilds end up in the cache exactly as
/// they would after the gateway delivered them.
///
/// # Panics
/// - If a guild cannot be turned back into a `GUILD_CREATE` payload
pub fn create_test_cache(guilds: Vec<Guild>) -> Cache {
    let cache = Cache::new();

    for guild in guilds {
        let payload = serde_json::to_value(&guild).expect("Failed to serialize test guild");
        let mut event: GuildCreateEvent = serde_json::from_value(payload)
            .expect("Failed to create GUILD_CREATE event - invalid guild structure");
        cache.update(&mut event);
    }

    cache
}
