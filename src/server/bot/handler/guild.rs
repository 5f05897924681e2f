//! Guild event handlers.
//!
//! Serenity keeps its cache up to date on its own; these handlers only report guild
//! membership changes in the log.

use serenity::all::{Context, Guild, UnavailableGuild};

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// On startup this fires for every guild the bot is already in; `is_new` tells those
/// apart from guilds the bot was just added to.
pub async fn handle_guild_create(_ctx: Context, guild: Guild, is_new: Option<bool>) {
    if is_new == Some(true) {
        tracing::info!("Bot joined a new guild: {} ({})", guild.name, guild.id);
    } else {
        tracing::debug!("Guild available: {} ({})", guild.name, guild.id);
    }
}

/// Handles the guild_delete event when the bot is removed from a guild or it goes offline.
pub async fn handle_guild_delete(_ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
    let name = full
        .map(|guild| guild.name)
        .unwrap_or_else(|| "unknown".to_string());

    if incomplete.unavailable {
        tracing::warn!("Guild {} ({}) became unavailable", name, incomplete.id);
    } else {
        tracing::info!("Bot left guild {} ({})", name, incomplete.id);
    }
}
