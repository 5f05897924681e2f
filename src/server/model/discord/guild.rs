//! Discord guild domain model.

use serenity::all::Guild;

use super::DiscordGuildChannel;

/// Represents a Discord guild the bot is a member of, with its cached channels.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuild {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Guild display name.
    pub name: String,
    /// All cached channels of the guild, of every kind.
    pub channels: Vec<DiscordGuildChannel>,
}

impl DiscordGuild {
    /// Converts a cached Serenity guild to a domain model.
    pub fn from_serenity(guild: &Guild) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            channels: guild
                .channels
                .values()
                .map(DiscordGuildChannel::from_serenity)
                .collect(),
        }
    }

    /// Returns the guild's text channels ordered by ascending position.
    ///
    /// Channels sharing a position are ordered by ID so the listing is stable.
    pub fn text_channels(self) -> Vec<DiscordGuildChannel> {
        let mut channels: Vec<DiscordGuildChannel> = self
            .channels
            .into_iter()
            .filter(DiscordGuildChannel::is_text)
            .collect();

        channels.sort_by_key(|channel| (channel.position, channel.channel_id));

        channels
    }
}
