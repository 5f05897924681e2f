//! Discord guild channel domain model.
//!
//! Snapshot of a channel from the bot's cache, tracking identity, kind and position
//! for filtering and display ordering.

use serenity::all::{ChannelType, GuildChannel};

use crate::model::{discord::ChannelDto, embed::ChannelRefDto};

/// Discord channel within a guild with display properties and hierarchy position.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuildChannel {
    /// Discord channel ID as a u64.
    pub channel_id: u64,
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Channel display name.
    pub name: String,
    /// Channel kind; only text channels are exposed to callers.
    pub kind: ChannelType,
    /// Channel position in the guild's channel list (for display ordering).
    pub position: u16,
}

impl DiscordGuildChannel {
    /// Converts a cached Serenity channel to a domain model.
    pub fn from_serenity(channel: &GuildChannel) -> Self {
        Self {
            channel_id: channel.id.get(),
            guild_id: channel.guild_id.get(),
            name: channel.name.clone(),
            kind: channel.kind,
            position: channel.position,
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == ChannelType::Text
    }

    /// Converts domain model to DTO for channel listings.
    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.channel_id.to_string(),
            name: self.name,
            kind: u8::from(self.kind),
            position: self.position,
        }
    }

    /// Converts to the short `{id, name}` reference returned after sending an embed.
    pub fn into_ref_dto(self) -> ChannelRefDto {
        ChannelRefDto {
            id: self.channel_id.to_string(),
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_channel;

    #[test]
    fn converts_serenity_channel() {
        let channel = create_test_channel(10, 1, "general", ChannelType::Text, 3);

        let channel = DiscordGuildChannel::from_serenity(&channel);

        assert_eq!(channel.channel_id, 10);
        assert_eq!(channel.guild_id, 1);
        assert_eq!(channel.name, "general");
        assert_eq!(channel.position, 3);
        assert!(channel.is_text());
    }

    #[test]
    fn voice_channels_are_not_text() {
        let channel = create_test_channel(11, 1, "lounge", ChannelType::Voice, 0);

        assert!(!DiscordGuildChannel::from_serenity(&channel).is_text());
    }

    #[test]
    fn dto_uses_string_id_and_numeric_type() {
        let channel = create_test_channel(12, 1, "news", ChannelType::Text, 1);

        let dto = DiscordGuildChannel::from_serenity(&channel).into_dto();
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["id"], "12");
        assert_eq!(value["type"], 0);
        assert_eq!(value["position"], 1);
    }
}
