//! In-memory bot session for controller and service tests.

use serenity::{all::Permissions, async_trait};
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use crate::server::{
    bot::session::BotSession,
    error::session::SessionError,
    model::{
        discord::{BotIdentity, DiscordGuild, DiscordGuildChannel},
        embed::EmbedMessage,
    },
};

/// Bot session over a fixed set of guilds that records every sent embed.
///
/// Channels get `VIEW_CHANNEL | SEND_MESSAGES | EMBED_LINKS` unless overridden
/// with [`FakeBotSession::with_permissions`].
#[derive(Default)]
pub struct FakeBotSession {
    identity: Option<BotIdentity>,
    guilds: Vec<DiscordGuild>,
    permissions: HashMap<u64, Permissions>,
    sent: Mutex<Vec<(u64, EmbedMessage)>>,
}

impl FakeBotSession {
    /// A session that has not become ready yet.
    pub fn offline() -> Self {
        Self::default()
    }

    /// A ready session logged in as the given account.
    pub fn ready(id: u64, tag: &str) -> Self {
        Self {
            identity: Some(BotIdentity {
                id,
                tag: tag.to_string(),
            }),
            ..Self::default()
        }
    }

    pub fn with_guild(mut self, guild: &serenity::all::Guild) -> Self {
        self.guilds.push(DiscordGuild::from_serenity(guild));
        self
    }

    /// Overrides the bot's effective permissions in one channel.
    pub fn with_permissions(mut self, channel_id: u64, permissions: Permissions) -> Self {
        self.permissions.insert(channel_id, permissions);
        self
    }

    /// Embeds posted so far, with their target channel.
    pub fn sent_messages(&self) -> Vec<(u64, EmbedMessage)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl BotSession for FakeBotSession {
    fn identity(&self) -> Option<BotIdentity> {
        self.identity.clone()
    }

    fn guild_count(&self) -> usize {
        self.guilds.len()
    }

    fn guild_ids(&self) -> HashSet<u64> {
        self.guilds.iter().map(|guild| guild.guild_id).collect()
    }

    fn guild(&self, guild_id: u64) -> Option<DiscordGuild> {
        self.guilds
            .iter()
            .find(|guild| guild.guild_id == guild_id)
            .cloned()
    }

    fn channel(&self, channel_id: u64) -> Option<DiscordGuildChannel> {
        self.guilds
            .iter()
            .flat_map(|guild| guild.channels.iter())
            .find(|channel| channel.channel_id == channel_id)
            .cloned()
    }

    async fn bot_permissions(
        &self,
        channel: &DiscordGuildChannel,
    ) -> Result<Permissions, SessionError> {
        Ok(self
            .permissions
            .get(&channel.channel_id)
            .copied()
            .unwrap_or(
                Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES | Permissions::EMBED_LINKS,
            ))
    }

    async fn send_message(
        &self,
        channel_id: u64,
        embed: &EmbedMessage,
    ) -> Result<(), SessionError> {
        if self.channel(channel_id).is_none() {
            return Err(SessionError::ChannelNotFound(channel_id));
        }

        self.sent.lock().unwrap().push((channel_id, embed.clone()));

        Ok(())
    }

    async fn shutdown(&self) {}
}
