use serenity::{
    all::{ChannelId, CreateMessage, GuildId, Member, Permissions, UserId},
    async_trait,
    cache::Cache,
    gateway::ShardManager,
    http::Http,
};
use std::{collections::HashSet, sync::Arc};
use tokio::sync::watch;

use crate::server::{
    error::session::SessionError,
    model::{
        discord::{BotIdentity, DiscordGuild, DiscordGuildChannel},
        embed::EmbedMessage,
    },
};

/// Sending half of the readiness signal; holds the bot identity once ready.
pub type ReadySender = watch::Sender<Option<BotIdentity>>;
/// Receiving half of the readiness signal.
pub type ReadyReceiver = watch::Receiver<Option<BotIdentity>>;

/// Read access to the bot's cached view of Discord plus the ability to post embeds.
///
/// The cache is mutated only by the gateway connection; everything exposed here is
/// a snapshot taken at call time.
#[async_trait]
pub trait BotSession: Send + Sync {
    /// The bot account, or `None` until the session is ready.
    fn identity(&self) -> Option<BotIdentity>;

    /// Number of guilds currently cached.
    fn guild_count(&self) -> usize;

    /// IDs of all guilds the bot is currently a member of.
    fn guild_ids(&self) -> HashSet<u64>;

    fn guild(&self, guild_id: u64) -> Option<DiscordGuild>;

    /// Looks a channel up across all cached guilds.
    fn channel(&self, channel_id: u64) -> Option<DiscordGuildChannel>;

    /// The bot's effective permissions in the given channel.
    async fn bot_permissions(
        &self,
        channel: &DiscordGuildChannel,
    ) -> Result<Permissions, SessionError>;

    /// Posts a single embed message to the channel.
    ///
    /// # Returns
    /// - `Ok(())` - Message delivered
    /// - `Err(SessionError::ChannelNotFound)` - Channel unknown to the bot
    /// - `Err(SessionError::PermissionDenied)` - Discord refused the post
    /// - `Err(SessionError::Discord)` - Any other Discord API failure
    async fn send_message(&self, channel_id: u64, embed: &EmbedMessage)
        -> Result<(), SessionError>;

    /// Closes the gateway connection.
    async fn shutdown(&self);
}

/// Bot session backed by a running Serenity client.
pub struct SerenityBotSession {
    cache: Arc<Cache>,
    http: Arc<Http>,
    shard_manager: Arc<ShardManager>,
    ready: ReadyReceiver,
}

impl SerenityBotSession {
    pub fn new(
        cache: Arc<Cache>,
        http: Arc<Http>,
        shard_manager: Arc<ShardManager>,
        ready: ReadyReceiver,
    ) -> Self {
        Self {
            cache,
            http,
            shard_manager,
            ready,
        }
    }
}

#[async_trait]
impl BotSession for SerenityBotSession {
    fn identity(&self) -> Option<BotIdentity> {
        self.ready.borrow().clone()
    }

    fn guild_count(&self) -> usize {
        self.cache.guild_count()
    }

    fn guild_ids(&self) -> HashSet<u64> {
        self.cache.guilds().into_iter().map(|id| id.get()).collect()
    }

    fn guild(&self, guild_id: u64) -> Option<DiscordGuild> {
        lookup_guild(&self.cache, guild_id)
    }

    fn channel(&self, channel_id: u64) -> Option<DiscordGuildChannel> {
        lookup_channel(&self.cache, channel_id)
    }

    async fn bot_permissions(
        &self,
        channel: &DiscordGuildChannel,
    ) -> Result<Permissions, SessionError> {
        let bot_id = self.cache.current_user().id;
        let guild_id = GuildId::new(channel.guild_id);

        // The bot's own member is normally part of GUILD_CREATE; fall back to the API
        let member = match cached_member(&self.cache, guild_id, bot_id) {
            Some(member) => member,
            None => self.http.get_member(guild_id, bot_id).await?,
        };

        channel_permissions(&self.cache, channel, &member)
    }

    async fn send_message(
        &self,
        channel_id: u64,
        embed: &EmbedMessage,
    ) -> Result<(), SessionError> {
        if self.channel(channel_id).is_none() {
            return Err(SessionError::ChannelNotFound(channel_id));
        }

        let message = CreateMessage::new().embed(embed.to_create_embed()?);

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await
            .map_err(|e| classify_send_error(channel_id, e))?;

        Ok(())
    }

    async fn shutdown(&self) {
        tracing::info!("Closing Discord gateway connection");
        self.shard_manager.shutdown_all().await;
    }
}

fn lookup_guild(cache: &Cache, guild_id: u64) -> Option<DiscordGuild> {
    // Snowflakes are never zero and Serenity's ID constructors reject it
    if guild_id == 0 {
        return None;
    }

    let guild = cache.guild(GuildId::new(guild_id))?;

    Some(DiscordGuild::from_serenity(&guild))
}

/// Finds a channel in any cached guild.
fn lookup_channel(cache: &Cache, channel_id: u64) -> Option<DiscordGuildChannel> {
    if channel_id == 0 {
        return None;
    }

    let channel_id = ChannelId::new(channel_id);

    cache.guilds().into_iter().find_map(|guild_id| {
        let guild = cache.guild(guild_id)?;
        let channel = guild
            .channels
            .get(&channel_id)
            .map(DiscordGuildChannel::from_serenity);
        channel
    })
}

fn cached_member(cache: &Cache, guild_id: GuildId, user_id: UserId) -> Option<Member> {
    cache
        .guild(guild_id)
        .and_then(|guild| guild.members.get(&user_id).cloned())
}

/// Effective permissions of `member` in the channel: guild roles plus the channel's
/// overwrites.
fn channel_permissions(
    cache: &Cache,
    channel: &DiscordGuildChannel,
    member: &Member,
) -> Result<Permissions, SessionError> {
    let not_found = || SessionError::ChannelNotFound(channel.channel_id);

    let guild = cache
        .guild(GuildId::new(channel.guild_id))
        .ok_or_else(not_found)?;
    let guild_channel = guild
        .channels
        .get(&ChannelId::new(channel.channel_id))
        .ok_or_else(not_found)?;

    Ok(guild.user_permissions_in(guild_channel, member))
}

/// Maps Discord's 403 / 404 answers to a post onto the session's error kinds.
fn classify_send_error(channel_id: u64, err: serenity::Error) -> SessionError {
    let status = match &err {
        serenity::Error::Http(http_err) => http_err.status_code().map(|code| code.as_u16()),
        _ => None,
    };

    status_error(channel_id, status).unwrap_or_else(|| SessionError::from(err))
}

fn status_error(channel_id: u64, status: Option<u16>) -> Option<SessionError> {
    match status {
        Some(403) => Some(SessionError::PermissionDenied(channel_id)),
        Some(404) => Some(SessionError::ChannelNotFound(channel_id)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::{ChannelType, Guild};
    use test_utils::serenity::{
        create_test_cache, create_test_channel, create_test_guild, create_test_member,
        create_test_role, create_test_role_overwrite,
    };

    const BOT_ID: u64 = 900;
    const POSTER_ROLE: u64 = 500;

    /// Guild 100 where @everyone may view, the bot's role may post embeds, and
    /// channel 11 strips embed links from @everyone.
    fn guild_with_bot() -> Guild {
        let mut restricted = create_test_channel(11, 100, "restricted", ChannelType::Text, 1);
        restricted.permission_overwrites.push(create_test_role_overwrite(
            100,
            Permissions::empty(),
            Permissions::EMBED_LINKS,
        ));

        let mut guild = create_test_guild(
            100,
            "Home",
            vec![
                create_test_channel(10, 100, "general", ChannelType::Text, 0),
                restricted,
            ],
        );

        for role in [
            create_test_role(100, "@everyone", Permissions::VIEW_CHANNEL),
            create_test_role(
                POSTER_ROLE,
                "Poster",
                Permissions::SEND_MESSAGES | Permissions::EMBED_LINKS,
            ),
        ] {
            guild.roles.insert(role.id, role);
        }

        let member = create_test_member(BOT_ID, 100, &[POSTER_ROLE]);
        guild.members.insert(member.user.id, member);

        guild
    }

    fn cache() -> Cache {
        create_test_cache(vec![
            guild_with_bot(),
            create_test_guild(
                200,
                "Away",
                vec![create_test_channel(20, 200, "lounge", ChannelType::Text, 0)],
            ),
        ])
    }

    #[test]
    fn channel_is_found_in_any_guild() {
        let cache = cache();

        let home = lookup_channel(&cache, 10).unwrap();
        let away = lookup_channel(&cache, 20).unwrap();

        assert_eq!((home.guild_id, home.name.as_str()), (100, "general"));
        assert_eq!((away.guild_id, away.name.as_str()), (200, "lounge"));
        assert!(lookup_channel(&cache, 30).is_none());
        assert!(lookup_channel(&cache, 0).is_none());
    }

    #[test]
    fn guild_lookup_ignores_zero_id() {
        let cache = cache();

        let guild = lookup_guild(&cache, 200).unwrap();

        assert_eq!(guild.name, "Away");
        assert!(lookup_guild(&cache, 0).is_none());
        assert!(lookup_guild(&cache, 300).is_none());
    }

    #[test]
    fn roles_grant_posting_rights() {
        let cache = cache();
        let channel = lookup_channel(&cache, 10).unwrap();
        let member = cached_member(&cache, GuildId::new(100), UserId::new(BOT_ID)).unwrap();

        let permissions = channel_permissions(&cache, &channel, &member).unwrap();

        assert!(permissions.contains(
            Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES | Permissions::EMBED_LINKS
        ));
    }

    #[test]
    fn everyone_overwrite_removes_embed_links() {
        let cache = cache();
        let channel = lookup_channel(&cache, 11).unwrap();
        let member = cached_member(&cache, GuildId::new(100), UserId::new(BOT_ID)).unwrap();

        let permissions = channel_permissions(&cache, &channel, &member).unwrap();

        assert!(permissions.contains(Permissions::SEND_MESSAGES));
        assert!(!permissions.contains(Permissions::EMBED_LINKS));
    }

    #[test]
    fn member_missing_from_cache_is_none() {
        let cache = cache();

        assert!(cached_member(&cache, GuildId::new(200), UserId::new(BOT_ID)).is_none());
    }

    #[test]
    fn permissions_of_uncached_channel_are_not_found() {
        let cache = cache();
        let member = create_test_member(BOT_ID, 100, &[]);
        let gone = DiscordGuildChannel {
            channel_id: 12,
            guild_id: 100,
            name: "gone".to_string(),
            kind: ChannelType::Text,
            position: 0,
        };

        let result = channel_permissions(&cache, &gone, &member);

        assert!(matches!(result, Err(SessionError::ChannelNotFound(12))));
    }

    #[test]
    fn discord_status_maps_to_session_error() {
        assert!(matches!(
            status_error(7, Some(403)),
            Some(SessionError::PermissionDenied(7))
        ));
        assert!(matches!(
            status_error(7, Some(404)),
            Some(SessionError::ChannelNotFound(7))
        ));
        assert!(status_error(7, Some(500)).is_none());
        assert!(status_error(7, None).is_none());
    }

    #[test]
    fn non_http_send_failure_stays_a_discord_error() {
        let err = classify_send_error(7, serenity::Error::Other("boom"));

        assert!(matches!(err, SessionError::Discord(_)));
    }
}
