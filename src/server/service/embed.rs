use chrono::Utc;
use serenity::all::Permissions;

use crate::{
    model::embed::EmbedDto,
    server::{
        bot::session::BotSession,
        error::{auth::AuthError, session::SessionError, AppError},
        model::{discord::DiscordGuildChannel, embed::EmbedMessage},
        service::discord::UserGuildService,
        util::parse::parse_snowflake,
    },
};

/// Permissions the bot needs in a channel to post an embed there.
const REQUIRED_PERMISSIONS: Permissions =
    Permissions::SEND_MESSAGES.union(Permissions::EMBED_LINKS);

/// Posts embeds on behalf of the caller after checking both sides' access.
pub struct EmbedService<'a> {
    session: &'a dyn BotSession,
    user_guilds: UserGuildService<'a>,
}

impl<'a> EmbedService<'a> {
    pub fn new(session: &'a dyn BotSession, user_guilds: UserGuildService<'a>) -> Self {
        Self {
            session,
            user_guilds,
        }
    }

    /// Posts an embed to a channel.
    ///
    /// Checks run in order and stop at the first failure: the channel must be known
    /// to the bot, the bot must be allowed to post embeds in it, and the caller must be
    /// a member of the channel's guild. Only then is the embed resolved and sent.
    ///
    /// # Arguments
    /// - `access_token` - The caller's OAuth2 access token
    /// - `channel_id` - Target channel ID as received in the request body
    /// - `embed` - Embed payload
    ///
    /// # Returns
    /// - `Ok(DiscordGuildChannel)` - The channel the embed was posted to
    /// - `Err(AppError::SessionErr(ChannelNotFound))` - Channel unknown to the bot
    /// - `Err(AppError::SessionErr(PermissionDenied))` - Bot cannot post embeds there
    /// - `Err(AppError::AuthErr(GuildAccessDenied))` - Caller is not in the channel's guild
    /// - `Err(AppError::BadRequest)` - Invalid embed color
    /// - `Err(AppError::UpstreamErr)` - The caller's guild list could not be fetched
    pub async fn send(
        &self,
        access_token: &str,
        channel_id: &str,
        embed: EmbedDto,
    ) -> Result<DiscordGuildChannel, AppError> {
        let channel_id = parse_snowflake(channel_id).unwrap_or_default();
        let channel = self
            .session
            .channel(channel_id)
            .ok_or(SessionError::ChannelNotFound(channel_id))?;

        let permissions = self.session.bot_permissions(&channel).await?;
        if !permissions.contains(REQUIRED_PERMISSIONS) {
            tracing::info!(
                "Bot lacks {:?} in channel {}",
                REQUIRED_PERMISSIONS - permissions,
                channel.channel_id
            );
            return Err(SessionError::PermissionDenied(channel.channel_id).into());
        }

        let caller_guilds = self.user_guilds.guild_ids(access_token).await?;
        if !caller_guilds.contains(&channel.guild_id) {
            return Err(AuthError::GuildAccessDenied(channel.guild_id).into());
        }

        let message = EmbedMessage::from_dto(embed, Utc::now())?;

        self.session
            .send_message(channel.channel_id, &message)
            .await?;

        tracing::info!(
            "Sent embed to #{} ({}) in guild {}",
            channel.name,
            channel.channel_id,
            channel.guild_id
        );

        Ok(channel)
    }
}
