use crate::server::{
    bot::session::BotSession, error::AppError, model::discord::DiscordGuildChannel,
    util::parse::parse_snowflake,
};

/// Lists channels of guilds the bot belongs to, from the bot's cache.
pub struct GuildChannelService<'a> {
    session: &'a dyn BotSession,
}

impl<'a> GuildChannelService<'a> {
    pub fn new(session: &'a dyn BotSession) -> Self {
        Self { session }
    }

    /// Text channels of a guild, ordered by ascending position.
    ///
    /// # Arguments
    /// - `guild_id` - Guild ID as received in the request path
    ///
    /// # Returns
    /// - `Ok(Vec<DiscordGuildChannel>)` - Text channels of the guild
    /// - `Err(AppError::NotFound)` - The bot is not a member of the guild (or the ID is
    ///   not a snowflake)
    pub fn text_channels(&self, guild_id: &str) -> Result<Vec<DiscordGuildChannel>, AppError> {
        let guild = parse_snowflake(guild_id)
            .and_then(|guild_id| self.session.guild(guild_id))
            .ok_or_else(|| AppError::NotFound {
                message: "Bot is not a member of this server".to_string(),
                hint: Some("Make sure the bot has been added to this server".to_string()),
            })?;

        Ok(guild.text_channels())
    }
}
