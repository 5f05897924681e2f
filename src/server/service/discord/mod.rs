pub mod channel;
pub mod user_guild;

pub use channel::GuildChannelService;
pub use user_guild::UserGuildService;
