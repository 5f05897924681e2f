pub mod bot;
pub mod channel;
pub mod guild;

pub use bot::BotIdentity;
pub use channel::DiscordGuildChannel;
pub use guild::DiscordGuild;
