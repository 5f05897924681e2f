//! Discord bot session backing the HTTP bridge.
//!
//! The bot keeps a live gateway connection whose cache is the source of truth for
//! which guilds and channels the bot can see. The bridge never touches Serenity
//! directly: it goes through the [`session::BotSession`] trait, implemented over
//! Serenity's cache and HTTP client by [`session::SerenityBotSession`] and by an
//! in-memory double in tests.
//!
//! The session is started once during startup and the HTTP listener is only bound
//! after it reports ready, so requests never see an empty cache.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild create/delete events and the channel cache
//! - `GUILD_MESSAGES` - Guild message events

pub mod handler;
pub mod session;
pub mod start;

#[cfg(test)]
pub mod fake;
