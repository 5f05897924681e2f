//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's gateway would deliver for a `GUILD_CREATE` payload.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects with channels
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `channel::create_test_role_overwrite` - Create role permission overwrites
//! - `role::create_test_role` - Create Serenity Role objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `cache::create_test_cache` - Create a Serenity Cache filled with guilds

pub mod cache;
pub mod channel;
pub mod guild;
pub mod member;
pub mod role;

pub use cache::create_test_cache;
pub use channel::{create_test_channel, create_test_role_overwrite};
pub use guild::create_test_guild;
pub use member::create_test_member;
pub use role::create_test_role;
