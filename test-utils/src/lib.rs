//! Embed Bridge Test Utils
//!
//! Shared fixtures for unit tests of the embed bridge. Discord's models are only
//! ever produced by the gateway, so tests build them the same way Serenity does:
//! by deserializing the JSON Discord would send.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::ChannelType;
//! use test_utils::serenity::{create_test_channel, create_test_guild};
//!
//! let general = create_test_channel(10, 1, "general", ChannelType::Text, 0);
//! let guild = create_test_guild(1, "Test Guild", vec![general]);
//! ```

pub mod serenity;
