//! Server-side domain models.
//!
//! Domain models are converted from Serenity's cache types at the bot session
//! boundary and transformed to DTOs at the controller boundary, so neither the
//! services nor the tests depend on the shape of Serenity's structs.

pub mod discord;
pub mod embed;
pub mod token;
