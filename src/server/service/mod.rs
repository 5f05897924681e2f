//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the two sources of truth the bridge
//! talks to: Discord's REST API (on behalf of the caller, with the caller's token)
//! and the bot session's cache. They are responsible for:
//!
//! - **Business Logic**: Permission checks and filtering rules
//! - **Orchestration**: Ordering upstream calls and session lookups
//! - **Domain Models**: Working with domain models rather than raw Serenity types

pub mod discord;
pub mod embed;
pub mod oauth;
