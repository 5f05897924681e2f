use serenity::all::{
    Context, EventHandler, Guild, GuildId, Ready, ShardStageUpdateEvent, UnavailableGuild,
};
use serenity::async_trait;
use std::sync::Arc;

use super::session::ReadySender;

pub mod guild;
pub mod ready;
pub mod shard;

/// Discord bot event handler
pub struct Handler {
    pub ready_tx: Arc<ReadySender>,
}

impl Handler {
    pub fn new(ready_tx: ReadySender) -> Self {
        Self {
            ready_tx: Arc::new(ready_tx),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.ready_tx, ctx, ready).await;
    }

    /// Called once every guild announced in `ready` has arrived in the cache
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(&self.ready_tx, ctx, guilds).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(ctx, guild, is_new).await;
    }

    /// Called when the bot leaves a guild or a guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(ctx, incomplete, full).await;
    }

    /// Called when a shard's connection stage changes
    async fn shard_stage_update(&self, ctx: Context, event: ShardStageUpdateEvent) {
        shard::handle_shard_stage_update(ctx, event).await;
    }
}
