//! Shard connection stage handler.
//!
//! Gateway hiccups are recovered by Serenity's shard runner; they are logged here
//! and never bring the process down.

use serenity::all::{ConnectionStage, Context, ShardStageUpdateEvent};

pub async fn handle_shard_stage_update(_ctx: Context, event: ShardStageUpdateEvent) {
    match event.new {
        ConnectionStage::Disconnected | ConnectionStage::Resuming => tracing::warn!(
            "Shard {} connection stage changed from {} to {}",
            event.shard_id,
            event.old,
            event.new
        ),
        _ => tracing::debug!(
            "Shard {} connection stage changed from {} to {}",
            event.shard_id,
            event.old,
            event.new
        ),
    }
}
