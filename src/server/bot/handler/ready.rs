//! Ready event handlers for bot initialization.
//!
//! Serenity fires `ready` right after the gateway handshake, when guilds are still
//! unavailable placeholders, and `cache_ready` once every one of them has arrived.
//! The session is considered ready at `cache_ready` (or directly at `ready` when the
//! bot is in no guild at all, since `cache_ready` never fires then). A guild that
//! stays unavailable would hold `cache_ready` back forever, so after a grace period
//! readiness is published anyway with whatever the cache holds. Readiness is
//! published through the watch channel the startup code is waiting on.

use serenity::{
    all::{Context, GuildId, Ready},
    cache::Cache,
};
use std::{sync::Arc, time::Duration};

use crate::server::{bot::session::ReadySender, model::discord::BotIdentity};

/// How long to wait for `cache_ready` before serving with a partial cache.
pub const CACHE_READY_GRACE: Duration = Duration::from_secs(30);

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ready_tx` - Readiness signal of the session
/// - `_ctx` - Discord context
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ready_tx: &Arc<ReadySender>, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.tag());

    let identity = BotIdentity::from_serenity(&ready.user);

    if ready.guilds.is_empty() {
        announce_ready(ready_tx, identity, &[]);
        return;
    }

    let expected = ready.guilds.len();
    tracing::info!("Waiting for {} guilds to become available", expected);

    let ready_tx = ready_tx.clone();
    let cache = ctx.cache.clone();
    tokio::spawn(async move {
        publish_after_grace(&ready_tx, CACHE_READY_GRACE, identity, expected, || {
            cached_guilds(&cache, cache.guilds())
        })
        .await;
    });
}

/// Handles the cache ready event once all guilds have been received.
///
/// Fires again whenever a later guild arrives; only the first call announces readiness.
pub async fn handle_cache_ready(ready_tx: &ReadySender, ctx: Context, guilds: Vec<GuildId>) {
    if ready_tx.borrow().is_some() {
        return;
    }

    let identity = BotIdentity::from_serenity(&ctx.cache.current_user());
    let guilds = cached_guilds(&ctx.cache, guilds);

    announce_ready(ready_tx, identity, &guilds);
}

/// Publishes readiness after `grace` unless `cache_ready` got there first.
///
/// `snapshot` lists the guilds cached at that point; it is only called when the
/// fallback actually publishes.
///
/// # Returns
/// - `true` - Readiness was published by the fallback
/// - `false` - The session was already ready
pub async fn publish_after_grace<F>(
    ready_tx: &ReadySender,
    grace: Duration,
    identity: BotIdentity,
    expected: usize,
    snapshot: F,
) -> bool
where
    F: FnOnce() -> Vec<(u64, String)>,
{
    tokio::time::sleep(grace).await;

    if ready_tx.borrow().is_some() {
        return false;
    }

    let guilds = snapshot();
    tracing::warn!(
        "{} of {} guilds still unavailable after {:?}; serving with a partial cache",
        expected.saturating_sub(guilds.len()),
        expected,
        grace
    );

    announce_ready(ready_tx, identity, &guilds)
}

fn cached_guilds(cache: &Cache, guild_ids: Vec<GuildId>) -> Vec<(u64, String)> {
    guild_ids
        .into_iter()
        .filter_map(|guild_id| {
            let guild = cache.guild(guild_id)?;
            let entry = (guild_id.get(), guild.name.clone());
            Some(entry)
        })
        .collect()
}

/// Publishes the bot identity and logs the guilds the bot belongs to.
///
/// # Returns
/// - `true` - Readiness was published by this call
/// - `false` - The session had already been announced ready
pub fn announce_ready(ready_tx: &ReadySender, identity: BotIdentity, guilds: &[(u64, String)]) -> bool {
    let tag = identity.tag.clone();

    let published = ready_tx.send_if_modified(|current| {
        if current.is_some() {
            return false;
        }
        *current = Some(identity);
        true
    });

    if published {
        tracing::info!("Logged in as {}, serving {} guilds", tag, guilds.len());
        for (guild_id, name) in guilds {
            tracing::info!("  - {} (ID: {})", name, guild_id);
        }
    }

    published
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::watch;

    fn identity() -> BotIdentity {
        BotIdentity {
            id: 42,
            tag: "EmbedBot#0001".to_string(),
        }
    }

    #[test]
    fn publishes_identity_once() {
        let (ready_tx, ready_rx) = watch::channel(None);

        assert!(announce_ready(
            &ready_tx,
            identity(),
            &[(1, "First".to_string())]
        ));
        assert_eq!(*ready_rx.borrow(), Some(identity()));

        let other = BotIdentity {
            id: 7,
            tag: "Other".to_string(),
        };
        assert!(!announce_ready(&ready_tx, other, &[]));
        assert_eq!(*ready_rx.borrow(), Some(identity()));
    }

    #[tokio::test]
    async fn wakes_waiting_receivers() {
        let (ready_tx, mut ready_rx) = watch::channel(None);

        let waiter = tokio::spawn(async move {
            ready_rx
                .wait_for(Option::is_some)
                .await
                .map(|identity| identity.clone())
        });

        announce_ready(&ready_tx, identity(), &[]);

        let published = waiter.await.unwrap().unwrap();
        assert_eq!(published, Some(identity()));
    }

    #[tokio::test]
    async fn fallback_publishes_when_guilds_stay_unavailable() {
        let (ready_tx, ready_rx) = watch::channel(None);

        let published = publish_after_grace(
            &ready_tx,
            Duration::from_millis(10),
            identity(),
            3,
            || vec![(1, "First".to_string())],
        )
        .await;

        assert!(published);
        assert_eq!(*ready_rx.borrow(), Some(identity()));
    }

    #[tokio::test]
    async fn fallback_is_a_no_op_after_cache_ready() {
        let (ready_tx, ready_rx) = watch::channel(None);
        announce_ready(&ready_tx, identity(), &[]);

        let other = BotIdentity {
            id: 7,
            tag: "Other".to_string(),
        };
        let published = publish_after_grace(&ready_tx, Duration::from_millis(10), other, 1, || {
            panic!("cache snapshot taken after readiness")
        })
        .await;

        assert!(!published);
        assert_eq!(*ready_rx.borrow(), Some(identity()));
    }
}
