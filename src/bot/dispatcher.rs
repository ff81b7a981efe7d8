//! Sequential processing of activity events.
//!
//! Events arrive from the gateway handler over an unbounded channel and are handled one
//! at a time, so ledger writes and role removals for a user happen in the order the
//! events were received. The loop ends when every sender has been dropped.

use serenity::all::Cache;
use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    model::{activity::ActivityEvent, sweep::ActivityOutcome},
    service::{ActivityService, SerenityGateway},
    state::AppState,
};

/// Runs the dispatcher until the event channel closes.
///
/// # Arguments
/// - `events` - Receiving half of the activity event channel
/// - `state` - Application state holding the ledger, policy and active guild
/// - `http` - Discord HTTP client used for lookups and role changes
/// - `cache` - Gateway cache consulted before the HTTP API
pub async fn run(
    mut events: UnboundedReceiver<ActivityEvent>,
    state: AppState,
    http: Arc<Http>,
    cache: Arc<Cache>,
) {
    while let Some(event) = events.recv().await {
        if state.active_guild.get().await != Some(event.guild_id) {
            continue;
        }

        let gateway = SerenityGateway::new(http.clone(), event.guild_id).with_cache(cache.clone());
        let service = ActivityService::new(&gateway, &state.ledger, &state.config.policy);

        match service.handle_event(&event).await {
            Ok(ActivityOutcome::Restored) => tracing::debug!(
                "Restored user {} after {:?} in channel {}",
                event.user_id,
                event.kind,
                event.channel_id
            ),
            Ok(_) => {}
            Err(e) => tracing::error!(
                "Failed to process {:?} from user {} in channel {}: {}",
                event.kind,
                event.user_id,
                event.channel_id,
                e
            ),
        }
    }

    tracing::info!("Activity dispatcher stopped");
}
