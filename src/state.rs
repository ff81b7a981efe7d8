//! Application state shared by the event handler, the dispatcher and the scheduler.
//!
//! The state is built once during startup and cloned into each consumer. All fields
//! are cheap to clone:
//! - `Arc<Config>` is a reference-counted pointer
//! - `ActivityLedger` shares its table and file across clones
//! - `ActiveGuild` shares the resolved guild across clones

use serenity::all::GuildId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{config::Config, data::ActivityLedger};

/// The guild the bot operates on.
///
/// Seeded from configuration when a guild is pinned, otherwise resolved from the ready
/// event. Empty until then, which makes sweeps skip with `AppError::NoActiveGuild`.
#[derive(Clone, Default)]
pub struct ActiveGuild {
    inner: Arc<RwLock<Option<GuildId>>>,
}

impl ActiveGuild {
    pub fn new(guild_id: Option<GuildId>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(guild_id)),
        }
    }

    pub async fn get(&self) -> Option<GuildId> {
        *self.inner.read().await
    }

    pub async fn set(&self, guild_id: GuildId) {
        *self.inner.write().await = Some(guild_id);
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ledger: ActivityLedger,
    pub active_guild: ActiveGuild,
}

impl AppState {
    /// Creates the state, seeding the active guild from the configured `GUILD_ID`.
    pub fn new(config: Config, ledger: ActivityLedger) -> Self {
        let active_guild = ActiveGuild::new(config.guild_id);
        Self {
            config: Arc::new(config),
            ledger,
            active_guild,
        }
    }
}
