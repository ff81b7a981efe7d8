//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by services, the scheduler and startup.
//! Domain-specific errors (`ConfigError`, `LedgerError`) convert into it with `?`.
//! How an error is treated depends on where it surfaces: at startup every variant is
//! fatal, inside a sweep `NoActiveGuild` and `RoleNotFound` skip the cycle, and inside
//! a per-member step errors are logged and the loop continues.

pub mod config;
pub mod ledger;

use thiserror::Error;

use crate::error::{config::ConfigError, ledger::LedgerError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while loading environment variables.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Activity ledger could not be read, parsed or written.
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// The bot has not resolved a guild to operate on yet.
    ///
    /// Happens before the ready event or when the bot is in no guild at all.
    #[error("No active guild is available")]
    NoActiveGuild,

    /// The configured marker role does not exist in the active guild.
    #[error("Role '{0}' not found")]
    RoleNotFound(String),
}

impl AppError {
    /// Whether this error only skips the current sweep cycle.
    ///
    /// Missing guild context and a missing marker role are configuration states the
    /// next tick may have resolved, so they are reported as warnings rather than errors.
    pub fn is_sweep_abort(&self) -> bool {
        matches!(self, Self::NoActiveGuild | Self::RoleNotFound(_))
    }
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
