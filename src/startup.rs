use tracing_subscriber::EnvFilter;

use crate::{config::Config, data::ActivityLedger, error::AppError};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "mia_bot=info,serenity=warn";

/// Installs the global tracing subscriber.
///
/// Log levels are taken from `RUST_LOG` when present, otherwise the bot logs at info
/// level and Serenity only reports warnings.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Loads the activity ledger from the configured path.
///
/// A missing file starts an empty ledger; an unreadable or malformed file is fatal so
/// existing activity history is never silently discarded.
///
/// # Arguments
/// - `config` - Application configuration containing the ledger path
///
/// # Returns
/// - `Ok(ActivityLedger)` - Ledger ready for use
/// - `Err(AppError::LedgerErr)` - The ledger file could not be read, parsed or created
pub async fn load_ledger(config: &Config) -> Result<ActivityLedger, AppError> {
    let ledger = ActivityLedger::load(&config.ledger_path).await?;

    tracing::info!(
        "Loaded activity ledger from {} ({} users)",
        config.ledger_path.display(),
        ledger.len().await
    );

    Ok(ledger)
}
