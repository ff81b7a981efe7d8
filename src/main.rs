mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;

use tokio::sync::mpsc;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let ledger = startup::load_ledger(&config).await?;
    let state = AppState::new(config, ledger);

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let mut client = bot::start::init_bot(&state, events_tx).await?;

    // Activity events are processed off the gateway callbacks, one at a time
    tokio::spawn(bot::dispatcher::run(
        events_rx,
        state.clone(),
        client.http.clone(),
        client.cache.clone(),
    ));

    let mut scheduler =
        scheduler::inactivity_sweep::start_scheduler(state.clone(), client.http.clone()).await?;

    let shard_manager = client.shard_manager.clone();

    tracing::info!("Starting Discord bot");

    let result = tokio::select! {
        result = client.start() => result.map_err(AppError::from),
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received ctrl-c, shutting down");
            shard_manager.shutdown_all().await;
            Ok(())
        }
    };

    if let Err(e) = scheduler.shutdown().await {
        tracing::error!("Failed to shut down scheduler: {}", e);
    }

    state.ledger.flush().await?;
    tracing::info!("Activity ledger flushed");

    result
}
