use chrono::Utc;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::sweep::SweepReport,
    service::{InactivitySweepService, SerenityGateway},
    state::AppState,
};

/// Starts the inactivity sweep scheduler
///
/// Runs one sweep every `SWEEP_INTERVAL_MINUTES`. The first sweep happens one interval
/// after startup, giving the ready event time to resolve the active guild.
///
/// # Arguments
/// - `state`: Application state holding the ledger, policy and active guild
/// - `discord_http`: Discord HTTP client for member listing and role changes
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; shut it down on exit
/// - `Err(AppError::SchedulerErr)` - The job could not be created or started
pub async fn start_scheduler(
    state: AppState,
    discord_http: Arc<Http>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;
    let interval = state.config.sweep_interval;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let state = state.clone();
        let http = discord_http.clone();

        Box::pin(async move {
            match run_sweep(&state, http).await {
                Ok(report) => log_report(&report),
                Err(e) if e.is_sweep_abort() => tracing::warn!("Skipping inactivity sweep: {}", e),
                Err(e) => tracing::error!("Inactivity sweep failed: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Inactivity sweep scheduler started (every {} minutes)",
        interval.as_secs() / 60
    );

    Ok(scheduler)
}

/// Runs one sweep against the active guild.
///
/// # Returns
/// - `Ok(SweepReport)` - Sweep completed
/// - `Err(AppError::NoActiveGuild)` - No guild has been resolved yet
/// - `Err(AppError)` - The sweep was aborted
pub async fn run_sweep(state: &AppState, discord_http: Arc<Http>) -> Result<SweepReport, AppError> {
    let guild_id = state
        .active_guild
        .get()
        .await
        .ok_or(AppError::NoActiveGuild)?;

    let gateway = SerenityGateway::new(discord_http, guild_id);
    let service = InactivitySweepService::new(&gateway, &state.ledger, &state.config.policy);

    tracing::debug!("Starting inactivity sweep for guild {}", guild_id);

    service.sweep(Utc::now()).await
}

fn log_report(report: &SweepReport) {
    tracing::info!(
        "Inactivity sweep complete: {} scanned, {} already marked, {} exempt, {} marked, {} failed",
        report.scanned,
        report.already_marked,
        report.exempt.len(),
        report.marked.len(),
        report.failed.len()
    );

    if !report.unnotified.is_empty() {
        tracing::warn!(
            "{} marked member(s) could not be notified: {:?}",
            report.unnotified.len(),
            report.unnotified
        );
    }
}
