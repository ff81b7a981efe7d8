//! Background jobs run on a `tokio-cron-scheduler` scheduler.

pub mod inactivity_sweep;
