//! Business logic: inactivity sweeps, activity handling and stats.
//!
//! Services borrow their collaborators (gateway, ledger, policy) for the duration of
//! one operation and are cheap to construct per event or per sweep.

pub mod activity;
pub mod gateway;
pub mod inactivity_sweep;
pub mod notice;
pub mod stats;

pub use activity::ActivityService;
pub use gateway::{GuildGateway, SerenityGateway};
pub use inactivity_sweep::InactivitySweepService;
pub use stats::MarkerStatsService;

#[cfg(test)]
mod test;
