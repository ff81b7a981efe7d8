//! Persistence layer.
//!
//! The bot's only durable state is the activity ledger; role membership is always read
//! back from Discord rather than stored.

pub mod ledger;

pub use ledger::ActivityLedger;

#[cfg(test)]
mod test;
