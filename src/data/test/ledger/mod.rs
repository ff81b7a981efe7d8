use crate::data::ledger::ActivityLedger;
use crate::error::ledger::LedgerError;
use chrono::{DateTime, Duration, Utc};
use serenity::all::UserId;
use std::collections::BTreeMap;
use test_utils::builder::TestBuilder;

mod flush;
mod last_seen;
mod load;
mod record_activity;

/// Parses the ledger file the same way an operator would read it.
fn parse_file(raw: &str) -> BTreeMap<String, i64> {
    serde_json::from_str(raw).expect("ledger file should be valid JSON")
}

/// Truncates to the millisecond precision the ledger stores.
fn millis(at: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(at.timestamp_millis()).unwrap()
}
