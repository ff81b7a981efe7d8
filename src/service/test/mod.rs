use crate::data::ActivityLedger;
use crate::model::policy::InactivityPolicy;
use chrono::{DateTime, Duration, Utc};
use serenity::all::{ChannelId, GuildId, UserId};
use test_utils::{builder::TestBuilder, context::TestContext};

use mock::*;


const GUILD_ID: u64 = 1000;

/// Loads the ledger seeded by `builder`, keeping the context alive alongside it.
async fn ledger_from(builder: TestBuilder) -> (TestContext, ActivityLedger) {
    let test = builder.build().unwrap();
    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();
    (test, ledger)
}

fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}
