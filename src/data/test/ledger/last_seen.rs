use super::*;

/// Tests looking up a user with no recorded activity.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_user() {
    let test = TestBuilder::new()
        .with_ledger_entry(42, Utc::now())
        .build()
        .unwrap();
    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();

    assert_eq!(ledger.last_seen(UserId::new(99)).await, None);
}

/// Tests that clones share the same table.
///
/// Verifies that activity recorded through one handle is visible through another, as
/// the dispatcher and the sweep each hold their own clone.
///
/// Expected: Some on the second handle
#[tokio::test]
async fn clones_share_state() {
    let test = TestBuilder::new().build().unwrap();
    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();
    let other = ledger.clone();
    let at = Utc::now();

    ledger.record_activity(UserId::new(42), at).await.unwrap();

    assert_eq!(other.last_seen(UserId::new(42)).await, Some(millis(at)));
}
