use super::*;

/// Tests loading when no ledger file exists.
///
/// Verifies that the first run creates an empty ledger and immediately writes it to
/// disk so the file always exists afterwards.
///
/// Expected: Ok with empty ledger and `{}` on disk
#[tokio::test]
async fn creates_empty_ledger_on_first_run() {
    let test = TestBuilder::new().build().unwrap();
    assert!(!test.ledger_path.exists());

    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();

    assert_eq!(ledger.len().await, 0);
    assert!(test.ledger_path.exists());
    assert!(parse_file(&test.read_ledger().unwrap()).is_empty());
}

/// Tests creating missing parent directories on first run.
///
/// Expected: Ok with the nested file created
#[tokio::test]
async fn creates_parent_directories() {
    let test = TestBuilder::new().build().unwrap();
    let nested = test.path("state/bot/activity.json");

    ActivityLedger::load(&nested).await.unwrap();

    assert!(nested.exists());
}

/// Tests loading persisted entries.
///
/// Verifies that seeded entries are readable through `last_seen` with millisecond
/// precision.
///
/// Expected: Ok with both users present
#[tokio::test]
async fn loads_existing_entries() {
    let now = Utc::now();
    let test = TestBuilder::new()
        .with_ledger_entry(42, now - Duration::days(8))
        .with_ledger_entry(43, now)
        .build()
        .unwrap();

    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();

    assert_eq!(ledger.len().await, 2);
    assert_eq!(
        ledger.last_seen(UserId::new(42)).await,
        Some(millis(now - Duration::days(8)))
    );
    assert_eq!(ledger.last_seen(UserId::new(43)).await, Some(millis(now)));
}

/// Tests that an empty JSON object is a valid ledger.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn loads_empty_object() {
    let test = TestBuilder::new().with_empty_ledger().build().unwrap();

    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();

    assert_eq!(ledger.len().await, 0);
}

/// Tests that a corrupt ledger is a startup error.
///
/// Verifies that unparsable content fails with a parse error and that the file is left
/// untouched for inspection.
///
/// Expected: Err(LedgerError::Parse)
#[tokio::test]
async fn fails_on_corrupt_ledger() {
    let test = TestBuilder::new()
        .with_raw_ledger("{\"42\": 17600")
        .build()
        .unwrap();

    let result = ActivityLedger::load(&test.ledger_path).await;

    assert!(matches!(result, Err(LedgerError::Parse { .. })));
    assert_eq!(test.read_ledger().unwrap(), "{\"42\": 17600");
}

/// Tests that non-integer timestamps are rejected.
///
/// Expected: Err(LedgerError::Parse)
#[tokio::test]
async fn fails_on_non_integer_timestamp() {
    let test = TestBuilder::new()
        .with_raw_ledger("{\"42\": \"yesterday\"}")
        .build()
        .unwrap();

    let result = ActivityLedger::load(&test.ledger_path).await;

    assert!(matches!(result, Err(LedgerError::Parse { .. })));
}
