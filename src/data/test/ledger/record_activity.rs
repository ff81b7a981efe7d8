use super::*;

/// Tests recording activity for a new user.
///
/// Verifies the entry is created in memory and written to disk before the call
/// returns.
///
/// Expected: Ok with entry present in memory and on disk
#[tokio::test]
async fn records_new_user() {
    let test = TestBuilder::new().build().unwrap();
    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();
    let at = Utc::now();

    let stored = ledger.record_activity(UserId::new(42), at).await.unwrap();

    assert_eq!(stored, millis(at));
    assert_eq!(ledger.last_seen(UserId::new(42)).await, Some(millis(at)));

    let on_disk = parse_file(&test.read_ledger().unwrap());
    assert_eq!(on_disk.get("42"), Some(&at.timestamp_millis()));
}

/// Tests that newer activity overwrites the stored instant.
///
/// Expected: Ok with later timestamp stored
#[tokio::test]
async fn advances_existing_user() {
    let now = Utc::now();
    let test = TestBuilder::new()
        .with_ledger_entry(42, now - Duration::days(8))
        .build()
        .unwrap();
    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();

    ledger.record_activity(UserId::new(42), now).await.unwrap();

    assert_eq!(ledger.last_seen(UserId::new(42)).await, Some(millis(now)));
}

/// Tests that timestamps never move backwards.
///
/// Verifies that recording an older instant, such as a late-delivered event, keeps the
/// newer stored timestamp in memory and on disk.
///
/// Expected: Ok with the original, later timestamp
#[tokio::test]
async fn never_moves_backwards() {
    let now = Utc::now();
    let test = TestBuilder::new().with_ledger_entry(42, now).build().unwrap();
    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();

    let stored = ledger
        .record_activity(UserId::new(42), now - Duration::hours(3))
        .await
        .unwrap();

    assert_eq!(stored, millis(now));
    assert_eq!(ledger.last_seen(UserId::new(42)).await, Some(millis(now)));
    let on_disk = parse_file(&test.read_ledger().unwrap());
    assert_eq!(on_disk.get("42"), Some(&now.timestamp_millis()));
}

/// Tests the persistence round trip.
///
/// Verifies that after several updates the file read back equals the in-memory table,
/// and that a freshly loaded ledger sees the same values.
///
/// Expected: file contents equal the in-memory snapshot
#[tokio::test]
async fn file_matches_memory_after_updates() {
    let test = TestBuilder::new().build().unwrap();
    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();
    let now = Utc::now();

    for (offset, user) in [(5, 1_u64), (3, 2), (1, 3), (0, 1)] {
        ledger
            .record_activity(UserId::new(user), now - Duration::minutes(offset))
            .await
            .unwrap();
    }

    let snapshot = ledger.snapshot().await;
    assert_eq!(parse_file(&test.read_ledger().unwrap()), snapshot);

    let reloaded = ActivityLedger::load(&test.ledger_path).await.unwrap();
    assert_eq!(reloaded.snapshot().await, snapshot);
    assert_eq!(reloaded.last_seen(UserId::new(1)).await, Some(millis(now)));
}

/// Tests that the temporary file is not left behind.
///
/// Expected: only the ledger file exists in the directory
#[tokio::test]
async fn leaves_no_temporary_file() {
    let test = TestBuilder::new().build().unwrap();
    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();

    ledger
        .record_activity(UserId::new(42), Utc::now())
        .await
        .unwrap();

    let files: Vec<_> = std::fs::read_dir(test.dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(files, vec![std::ffi::OsString::from("activity.json")]);
}
