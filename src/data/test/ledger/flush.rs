use super::*;

/// Tests that flushing rewrites the file from memory.
///
/// Verifies that a ledger file deleted out from under the bot is restored on flush.
///
/// Expected: Ok with the file recreated and matching memory
#[tokio::test]
async fn rewrites_file_from_memory() {
    let test = TestBuilder::new()
        .with_ledger_entry(42, Utc::now())
        .build()
        .unwrap();
    let ledger = ActivityLedger::load(&test.ledger_path).await.unwrap();
    std::fs::remove_file(&test.ledger_path).unwrap();

    ledger.flush().await.unwrap();

    assert_eq!(
        parse_file(&test.read_ledger().unwrap()),
        ledger.snapshot().await
    );
}
