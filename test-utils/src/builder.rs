use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a customizable ledger file.
///
/// Provides a fluent interface for seeding the activity ledger before the code under
/// test loads it. Call `build()` to create the directory and write the file.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_ledger_entry(42, Utc::now() - Duration::days(8))
///     .with_ledger_entry(43, Utc::now())
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Entries written to the ledger file as user ID string -> epoch milliseconds.
    entries: BTreeMap<String, i64>,

    /// Raw file content that replaces `entries` when set.
    ///
    /// Used to simulate corrupt or hand-edited ledgers.
    raw: Option<String>,

    /// Whether a ledger file should be written at all.
    write_ledger: bool,
}

impl TestBuilder {
    /// Creates a new builder that writes no ledger file.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            raw: None,
            write_ledger: false,
        }
    }

    /// Seeds a last-seen entry for a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID (snowflake)
    /// - `at` - Last-seen instant, stored with millisecond precision
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_ledger_entry(mut self, user_id: u64, at: DateTime<Utc>) -> Self {
        self.entries
            .insert(user_id.to_string(), at.timestamp_millis());
        self.write_ledger = true;
        self
    }

    /// Writes an empty ledger object (`{}`).
    pub fn with_empty_ledger(mut self) -> Self {
        self.write_ledger = true;
        self
    }

    /// Writes the given text verbatim as the ledger file.
    pub fn with_raw_ledger(mut self, raw: &str) -> Self {
        self.raw = Some(raw.to_string());
        self.write_ledger = true;
        self
    }

    /// Builds the test context, writing the ledger file if one was configured.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context ready for use
    /// - `Err(TestError)` - Failed to create the directory or write the file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        if self.write_ledger {
            let content = match self.raw {
                Some(raw) => raw,
                None => serde_json::to_string_pretty(&self.entries)?,
            };
            context.write_ledger(&content)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
