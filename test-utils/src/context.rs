use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TestError;

/// File name of the ledger inside the test directory.
pub const LEDGER_FILE_NAME: &str = "activity.json";

/// Test context owning an isolated temporary directory.
///
/// The directory and everything in it is removed when the context is dropped, so keep
/// the context alive for as long as the test uses `ledger_path`.
pub struct TestContext {
    /// Temporary directory backing this test.
    pub dir: TempDir,

    /// Path of the ledger file inside `dir`.
    ///
    /// The file only exists if the builder seeded it; otherwise loading the ledger
    /// exercises the "first run" path.
    pub ledger_path: PathBuf,
}

impl TestContext {
    /// Creates a new context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no ledger file written yet
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let ledger_path = dir.path().join(LEDGER_FILE_NAME);

        Ok(Self { dir, ledger_path })
    }

    /// Returns the path of a file inside the test directory.
    pub fn path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Reads the ledger file back as raw text.
    ///
    /// # Returns
    /// - `Ok(String)` - Current file contents
    /// - `Err(TestError::Io)` - The file does not exist or cannot be read
    pub fn read_ledger(&self) -> Result<String, TestError> {
        Ok(std::fs::read_to_string(&self.ledger_path)?)
    }

    /// Writes raw text to the ledger file, replacing any existing content.
    pub fn write_ledger(&self, raw: &str) -> Result<(), TestError> {
        std::fs::write(&self.ledger_path, raw)?;
        Ok(())
    }
}
