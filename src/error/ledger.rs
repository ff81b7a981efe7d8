use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the persisted activity ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Filesystem error while reading, writing or renaming the ledger file.
    #[error("Ledger I/O error at '{}': {source}", path.display())]
    Io {
        /// File the operation was acting on
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The ledger file exists but does not contain a valid ledger.
    ///
    /// Treated as fatal at startup; the file is left untouched so it can be inspected.
    #[error("Failed to parse ledger '{}': {source}", path.display())]
    Parse {
        /// The file that failed to parse
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory table could not be serialized.
    #[error("Failed to serialize ledger: {0}")]
    Serialize(#[source] serde_json::Error),
}
