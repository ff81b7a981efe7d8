//! Activity ledger: last-seen timestamps persisted as a JSON file.
//!
//! The ledger maps user IDs to the instant of their last qualifying activity. The whole
//! table is kept in memory and rewritten to disk after every change, so the file always
//! reflects the latest recorded activity. The file is a pretty-printed JSON object with
//! user ID strings as keys and epoch milliseconds as values:
//!
//! ```json
//! {
//!   "123456789012345678": 1760745600000
//! }
//! ```
//!
//! Writes go to a sibling temporary file which is then renamed over the ledger, so a
//! crash mid-write never leaves a truncated file behind.

use chrono::{DateTime, Utc};
use serenity::all::UserId;
use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::sync::RwLock;

use crate::error::ledger::LedgerError;

type Entries = BTreeMap<String, i64>;

struct LedgerInner {
    path: PathBuf,
    entries: Entries,
}

/// Shared handle to the activity ledger.
///
/// Cloning is cheap; all clones share the same table and file. Every mutation holds the
/// write lock across the file write, so the file is written in the same order the
/// table is changed.
#[derive(Clone)]
pub struct ActivityLedger {
    inner: Arc<RwLock<LedgerInner>>,
}

impl ActivityLedger {
    /// Loads the ledger from `path`, creating an empty ledger file if none exists.
    ///
    /// # Arguments
    /// - `path` - Location of the ledger file
    ///
    /// # Returns
    /// - `Ok(ActivityLedger)` - Ledger with the persisted entries
    /// - `Err(LedgerError::Parse)` - The file exists but is not a valid ledger
    /// - `Err(LedgerError::Io)` - The file could not be read, or the initial empty
    ///   ledger could not be written
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();

        let (entries, created) = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => {
                let entries: Entries =
                    serde_json::from_str(&raw).map_err(|source| LedgerError::Parse {
                        path: path.clone(),
                        source,
                    })?;
                (entries, false)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => (Entries::new(), true),
            Err(source) => return Err(LedgerError::Io { path, source }),
        };

        if created {
            write_entries(&path, &entries).await?;
            tracing::info!("Created empty activity ledger at {}", path.display());
        }

        Ok(Self {
            inner: Arc::new(RwLock::new(LedgerInner { path, entries })),
        })
    }

    /// Records activity for a user and persists the ledger.
    ///
    /// Timestamps never move backwards: if the stored instant is later than `at`, the
    /// stored instant is kept and nothing is written.
    ///
    /// # Arguments
    /// - `user_id` - User the activity belongs to
    /// - `at` - Instant of the activity
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)` - The user's last-seen instant after the update
    /// - `Err(LedgerError)` - The ledger could not be written; the in-memory table keeps
    ///   the new value
    pub async fn record_activity(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, LedgerError> {
        let mut inner = self.inner.write().await;
        let key = user_id.to_string();
        let millis = at.timestamp_millis();

        if let Some(&existing) = inner.entries.get(&key) {
            if existing >= millis {
                return Ok(from_millis(existing));
            }
        }

        inner.entries.insert(key, millis);
        write_entries(&inner.path, &inner.entries).await?;

        Ok(from_millis(millis))
    }

    /// Returns the user's last recorded activity, or `None` if never seen.
    pub async fn last_seen(&self, user_id: UserId) -> Option<DateTime<Utc>> {
        self.inner
            .read()
            .await
            .entries
            .get(&user_id.to_string())
            .map(|&millis| from_millis(millis))
    }

    /// Number of users with a recorded activity.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Writes the current table to disk.
    ///
    /// Every update already persists, so this only matters at shutdown or after a failed
    /// write left the file behind the in-memory table.
    pub async fn flush(&self) -> Result<(), LedgerError> {
        let inner = self.inner.read().await;
        write_entries(&inner.path, &inner.entries).await
    }

    #[cfg(test)]
    pub async fn snapshot(&self) -> BTreeMap<String, i64> {
        self.inner.read().await.entries.clone()
    }
}

fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
}

async fn write_entries(path: &Path, entries: &Entries) -> Result<(), LedgerError> {
    let json = serde_json::to_string_pretty(entries).map_err(LedgerError::Serialize)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| io_error(parent, source))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, json)
        .await
        .map_err(|source| io_error(&tmp, source))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|source| io_error(path, source))?;

    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> LedgerError {
    LedgerError::Io {
        path: path.to_path_buf(),
        source,
    }
}
