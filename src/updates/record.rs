//! The persisted check record.
//!
//! A single JSON file inside `DENO_DIR` remembers what the last probe saw
//! and when, so repeated invocations do not hammer the release endpoint.
//! The file is advisory: concurrent invocations may race on it and the
//! last writer wins.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FreshError, Result};

/// File name of the check record inside the cache directory.
pub const CACHE_FILE_NAME: &str = "fresh-latest.txt";

/// Persisted state of the update check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// Version of the running tool.
    pub current_version: String,

    /// Most recently observed published version.
    pub latest_version: String,

    /// When the release endpoint was last probed successfully.
    pub last_checked: DateTime<Utc>,

    /// When an update notice was last shown.
    pub last_prompt: DateTime<Utc>,
}

impl CheckRecord {
    /// Create a default record for a first run: both versions are the
    /// running version and both timestamps are now.
    pub fn new(current_version: &str) -> Self {
        let now = Utc::now();
        Self {
            current_version: current_version.to_string(),
            latest_version: current_version.to_string(),
            last_checked: now,
            last_prompt: now,
        }
    }

    /// Whether enough time has passed since the last probe.
    ///
    /// A zero interval is always due, so callers can force a probe without
    /// special-casing clock skew (a `last_checked` in the future is
    /// otherwise never due).
    pub fn is_due(&self, interval: std::time::Duration, now: DateTime<Utc>) -> bool {
        if interval.is_zero() {
            return true;
        }
        let interval = chrono::Duration::from_std(interval).unwrap_or(chrono::TimeDelta::MAX);
        now.signed_duration_since(self.last_checked) >= interval
    }

    /// Load the record from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist. Any other read
    /// failure, including a file that does not parse as a record, is an
    /// error: silently resetting state would hide corruption.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(FreshError::CacheRead {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        };

        let record = serde_json::from_str(&content).map_err(|err| FreshError::CacheParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        Ok(Some(record))
    }

    /// Persist the record to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| FreshError::CacheWrite {
                path: path.to_path_buf(),
                source: err,
            })?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|err| FreshError::CacheWrite {
            path: path.to_path_buf(),
            source: std::io::Error::other(err),
        })?;

        fs::write(path, content).map_err(|err| FreshError::CacheWrite {
            path: path.to_path_buf(),
            source: err,
        })
    }
}
