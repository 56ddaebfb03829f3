//! The update check itself.
//!
//! One invocation walks a fixed sequence: gate on the environment, resolve
//! the cache directory, load or synthesize the check record, probe the
//! release endpoint, print a notice when behind, persist the record. Every
//! step that cannot proceed exits quietly; only cache-file corruption is
//! allowed to surface as an error.

use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use crate::environment::CheckEnvironment;
use crate::error::Result;
use crate::runtime::CacheDirResolver;
use crate::ui::UserInterface;

use super::manifest;
use super::record::{CheckRecord, CACHE_FILE_NAME};
use super::source::ReleaseSource;
use super::version::{is_up_to_date, normalize_version};

/// Upgrade command shown under the update notice.
const UPGRADE_COMMAND: &str = "deno run -A -r https://fresh.deno.dev/update .";

/// Checks for a newer published release and maintains the check record.
pub struct UpdateChecker<'a> {
    env: CheckEnvironment,
    cache_dir: &'a dyn CacheDirResolver,
    releases: &'a dyn ReleaseSource,
}

impl<'a> UpdateChecker<'a> {
    pub fn new(
        env: CheckEnvironment,
        cache_dir: &'a dyn CacheDirResolver,
        releases: &'a dyn ReleaseSource,
    ) -> Self {
        Self {
            env,
            cache_dir,
            releases,
        }
    }

    /// Run one update check.
    ///
    /// `interval` is the minimum time between two probes of the release
    /// endpoint; a record loaded from disk that is younger than the
    /// interval skips the probe entirely. A zero interval always probes.
    ///
    /// # Errors
    ///
    /// Returns an error only when the check record exists but cannot be
    /// read or parsed, or when the updated record cannot be written back.
    /// Everything else fails soft: at most one line on the error stream.
    pub fn run(&self, interval: Duration, ui: &mut dyn UserInterface) -> Result<()> {
        if self.env.should_skip() {
            debug!("update check disabled for this environment");
            return Ok(());
        }

        let Some(dir) = self.cache_dir.resolve() else {
            debug!("cache directory could not be resolved");
            return Ok(());
        };

        let versions = manifest::released_versions();
        let Some(current) = versions.first() else {
            debug!("release manifest is empty");
            return Ok(());
        };

        let path = dir.join(CACHE_FILE_NAME);
        let loaded = CheckRecord::load(&path)?;
        let from_disk = loaded.is_some();
        let mut record = loaded.unwrap_or_else(|| CheckRecord::new(current));

        // A synthesized record has last_checked = now and would never be
        // due; only a record that actually came from disk can rate-limit.
        if from_disk && !record.is_due(interval, Utc::now()) {
            debug!("inside check interval, skipping probe");
            return Ok(());
        }

        match self.releases.latest_release() {
            Err(err) => {
                ui.error(&format!("Update check failed: {err}"));
                return Ok(());
            }
            Ok(None) => {
                debug!("no usable answer from release endpoint");
            }
            Ok(Some(body)) => {
                record.latest_version = normalize_version(&body);
                record.last_checked = Utc::now();
            }
        }

        if !is_up_to_date(&record.current_version, &record.latest_version) {
            ui.update_notice(&record.latest_version, &record.current_version);
            ui.hint(&format!("To upgrade, run: {UPGRADE_COMMAND}"));
            record.last_prompt = Utc::now();
        }

        record.save(&path)
    }
}
