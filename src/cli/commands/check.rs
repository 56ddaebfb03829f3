//! The check command.

use std::time::Duration;

use tracing::debug;

use crate::cli::args::CheckArgs;
use crate::environment::CheckEnvironment;
use crate::error::Result;
use crate::runtime::DenoInfoResolver;
use crate::ui::UserInterface;
use crate::updates::{HttpReleaseSource, UpdateChecker};

use super::{Command, CommandResult};

/// Run one update check against the live environment.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let interval = if self.args.force {
            Duration::ZERO
        } else {
            Duration::from_secs(self.args.interval)
        };
        debug!("running update check (interval {:?})", interval);

        let resolver = DenoInfoResolver;
        let source = HttpReleaseSource::default();
        let checker = UpdateChecker::new(CheckEnvironment::detect(), &resolver, &source);
        checker.run(interval, ui)?;

        Ok(CommandResult::success())
    }
}
