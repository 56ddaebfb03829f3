//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};

/// Default minimum time between release endpoint probes, in seconds.
pub const DEFAULT_INTERVAL_SECS: u64 = 86_400;

/// fresh - Update notifications for the Fresh web framework.
#[derive(Debug, Parser)]
#[command(name = "fresh")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a newer Fresh release is available (default)
    Check(CheckArgs),
}

/// Arguments for the check command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Minimum seconds between two release endpoint probes
    #[arg(long, default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval: u64,

    /// Probe the release endpoint even if the interval has not elapsed
    #[arg(long)]
    pub force: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL_SECS,
            force: false,
        }
    }
}
