//! fresh-cli - Update notifications for the Fresh web framework.
//!
//! A small companion tool that checks whether a newer Fresh release has been
//! published, rate-limited through a JSON record persisted in the Deno
//! runtime's cache directory.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Gating configuration (CI, opt-out, build mode)
//! - [`error`] - Error types and result aliases
//! - [`runtime`] - Deno runtime introspection (DENO_DIR resolution)
//! - [`ui`] - Terminal output, theming, and the mock UI used in tests
//! - [`updates`] - Check record, release manifest, and the update checker
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use fresh_cli::environment::CheckEnvironment;
//! use fresh_cli::runtime::DenoInfoResolver;
//! use fresh_cli::ui::{create_ui, OutputMode};
//! use fresh_cli::updates::{HttpReleaseSource, UpdateChecker};
//!
//! let mut ui = create_ui(OutputMode::Normal);
//! let resolver = DenoInfoResolver;
//! let source = HttpReleaseSource::default();
//! let checker = UpdateChecker::new(CheckEnvironment::detect(), &resolver, &source);
//! checker.run(Duration::from_secs(86_400), ui.as_mut()).unwrap();
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod runtime;
pub mod ui;
pub mod updates;

pub use error::{FreshError, Result};
