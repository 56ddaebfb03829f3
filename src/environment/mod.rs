//! Gating configuration for the update check.
//!
//! The check is a best-effort background task and must stay out of the way
//! in automated or released contexts. This module decides, up front and
//! before any I/O, whether the check should run at all.

pub mod detection;

pub use detection::CheckEnvironment;
