//! Update checking against the Fresh release endpoint.
//!
//! This module provides:
//! - The persisted [`CheckRecord`] and its cache-file I/O
//! - The bundled release manifest
//! - Version normalization and the up-to-date rule
//! - [`UpdateChecker`], which ties the pieces together

pub mod check;
pub mod manifest;
pub mod record;
pub mod source;
pub mod version;

pub use check::UpdateChecker;
pub use record::{CheckRecord, CACHE_FILE_NAME};
pub use source::{HttpReleaseSource, ReleaseSource, RELEASE_LATEST_URL};
pub use version::{is_up_to_date, normalize_version};
