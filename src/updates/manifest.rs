//! The bundled release manifest.
//!
//! `versions.json` at the crate root lists known released versions, newest
//! first; the first entry is the version this binary was built from. It is
//! embedded at compile time so the tool has no runtime dependency on its
//! own source tree.

use tracing::warn;

const VERSIONS_JSON: &str = include_str!("../../versions.json");

/// Known released versions, newest first.
///
/// An unparseable manifest is treated as empty; the checker skips silently
/// on an empty list, so a broken bundle degrades to a no-op.
pub fn released_versions() -> Vec<String> {
    match serde_json::from_str(VERSIONS_JSON) {
        Ok(versions) => versions,
        Err(err) => {
            warn!("bundled versions.json is invalid: {err}");
            Vec::new()
        }
    }
}

/// The version this binary was built from (the manifest's first entry).
pub fn current_version() -> Option<String> {
    released_versions().into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_is_not_empty() {
        assert!(!released_versions().is_empty());
    }

    #[test]
    fn current_version_is_first_entry() {
        let versions = released_versions();
        assert_eq!(current_version().as_deref(), versions.first().map(|v| v.as_str()));
    }

    #[test]
    fn versions_are_non_empty_strings() {
        assert!(released_versions().iter().all(|v| !v.is_empty()));
    }
}
