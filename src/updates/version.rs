//! Version normalization and comparison.

/// Normalize a release endpoint body into a bare version string: trim
/// surrounding whitespace and drop a leading `v`.
pub fn normalize_version(body: &str) -> String {
    let trimmed = body.trim();
    trimmed.strip_prefix('v').unwrap_or(trimmed).to_string()
}

/// Whether the running tool is current with respect to `latest`.
///
/// Development builds carry the most recent release's version with an `a`
/// suffix in the bundled manifest, so a build is up to date exactly when
/// its version equals the latest release plus that marker.
pub fn is_up_to_date(current: &str, latest: &str) -> bool {
    current == format!("{latest}a")
}
