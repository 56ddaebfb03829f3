//! Release endpoint access.

use anyhow::Result;
use tracing::debug;

/// The published-release endpoint: a plain-text body carrying the latest
/// version, optionally prefixed with `v`.
pub const RELEASE_LATEST_URL: &str = "https://dl.deno.land/fresh/release-latest.txt";

/// Request timeout for the release probe. The check is fire-and-forget;
/// an unbounded hang here would stall the whole invocation.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Source of the latest published version.
///
/// `Ok(Some(body))` carries the raw response body. `Ok(None)` means the
/// endpoint answered but had nothing usable (non-success status), which is
/// not an error. `Err` is reserved for transport failure.
pub trait ReleaseSource {
    fn latest_release(&self) -> Result<Option<String>>;
}

/// HTTP implementation of [`ReleaseSource`].
pub struct HttpReleaseSource {
    url: String,
}

impl HttpReleaseSource {
    /// Create a source probing `url`. Tests point this at a local server.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpReleaseSource {
    fn default() -> Self {
        Self::new(RELEASE_LATEST_URL)
    }
}

impl ReleaseSource for HttpReleaseSource {
    fn latest_release(&self) -> Result<Option<String>> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("fresh-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response = client.get(&self.url).send()?;

        if !response.status().is_success() {
            debug!("release endpoint answered {}", response.status());
            return Ok(None);
        }

        Ok(Some(response.text()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn returns_body_on_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/release-latest.txt");
            then.status(200).body("v1.3.0\n");
        });

        let source = HttpReleaseSource::new(server.url("/release-latest.txt"));
        let body = source.latest_release().unwrap();

        mock.assert();
        assert_eq!(body.as_deref(), Some("v1.3.0\n"));
    }

    #[test]
    fn non_success_status_is_not_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/release-latest.txt");
            then.status(500);
        });

        let source = HttpReleaseSource::new(server.url("/release-latest.txt"));
        assert!(source.latest_release().unwrap().is_none());
    }

    #[test]
    fn transport_failure_is_an_error() {
        // Nothing listens on this port.
        let source = HttpReleaseSource::new("http://127.0.0.1:9/release-latest.txt");
        assert!(source.latest_release().is_err());
    }
}
