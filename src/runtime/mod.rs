//! Deno runtime introspection.
//!
//! The check record lives inside the Deno runtime's own cache directory
//! (`DENO_DIR`), which is only discoverable by asking the runtime itself:
//! `deno info` prints a `DENO_DIR location:` line on stdout. Resolution is
//! behind the [`CacheDirResolver`] trait so tests can substitute a fixed
//! directory instead of spawning a real subprocess.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

/// Stdout prefix that carries the cache directory path.
const DENO_DIR_PREFIX: &str = "DENO_DIR location: ";

/// Resolves the local cache directory used for the check record.
pub trait CacheDirResolver {
    /// Resolve the cache directory, or `None` when it cannot be determined.
    fn resolve(&self) -> Option<PathBuf>;
}

/// Production resolver: spawns `deno info` and scans its output.
pub struct DenoInfoResolver;

impl CacheDirResolver for DenoInfoResolver {
    fn resolve(&self) -> Option<PathBuf> {
        let output = match Command::new("deno").arg("info").output() {
            Ok(output) => output,
            Err(err) => {
                debug!("could not spawn `deno info`: {err}");
                return None;
            }
        };
        if !output.status.success() {
            debug!("`deno info` exited with {}", output.status);
            return None;
        }

        parse_deno_dir(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Resolver returning a fixed directory, for tests and local tooling.
pub struct FixedDirResolver(pub PathBuf);

impl CacheDirResolver for FixedDirResolver {
    fn resolve(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Scan `deno info` stdout for the `DENO_DIR location:` line.
///
/// The runtime colorizes its output when attached to a terminal, so each
/// line is stripped of ANSI escapes before the prefix match.
fn parse_deno_dir(stdout: &str) -> Option<PathBuf> {
    stdout.lines().find_map(|line| {
        let line = console::strip_ansi_codes(line);
        line.strip_prefix(DENO_DIR_PREFIX)
            .map(|path| PathBuf::from(path.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_deno_dir_line() {
        let stdout = "DENO_DIR location: /home/user/.cache/deno\n\
                      Remote modules cache: /home/user/.cache/deno/deps\n";
        assert_eq!(
            parse_deno_dir(stdout),
            Some(PathBuf::from("/home/user/.cache/deno"))
        );
    }

    #[test]
    fn strips_ansi_escapes_before_matching() {
        let stdout = "\u{1b}[1mDENO_DIR location:\u{1b}[0m /tmp/deno\n";
        assert_eq!(parse_deno_dir(stdout), Some(PathBuf::from("/tmp/deno")));
    }

    #[test]
    fn missing_line_yields_none() {
        let stdout = "Remote modules cache: /home/user/.cache/deno/deps\n";
        assert_eq!(parse_deno_dir(stdout), None);
    }

    #[test]
    fn prefix_must_start_the_line() {
        let stdout = "note: DENO_DIR location: /tmp/deno\n";
        assert_eq!(parse_deno_dir(stdout), None);
    }

    #[test]
    fn fixed_resolver_returns_configured_dir() {
        let resolver = FixedDirResolver(PathBuf::from("/tmp/cache"));
        assert_eq!(resolver.resolve(), Some(PathBuf::from("/tmp/cache")));
    }
}
