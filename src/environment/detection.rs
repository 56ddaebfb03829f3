//! CI, opt-out, and build-mode detection.
//!
//! Detection reads well-known environment variables through an injectable
//! lookup so tests never mutate the process environment.

use std::env::VarError;

/// Environment variable that disables the update check entirely.
pub const OPT_OUT_VAR: &str = "DENO_NO_UPDATE_CHECK";

/// Well-known CI indicator variables, checked for presence.
const CI_VARS: [&str; 7] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "JENKINS_URL",
    "BUILDKITE",
    "TRAVIS",
];

/// Resolved gating configuration for one update-check invocation.
///
/// # Example
///
/// ```
/// use fresh_cli::environment::CheckEnvironment;
///
/// let env = CheckEnvironment::detect();
/// if env.should_skip() {
///     // stay silent, perform no I/O
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckEnvironment {
    /// Running under a continuous-integration service.
    pub ci: bool,
    /// The user explicitly disabled update checks.
    pub opt_out: bool,
    /// This binary is a debug/development build.
    pub debug_build: bool,
}

impl CheckEnvironment {
    /// Detect from the process environment.
    pub fn detect() -> Self {
        Self::detect_with_env(|key| std::env::var(key))
    }

    /// Detect with a custom env var lookup (for testing).
    pub fn detect_with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        Self {
            ci: CI_VARS.iter().any(|var| env_fn(var).is_ok()),
            opt_out: env_fn(OPT_OUT_VAR).is_ok(),
            debug_build: cfg!(debug_assertions),
        }
    }

    /// Whether the update check should not run at all.
    ///
    /// True in CI, when the user opted out, or for release builds. Release
    /// builds skip because the check only makes sense while developing
    /// against a framework checkout that may fall behind published releases.
    pub fn should_skip(&self) -> bool {
        self.ci || self.opt_out || !self.debug_build
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn clean_env_detects_nothing() {
        let env = CheckEnvironment::detect_with_env(make_env(&[]));
        assert!(!env.ci);
        assert!(!env.opt_out);
    }

    #[test]
    fn detects_ci_var() {
        let env = CheckEnvironment::detect_with_env(make_env(&[("CI", "true")]));
        assert!(env.ci);
        assert!(env.should_skip());
    }

    #[test]
    fn detects_github_actions() {
        let env = CheckEnvironment::detect_with_env(make_env(&[("GITHUB_ACTIONS", "true")]));
        assert!(env.ci);
    }

    #[test]
    fn detects_jenkins() {
        let env =
            CheckEnvironment::detect_with_env(make_env(&[("JENKINS_URL", "http://ci.example")]));
        assert!(env.ci);
    }

    #[test]
    fn detects_opt_out() {
        let env = CheckEnvironment::detect_with_env(make_env(&[(OPT_OUT_VAR, "1")]));
        assert!(env.opt_out);
        assert!(env.should_skip());
    }

    #[test]
    fn opt_out_matches_on_presence_not_value() {
        let env = CheckEnvironment::detect_with_env(make_env(&[(OPT_OUT_VAR, "")]));
        assert!(env.opt_out);
    }

    #[test]
    fn debug_build_tracks_compilation_profile() {
        let env = CheckEnvironment::detect_with_env(make_env(&[]));
        assert_eq!(env.debug_build, cfg!(debug_assertions));
    }

    #[test]
    fn release_build_skips() {
        let env = CheckEnvironment {
            ci: false,
            opt_out: false,
            debug_build: false,
        };
        assert!(env.should_skip());
    }

    #[test]
    fn debug_build_without_gates_runs() {
        let env = CheckEnvironment {
            ci: false,
            opt_out: false,
            debug_build: true,
        };
        assert!(!env.should_skip());
    }
}
