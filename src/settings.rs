//! Run settings captured once from the environment at startup.

use crate::error::{KeywatchError, Result};
use crate::watch::WatchList;
use std::env;
use std::path::PathBuf;

/// Environment variable holding the serialized watch list.
pub const WATCHED_KEYS_VAR: &str = "WATCHED_KEYS";

/// Environment variable holding the output sink path.
pub const OUTPUT_VAR: &str = "GITHUB_OUTPUT";

/// Everything a run needs, resolved and validated up front.
///
/// Capturing the environment in one place means malformed input fails fast
/// at startup instead of surfacing mid-diff, and the rest of the crate stays
/// a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the "before" document.
    pub old_path: PathBuf,
    /// Path to the "after" document.
    pub new_path: PathBuf,
    /// The parsed watch list.
    pub watch_list: WatchList,
    /// Path of the file the `no_change=` line is appended to.
    pub output_path: PathBuf,
}

impl Settings {
    /// Construct settings directly, bypassing the environment.
    pub fn new(
        old_path: impl Into<PathBuf>,
        new_path: impl Into<PathBuf>,
        watch_list: WatchList,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            old_path: old_path.into(),
            new_path: new_path.into(),
            watch_list,
            output_path: output_path.into(),
        }
    }

    /// Capture settings from the environment.
    ///
    /// Document paths are the conventional `old.yml` / `new.yml` in the
    /// working directory. `WATCHED_KEYS` is parsed immediately; an unset or
    /// blank variable yields an empty watch list. `GITHUB_OUTPUT` must be
    /// set, otherwise the outcome contract with the pipeline cannot be
    /// honored.
    ///
    /// # Errors
    ///
    /// Returns an error if `WATCHED_KEYS` is malformed or `GITHUB_OUTPUT`
    /// is unset or empty.
    pub fn from_env() -> Result<Self> {
        let raw_watch = env::var(WATCHED_KEYS_VAR).unwrap_or_default();
        let watch_list = WatchList::parse(&raw_watch)?;

        let output_path = env::var_os(OUTPUT_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .ok_or(KeywatchError::MissingEnv(OUTPUT_VAR))?;

        tracing::debug!(
            watched_paths = watch_list.path_count(),
            output = %output_path.display(),
            "settings captured"
        );

        Ok(Self::new("old.yml", "new.yml", watch_list, output_path))
    }
}

#[cfg(test)]
#[allow(unsafe_code)] // For env var manipulation in tests
mod tests {
    use super::*;

    // Env-var tests mutate process state, so everything lives in one test
    // to avoid interference under the parallel test runner.
    #[test]
    fn test_from_env() {
        unsafe {
            env::remove_var(WATCHED_KEYS_VAR);
            env::remove_var(OUTPUT_VAR);
        }

        // Missing GITHUB_OUTPUT is fatal even with no watch list.
        assert!(matches!(
            Settings::from_env(),
            Err(KeywatchError::MissingEnv(OUTPUT_VAR))
        ));

        unsafe {
            env::set_var(OUTPUT_VAR, "/tmp/keywatch-test-output");
        }

        // Unset watch list defaults to empty.
        let settings = Settings::from_env().unwrap();
        assert!(settings.watch_list.is_empty());
        assert_eq!(settings.old_path, PathBuf::from("old.yml"));
        assert_eq!(settings.new_path, PathBuf::from("new.yml"));

        // A real watch list is parsed eagerly.
        unsafe {
            env::set_var(WATCHED_KEYS_VAR, "service: [image]");
        }
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.watch_list.path_count(), 1);

        // Malformed watch list fails at capture time.
        unsafe {
            env::set_var(WATCHED_KEYS_VAR, "service: [unclosed");
        }
        assert!(Settings::from_env().is_err());

        unsafe {
            env::remove_var(WATCHED_KEYS_VAR);
            env::remove_var(OUTPUT_VAR);
        }
    }
}
