//! Session configuration, read from environment variables.

use std::path::PathBuf;

pub const DEFAULT_POLL_MS: u64 = 250;
pub const MIN_POLL_MS: u64 = 10;
pub const MAX_POLL_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where the JSON-lines journal is appended, if anywhere.
    pub log_path: Option<PathBuf>,
    /// Input poll interval of the interactive loop.
    pub poll_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            poll_ms: DEFAULT_POLL_MS,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables.
    ///
    /// - `BOWLING_LOG_PATH`: journal file (empty means none)
    /// - `BOWLING_LOG_DISABLED`: `1`/`true` turns the journal off
    /// - `BOWLING_POLL_MS`: poll interval, clamped to 10..=5000
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let disabled = lookup("BOWLING_LOG_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_path = lookup("BOWLING_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && !disabled)
            .map(PathBuf::from);

        let poll_ms = lookup("BOWLING_POLL_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|ms| ms.clamp(MIN_POLL_MS, MAX_POLL_MS))
            .unwrap_or(DEFAULT_POLL_MS);

        Self { log_path, poll_ms }
    }
}
