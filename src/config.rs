//! Watcher configuration.

use crate::probe::DEFAULT_SILENCE_THRESHOLD;
use std::time::Duration;

/// Environment variable overriding the poll interval, in milliseconds.
pub const POLL_INTERVAL_ENV: &str = "AFKWATCH_POLL_INTERVAL_MS";

/// Environment variable overriding the audio silence threshold.
pub const SILENCE_THRESHOLD_ENV: &str = "AFKWATCH_SILENCE_THRESHOLD";

/// Configuration for the watcher binary.
#[derive(Debug, Clone, PartialEq)]
pub struct WatcherConfig {
    /// How often to evaluate activity (default: 1s).
    pub poll_interval: Duration,

    /// Peak level at or below which an audio session counts as silent.
    pub silence_threshold: f32,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            silence_threshold: DEFAULT_SILENCE_THRESHOLD,
        }
    }
}

impl WatcherConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Invalid values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(POLL_INTERVAL_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.poll_interval = Duration::from_millis(ms),
                _ => tracing::warn!(
                    key = POLL_INTERVAL_ENV,
                    value = %raw,
                    "Invalid poll interval, using default"
                ),
            }
        }

        if let Some(raw) = lookup(SILENCE_THRESHOLD_ENV) {
            match raw.trim().parse::<f32>() {
                Ok(threshold) if threshold.is_finite() && threshold >= 0.0 => {
                    config.silence_threshold = threshold
                }
                _ => tracing::warn!(
                    key = SILENCE_THRESHOLD_ENV,
                    value = %raw,
                    "Invalid silence threshold, using default"
                ),
            }
        }

        config
    }
}
