//! Configuration Module
//!
//! Loads the shell's cache settings from environment variables.

use std::env;
use std::time::Duration;

/// Default sweep interval (and entry lifetime) in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 5_000;

/// Shell configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Entry lifetime and sweep cadence in milliseconds
    pub cache_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_MS` - Entry lifetime and sweep cadence (default: 5000)
    ///
    /// Unparseable or zero values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            cache_interval_ms: env::var("CACHE_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ms: &u64| *ms > 0)
                .unwrap_or(DEFAULT_INTERVAL_MS),
        }
    }

    /// The configured interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_interval_ms, 5_000);
        assert_eq!(config.interval(), Duration::from_secs(5));
    }

    // Env vars are process-global, so every case lives in one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_INTERVAL_MS");
        assert_eq!(Config::from_env(), Config::default());

        env::set_var("CACHE_INTERVAL_MS", "250");
        assert_eq!(Config::from_env().interval(), Duration::from_millis(250));

        env::set_var("CACHE_INTERVAL_MS", "soon");
        assert_eq!(Config::from_env().cache_interval_ms, DEFAULT_INTERVAL_MS);

        env::set_var("CACHE_INTERVAL_MS", "0");
        assert_eq!(Config::from_env().cache_interval_ms, DEFAULT_INTERVAL_MS);

        env::remove_var("CACHE_INTERVAL_MS");
    }
}
