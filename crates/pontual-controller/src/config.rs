//! Controller configuration.

use std::time::Duration;

use pontual_core::constants::{
    DEFAULT_DISPLAY_HOLD_SECONDS, DEFAULT_SCAN_TIMEOUT_MS, MAX_SCAN_TIMEOUT_MS,
    MIN_SCAN_TIMEOUT_MS,
};
use pontual_core::{Error, Result};

/// Runtime configuration for the attendance terminal.
///
/// Values come from `PONTUAL_*` environment variables with sensible
/// defaults, so a bare `pontual` invocation works against a local
/// database file.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Path to the SQLite attendance database
    pub database_path: String,

    /// Time budget for resolving and persisting one scan
    pub scan_timeout: Duration,

    /// How long a scan result stays on the LCD before returning to idle
    pub display_hold: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            database_path: "pontual.db".to_string(),
            scan_timeout: Duration::from_millis(DEFAULT_SCAN_TIMEOUT_MS),
            display_hold: Duration::from_secs(DEFAULT_DISPLAY_HOLD_SECONDS),
        }
    }
}

impl ControllerConfig {
    /// Set the database path
    pub fn database_path(mut self, path: impl Into<String>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set the scan time budget
    pub fn scan_timeout(mut self, timeout: Duration) -> Self {
        self.scan_timeout = timeout;
        self
    }

    /// Set the display hold duration
    pub fn display_hold(mut self, hold: Duration) -> Self {
        self.display_hold = hold;
        self
    }

    /// Load configuration from `PONTUAL_*` environment variables.
    ///
    /// Recognized variables:
    /// - `PONTUAL_DATABASE_PATH` - database file path
    /// - `PONTUAL_SCAN_TIMEOUT_MS` - scan time budget (500-10000)
    /// - `PONTUAL_DISPLAY_HOLD_SECS` - result hold time on the LCD
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for unparseable values or a scan timeout
    /// outside the allowed range.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("PONTUAL_DATABASE_PATH") {
            config.database_path = path;
        }

        if let Some(raw) = lookup("PONTUAL_SCAN_TIMEOUT_MS") {
            let ms: u64 = raw
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PONTUAL_SCAN_TIMEOUT_MS: {raw}")))?;
            if !(MIN_SCAN_TIMEOUT_MS..=MAX_SCAN_TIMEOUT_MS).contains(&ms) {
                return Err(Error::Config(format!(
                    "PONTUAL_SCAN_TIMEOUT_MS must be {MIN_SCAN_TIMEOUT_MS}-{MAX_SCAN_TIMEOUT_MS}, got {ms}"
                )));
            }
            config.scan_timeout = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup("PONTUAL_DISPLAY_HOLD_SECS") {
            let secs: u64 = raw
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PONTUAL_DISPLAY_HOLD_SECS: {raw}")))?;
            config.display_hold = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.database_path, "pontual.db");
        assert_eq!(config.scan_timeout, Duration::from_millis(3000));
        assert_eq!(config.display_hold, Duration::from_secs(5));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ControllerConfig::default()
            .database_path("/var/lib/pontual/ponto.db")
            .scan_timeout(Duration::from_millis(1000))
            .display_hold(Duration::from_secs(2));

        assert_eq!(config.database_path, "/var/lib/pontual/ponto.db");
        assert_eq!(config.scan_timeout, Duration::from_millis(1000));
        assert_eq!(config.display_hold, Duration::from_secs(2));
    }

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let vars = [
            ("PONTUAL_DATABASE_PATH", "terminal.db"),
            ("PONTUAL_SCAN_TIMEOUT_MS", "1500"),
            ("PONTUAL_DISPLAY_HOLD_SECS", "3"),
        ];
        let config = ControllerConfig::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.database_path, "terminal.db");
        assert_eq!(config.scan_timeout, Duration::from_millis(1500));
        assert_eq!(config.display_hold, Duration::from_secs(3));
    }

    #[test]
    fn test_from_lookup_missing_keys_use_defaults() {
        let config = ControllerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.database_path, "pontual.db");
    }

    #[rstest]
    #[case("100")] // below minimum
    #[case("60000")] // above maximum
    #[case("soon")] // not a number
    fn test_invalid_scan_timeout_is_rejected(#[case] raw: &str) {
        let vars = [("PONTUAL_SCAN_TIMEOUT_MS", raw)];
        assert!(ControllerConfig::from_lookup(lookup_from(&vars)).is_err());
    }

    #[test]
    fn test_unparseable_display_hold_is_rejected() {
        let vars = [("PONTUAL_DISPLAY_HOLD_SECS", "soon")];
        assert!(ControllerConfig::from_lookup(lookup_from(&vars)).is_err());
    }
}
