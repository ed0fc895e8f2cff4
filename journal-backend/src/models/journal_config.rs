//! Journal behaviour settings backed by a RON file.
//!
//! Loaded once at startup from `config/journal_config.ron` (or
//! `JOURNAL_CONFIG_PATH`). Missing or invalid files fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Return an error to the client when the data file can't be written.
    /// When false, save failures are only logged.
    #[serde(default = "default_true")]
    pub strict_persistence: bool,
    /// Days back from today covered by the gallery `week` filter.
    #[serde(default = "default_week_window_days")]
    pub week_window_days: i64,
    /// Largest JSON request body accepted. Photos travel inline as data
    /// URLs, so this is well above actix's 2 MiB default.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Upper bound for `week_window_days`, about ten years.
pub const MAX_WEEK_WINDOW_DAYS: i64 = 3650;

fn default_true() -> bool { true }
fn default_week_window_days() -> i64 { 7 }
fn default_max_body_bytes() -> usize { 64 * 1024 * 1024 }

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            strict_persistence: true,
            week_window_days: default_week_window_days(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl JournalConfig {
    /// Load from `path`, falling back to `Default` on any error.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match ron::from_str::<JournalConfig>(&content) {
                Ok(config) => config.validated(),
                Err(e) => {
                    log::warn!("Failed to parse {}: {} — using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::debug!("Could not read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with their defaults.
    fn validated(mut self) -> Self {
        if !(0..=MAX_WEEK_WINDOW_DAYS).contains(&self.week_window_days) {
            log::warn!(
                "week_window_days {} outside 0..={}, using {}",
                self.week_window_days,
                MAX_WEEK_WINDOW_DAYS,
                default_week_window_days()
            );
            self.week_window_days = default_week_window_days();
        }
        if self.max_body_bytes == 0 {
            log::warn!("max_body_bytes must be positive, using {}", default_max_body_bytes());
            self.max_body_bytes = default_max_body_bytes();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = JournalConfig::load(&dir.path().join("nope.ron"));
        assert_eq!(config, JournalConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journal_config.ron");
        std::fs::write(&path, "(strict_persistence: false)").unwrap();

        let config = JournalConfig::load(&path);
        assert!(!config.strict_persistence);
        assert_eq!(config.week_window_days, 7);
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journal_config.ron");
        std::fs::write(&path, "strict_persistence = nope").unwrap();
        assert_eq!(JournalConfig::load(&path), JournalConfig::default());
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journal_config.ron");

        std::fs::write(&path, "(week_window_days: -3, max_body_bytes: 0)").unwrap();
        let config = JournalConfig::load(&path);
        assert_eq!(config.week_window_days, 7);
        assert_eq!(config.max_body_bytes, JournalConfig::default().max_body_bytes);

        std::fs::write(&path, "(week_window_days: 9223372036854775807)").unwrap();
        assert_eq!(JournalConfig::load(&path).week_window_days, 7);

        std::fs::write(&path, "(week_window_days: 30, max_body_bytes: 1024)").unwrap();
        let config = JournalConfig::load(&path);
        assert_eq!(config.week_window_days, 30);
        assert_eq!(config.max_body_bytes, 1024);
    }
}
