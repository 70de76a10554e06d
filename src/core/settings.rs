use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ── Settings (~/.folio/settings.json) ────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `tracing` filter directive used when `FOLIO_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// File name, relative to the data directory, of the key-value storage
    /// that holds the admin session flag.
    #[serde(default = "default_storage_file")]
    pub storage_file: String,
}

fn default_log_filter() -> String {
    "folio_lib=info".to_string()
}

fn default_storage_file() -> String {
    "storage.json".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            storage_file: default_storage_file(),
        }
    }
}

/// Missing or unreadable settings fall back to defaults; the app must start
/// before logging is up, so there is nobody to report a bad file to.
pub fn read_settings(dir: &Path) -> Settings {
    let path = dir.join("settings.json");
    if !path.exists() {
        return Settings::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(read_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("settings.json"), r#"{"log_filter":"debug"}"#).unwrap();

        let settings = read_settings(dir.path());
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.storage_file, "storage.json");
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("settings.json"), "not json").unwrap();
        assert_eq!(read_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_full_file_round_trips() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            log_filter: "folio_lib=debug".to_string(),
            storage_file: "session.json".to_string(),
        };
        fs::write(
            dir.path().join("settings.json"),
            serde_json::to_string_pretty(&settings).unwrap(),
        )
        .unwrap();
        assert_eq!(read_settings(dir.path()), settings);
    }
}
