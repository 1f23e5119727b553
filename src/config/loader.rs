//! Settings persistence.
//!
//! Loads and saves [`PeriodSettings`] as a JSON file. Loading merges stored
//! values over the defaults, so files written by older versions (or edited by
//! hand) keep working.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PeriodSettings;

/// Loads settings from a JSON file.
///
/// Missing keys fall back to their defaults and unknown keys are ignored.
///
/// # Errors
///
/// Returns [`EngineError::SettingsNotFound`] when the file does not exist or
/// cannot be read, and [`EngineError::SettingsParse`] when it is not valid
/// JSON for the settings shape.
pub fn load_settings<P: AsRef<Path>>(path: P) -> EngineResult<PeriodSettings> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::SettingsNotFound {
        path: path_str.clone(),
    })?;

    serde_json::from_str(&content).map_err(|e| EngineError::SettingsParse {
        path: path_str,
        message: e.to_string(),
    })
}

/// Loads settings, falling back to the defaults when the file is missing or
/// unreadable.
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> PeriodSettings {
    match load_settings(&path) {
        Ok(settings) => settings,
        Err(err) => {
            debug!(error = %err, "falling back to default settings");
            PeriodSettings::default()
        }
    }
}

/// Saves settings to a JSON file, pretty-printed for hand editing.
///
/// # Errors
///
/// Returns [`EngineError::SettingsWrite`] when the file cannot be written.
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &PeriodSettings) -> EngineResult<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content =
        serde_json::to_string_pretty(settings).map_err(|e| EngineError::SettingsWrite {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    fs::write(path, content).map_err(|e| EngineError::SettingsWrite {
        path: path_str,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = PeriodSettings {
            use_custom_period: true,
            period_start_day: 21,
            period_end_day: 20,
            ..PeriodSettings::default()
        };
        save_settings(&path, &settings).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_partial_file_merges_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"default_currency": "DKK"}"#).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.default_currency, "DKK");
        assert_eq!(loaded.period_start_day, 16);
        assert!(loaded.week_starts_on_monday);
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_settings(dir.path().join("absent.json"));
        assert!(matches!(
            result,
            Err(EngineError::SettingsNotFound { .. })
        ));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let result = load_settings(&path);
        assert!(matches!(result, Err(EngineError::SettingsParse { .. })));
    }

    #[test]
    fn test_load_or_default_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let from_missing = load_settings_or_default(dir.path().join("absent.json"));
        assert_eq!(from_missing, PeriodSettings::default());

        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        let from_malformed = load_settings_or_default(&path);
        assert_eq!(from_malformed, PeriodSettings::default());
    }
}
