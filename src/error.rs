//! Error types for the Pay Period Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the engine.

use thiserror::Error;

/// The main error type for the Pay Period Engine.
///
/// The calculation functions themselves are total over well-typed inputs;
/// errors only arise at the edges, when loading user settings or parsing
/// date strings handed over by the application.
///
/// # Example
///
/// ```
/// use worklog_engine::error::EngineError;
///
/// let error = EngineError::SettingsNotFound {
///     path: "/missing/settings.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Settings file not found: /missing/settings.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    SettingsNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    SettingsParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Settings file could not be written.
    #[error("Failed to write settings file '{path}': {message}")]
    SettingsWrite {
        /// The path to the file that failed to write.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// A date string could not be parsed in any supported format.
    #[error("Invalid date string: {value}")]
    InvalidDate {
        /// The string that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_not_found_displays_path() {
        let error = EngineError::SettingsNotFound {
            path: "/missing/settings.json".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Settings file not found: /missing/settings.json"
        );
    }

    #[test]
    fn test_settings_parse_displays_path_and_message() {
        let error = EngineError::SettingsParse {
            path: "/config/bad.json".to_string(),
            message: "expected value at line 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse settings file '/config/bad.json': expected value at line 1"
        );
    }

    #[test]
    fn test_settings_write_displays_path_and_message() {
        let error = EngineError::SettingsWrite {
            path: "/readonly/settings.json".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write settings file '/readonly/settings.json': permission denied"
        );
    }

    #[test]
    fn test_invalid_date_displays_value() {
        let error = EngineError::InvalidDate {
            value: "not-a-date".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid date string: not-a-date");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::SettingsNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
