//! User settings for the expense manager
//!
//! Manages the remote store location, the request timeout and display
//! preferences such as the currency symbol.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Environment variable overriding the API base URL
pub const API_URL_ENV_VAR: &str = "EXPENSE_MANAGER_API_URL";

/// Shortest request timeout handed to the transport
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// User settings for the expense manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the remote expense store (without the `/api/expenses` suffix)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout applied by the HTTP transport
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How long TUI notifications stay on screen
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "https://expensemanager_backend.up.railway.app".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_notification_secs() -> u64 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            notification_secs: default_notification_secs(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values that would break rendering
    pub fn validate(&self) -> Result<(), ExpenseError> {
        let mut sample = String::new();
        let renders = write!(sample, "{}", NaiveDate::default().format(&self.date_format)).is_ok();
        if self.date_format.trim().is_empty() || !renders {
            return Err(ExpenseError::Config(format!(
                "Invalid date_format '{}': expected a strftime date pattern such as %Y-%m-%d",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Apply run-time overrides from the environment
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }
    }

    /// Request timeout as a `Duration`, never below one second
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs.max(MIN_REQUEST_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(
            settings.api_base_url,
            "https://expensemanager_backend.up.railway.app"
        );
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.api_base_url = "http://localhost:8080".into();
        settings.currency_symbol = "$".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.api_base_url, "http://localhost:8080");
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_load_without_file_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol":"€"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn test_bad_date_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        for pattern in ["%Q", "%H:%M", ""] {
            let body = serde_json::json!({ "date_format": pattern }).to_string();
            std::fs::write(paths.settings_file(), body).unwrap();

            let err = Settings::load_or_create(&paths).unwrap_err();
            assert!(matches!(err, ExpenseError::Config(_)), "{:?}", pattern);
            assert!(err.to_string().contains("date_format"));
        }
    }

    #[test]
    fn test_custom_date_format_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format":"%d %b %Y"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.date_format, "%d %b %Y");
    }

    #[test]
    fn test_zero_timeout_is_raised_to_one_second() {
        let settings = Settings {
            request_timeout_secs: 0,
            ..Settings::default()
        };
        assert_eq!(settings.request_timeout(), std::time::Duration::from_secs(1));
        assert_eq!(
            Settings::default().request_timeout(),
            std::time::Duration::from_secs(30)
        );
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
