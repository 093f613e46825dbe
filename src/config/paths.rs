//! Path management for the expense manager
//!
//! Provides XDG-compliant path resolution for the settings and log files.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_MANAGER_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/expense-manager` or `~/.config/expense-manager`
//! 3. Windows: `%APPDATA%\expense-manager`

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "EXPENSE_MANAGER_DIR";

const APP_DIR_NAME: &str = "expense-manager";

/// Manages all paths used by the expense manager
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/expense-manager/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the diagnostics log used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("expense-manager.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
    }
    let base = directories::BaseDirs::new()
        .ok_or_else(|| ExpenseError::Config("Could not determine home directory".into()))?;
    Ok(base.home_dir().join(".config").join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ExpenseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
