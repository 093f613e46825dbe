//! Configuration module for the expense manager
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Environment overrides for the API location

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
