//! Logging setup
//!
//! The library logs through the `log` facade only; the binary picks the
//! backend here. `RUST_LOG` overrides the default `warn` filter.

use env_logger::{Builder, Env, Target, WriteStyle};
use std::fs::OpenOptions;

use crate::config::ExpensePaths;
use crate::error::ExpenseResult;

const DEFAULT_FILTER: &str = "warn";

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for CLI commands
    Stderr,
    /// The log file under the config directory, for the TUI
    File,
}

/// Install the global logger
///
/// Calling it twice is harmless; the second call keeps the first logger.
pub fn init(paths: &ExpensePaths, target: LogTarget) -> ExpenseResult<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File => {
            paths.ensure_directories()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())?;
            builder
                .target(Target::Pipe(Box::new(file)))
                .write_style(WriteStyle::Never);
        }
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
    Ok(())
}
