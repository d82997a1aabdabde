//! Error types for the stickyband demo shell.
//!
//! The decoration core has no failure modes: missing groups, unresolved
//! positions and single-level adapters all resolve to neutral values. Errors
//! only arise in the impure shell (config files, log files, the terminal) and
//! are collected here so `main` can propagate them with `?`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, drawing or input failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] TuiError),
}
