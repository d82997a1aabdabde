//! Configuration file loading with precedence handling.

use crate::decoration::DecorationConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "STICKYBAND_CONFIG";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/stickyband/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows below the top edge where pinned bands stop.
    #[serde(default)]
    pub margin_top: Option<i32>,

    /// Draw bands over content instead of reserving rows for them.
    #[serde(default)]
    pub render_inline: Option<bool>,

    /// Show the sub-header level in the demo list.
    #[serde(default)]
    pub double_headers: Option<bool>,

    /// Number of items in the demo list.
    #[serde(default)]
    pub item_count: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Top margin for pinned bands, `None` to pin at the top edge.
    pub margin_top: Option<i32>,
    /// Inline rendering.
    pub render_inline: bool,
    /// Two-level demo list.
    pub double_headers: bool,
    /// Demo item count.
    pub item_count: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            margin_top: None,
            render_inline: false,
            double_headers: true,
            item_count: 100,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Geometry settings for the decoration.
    pub fn decoration_config(&self) -> DecorationConfig {
        DecorationConfig {
            margin_top: self.margin_top,
            render_inline: self.render_inline,
        }
    }
}

/// CLI values that override everything else when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--margin-top`
    pub margin_top: Option<i32>,
    /// `--inline`
    pub render_inline: Option<bool>,
    /// `--single` (stored inverted)
    pub double_headers: Option<bool>,
    /// `--items`
    pub item_count: Option<usize>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/stickyband/stickyband.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("stickyband").join("stickyband.log")
    } else {
        PathBuf::from("stickyband.log")
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stickyband").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `STICKYBAND_CONFIG` environment variable
/// 3. Default path `~/.config/stickyband/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        margin_top: config.margin_top.or(defaults.margin_top),
        render_inline: config.render_inline.unwrap_or(defaults.render_inline),
        double_headers: config.double_headers.unwrap_or(defaults.double_headers),
        item_count: config.item_count.unwrap_or(defaults.item_count),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(margin_top) = overrides.margin_top {
        config.margin_top = Some(margin_top);
    }
    if let Some(render_inline) = overrides.render_inline {
        config.render_inline = render_inline;
    }
    if let Some(double_headers) = overrides.double_headers {
        config.double_headers = double_headers;
    }
    if let Some(item_count) = overrides.item_count {
        config.item_count = item_count;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
