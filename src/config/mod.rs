//! Configuration module.
//!
//! Settings come from (lowest to highest precedence) built-in defaults, a
//! TOML config file and CLI flags. See [`loader`].

pub mod loader;

pub use loader::{
    apply_cli_overrides, default_config_path, default_log_path, load_config_file,
    load_config_with_precedence, merge_config, CliOverrides, ConfigError, ConfigFile,
    ResolvedConfig, CONFIG_ENV_VAR,
};
