//! stickyband demo - Entry Point

use clap::Parser;
use std::path::PathBuf;
use stickyband::model::AppError;
use tracing::info;

/// stickyband - sticky group headers in a scrolling terminal list
#[derive(Parser, Debug)]
#[command(name = "stickyband")]
#[command(version)]
#[command(about = "Scroll a sample list with sticky headers and sub-headers")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rows below the top edge where pinned headers stop
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(0..))]
    pub margin_top: Option<i32>,

    /// Draw headers over the items instead of reserving rows for them
    #[arg(short, long)]
    pub inline: bool,

    /// Headers only, no sub-headers
    #[arg(short, long)]
    pub single: bool,

    /// Number of items in the list
    #[arg(short = 'n', long)]
    pub items: Option<usize>,
}

impl Args {
    /// Flags that override the config file. Unset switches leave it alone.
    fn overrides(&self) -> stickyband::config::CliOverrides {
        stickyband::config::CliOverrides {
            margin_top: self.margin_top,
            render_inline: self.inline.then_some(true),
            double_headers: self.single.then_some(false),
            item_count: self.items,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → CLI Args
    let config = {
        let config_file = stickyband::config::load_config_with_precedence(args.config.clone())?;
        let merged = stickyband::config::merge_config(config_file);
        stickyband::config::apply_cli_overrides(merged, args.overrides())
    };

    stickyband::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    stickyband::view::run_demo(&config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["stickyband", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["stickyband", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["stickyband"]);
        assert_eq!(args.config, None);
        assert_eq!(args.margin_top, None);
        assert!(!args.inline);
        assert!(!args.single);
        assert_eq!(args.items, None);
        assert_eq!(args.overrides(), stickyband::config::CliOverrides::default());
    }

    #[test]
    fn test_margin_top_long_flag() {
        let args = Args::parse_from(["stickyband", "--margin-top", "3"]);
        assert_eq!(args.margin_top, Some(3));
    }

    #[test]
    fn test_margin_top_rejects_negative() {
        let result = Args::try_parse_from(["stickyband", "--margin-top", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_items_short_flag() {
        let args = Args::parse_from(["stickyband", "-n", "500"]);
        assert_eq!(args.items, Some(500));
    }

    #[test]
    fn test_switches_become_overrides() {
        let args = Args::parse_from(["stickyband", "--inline", "--single"]);
        let overrides = args.overrides();
        assert_eq!(overrides.render_inline, Some(true));
        assert_eq!(overrides.double_headers, Some(false));
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["stickyband", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_cli_overrides_win_over_config_file() {
        use stickyband::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            margin_top: Some(1),
            double_headers: Some(true),
            ..ConfigFile::default()
        };
        let merged = merge_config(Some(config_file));
        assert_eq!(merged.margin_top, Some(1));

        let args = Args::parse_from(["stickyband", "-m", "4", "--single"]);
        let resolved = apply_cli_overrides(merged, args.overrides());
        assert_eq!(resolved.margin_top, Some(4));
        assert!(!resolved.double_headers);
    }
}
