//! Command-line interface definitions.
//!
//! Defines the CLI structure using `clap`: one `draftkings` command that
//! pulls the feed once or keeps polling it, plus configuration helpers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sportsbook odds puller
#[derive(Parser, Debug)]
#[command(name = "oddsline")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the oddsline CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pull DraftKings odds into the CSV output
    Draftkings(DraftkingsArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `oddsline config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file.
    Validate,
}

/// Arguments for the `draftkings` subcommand.
#[derive(Parser, Debug)]
pub struct DraftkingsArgs {
    /// Poll, rewriting the CSV every interval (5 seconds by default)
    #[arg(long)]
    pub poll: bool,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draftkings_single_shot() {
        let cli = Cli::try_parse_from(["oddsline", "draftkings"]).unwrap();
        match cli.command {
            Commands::Draftkings(args) => {
                assert!(!args.poll);
                assert!(!args.json_logs);
                assert!(args.log_level.is_none());
            }
            Commands::Config(_) => panic!("expected draftkings"),
        }
        assert!(cli.config.is_none());
        assert!(!cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_poll_flag() {
        let cli = Cli::try_parse_from(["oddsline", "draftkings", "--poll"]).unwrap();
        assert!(matches!(cli.command, Commands::Draftkings(DraftkingsArgs { poll: true, .. })));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "oddsline",
            "draftkings",
            "--json",
            "-q",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_parse_log_overrides() {
        let cli = Cli::try_parse_from([
            "oddsline",
            "draftkings",
            "--log-level",
            "debug",
            "--json-logs",
        ])
        .unwrap();
        if let Commands::Draftkings(args) = cli.command {
            assert_eq!(args.log_level.as_deref(), Some("debug"));
            assert!(args.json_logs);
        } else {
            panic!("expected draftkings");
        }
    }

    #[test]
    fn test_parse_config_commands() {
        let cli = Cli::try_parse_from(["oddsline", "config", "show"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Show)));
        let cli = Cli::try_parse_from(["oddsline", "config", "validate"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Validate)));
    }

    #[test]
    fn test_parse_color_never() {
        let cli = Cli::try_parse_from(["oddsline", "--color", "never", "draftkings"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["oddsline", "fanduel"]).is_err());
    }
}
