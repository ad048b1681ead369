use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hearth")]
#[command(about = "hearth - server-rendered UI components with HTMX fragment swaps")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to serve)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (.toml, .yaml or .json); defaults apply when omitted
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Bind host (overrides config and HEARTH_HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Bind port (overrides config and HEARTH_PORT)
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, RUST_LOG or the config file's log_filter is used
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Serve the widget gallery
    Serve,
    /// Print the effective configuration as JSON and exit
    Config,
}

impl Cli {
    /// Level requested on the command line, if any. `--log-level` wins over
    /// `--verbose`.
    pub fn level_override(&self) -> Option<LevelFilter> {
        match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level.into()),
            (None, true) => Some(LevelFilter::DEBUG),
            (None, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_serve_defaults() {
        let cli = Cli::try_parse_from(["hearth"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.level_override(), None);
    }

    #[test]
    fn log_level_beats_verbose() {
        let cli = Cli::try_parse_from(["hearth", "-v", "--log-level", "warn"]).unwrap();
        assert_eq!(cli.level_override(), Some(LevelFilter::WARN));

        let cli = Cli::try_parse_from(["hearth", "--verbose"]).unwrap();
        assert_eq!(cli.level_override(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["hearth", "serve", "--port", "8080", "-C", "hearth.toml"])
            .unwrap();
        assert_eq!(cli.command, Some(Commands::Serve));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.config, Some(PathBuf::from("hearth.toml")));
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(Cli::try_parse_from(["hearth", "--log-level", "loud"]).is_err());
    }
}
