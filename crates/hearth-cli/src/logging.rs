//! Subscriber setup
//!
//! Filter precedence: a level given on the command line, then `RUST_LOG`,
//! then the config file's `log_filter`.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn env_filter(
    cli_level: Option<LevelFilter>,
    rust_log: Option<&str>,
    config_filter: &str,
) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level.to_string());
    }
    let directives = rust_log
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(config_filter);
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_level_wins() {
        let filter = env_filter(Some(LevelFilter::WARN), Some("debug"), "hearth=info");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn rust_log_beats_config() {
        let filter = env_filter(None, Some("hearth_web=trace"), "hearth=info");
        assert_eq!(filter.to_string(), "hearth_web=trace");
    }

    #[test]
    fn config_filter_is_the_fallback() {
        let filter = env_filter(None, Some("  "), "hearth=info");
        assert_eq!(filter.to_string(), "hearth=info");
    }
}
