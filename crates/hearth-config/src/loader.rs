//! Config file loading and environment overrides

use crate::error::{ConfigError, Result};
use crate::server::ServerConfig;
use std::path::Path;
use tracing::{debug, info};

pub const ENV_HOST: &str = "HEARTH_HOST";
pub const ENV_PORT: &str = "HEARTH_PORT";
pub const ENV_LOG: &str = "HEARTH_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            other => Err(ConfigError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }
}

impl ServerConfig {
    /// Load from `path` (or defaults when `None`), apply environment
    /// overrides, then validate.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path).await?,
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub async fn load_from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse(&contents, format).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse config text in the given format.
    pub fn parse(contents: &str, format: ConfigFormat) -> std::result::Result<Self, String> {
        match format {
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            #[cfg(not(feature = "toml"))]
            ConfigFormat::Toml => Err("toml support is disabled".to_string()),
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            #[cfg(not(feature = "yaml"))]
            ConfigFormat::Yaml => Err("yaml support is disabled".to_string()),
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Apply `HEARTH_*` overrides read through `lookup`.
    ///
    /// Taking a lookup function keeps this testable without touching the
    /// process environment.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup(ENV_HOST) {
            debug!(%host, "Host overridden from environment");
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{ENV_PORT} is not a valid port: {port}"))
            })?;
            debug!(port = self.port, "Port overridden from environment");
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.YML")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.ini")),
            Err(ConfigError::UnsupportedFormat(ext)) if ext == "ini"
        ));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ServerConfig::parse("port = 8081\n[ui]\ntoast_visible = 5\n", ConfigFormat::Toml)
            .unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.ui.toast_visible, 5);
        assert_eq!(config.ui.route_prefix, "/htmx");
    }

    #[test]
    fn yaml_and_json_parse() {
        let yaml = ServerConfig::parse("host: 0.0.0.0\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(yaml.host, "0.0.0.0");

        let json = ServerConfig::parse(r#"{"ui": {"sse_keepalive_secs": 5}}"#, ConfigFormat::Json)
            .unwrap();
        assert_eq!(json.ui.sse_keepalive_secs, 5);
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = ServerConfig::default();
        config
            .apply_env_overrides(env(&[
                (ENV_HOST, "0.0.0.0"),
                (ENV_PORT, " 9000 "),
                (ENV_LOG, "debug"),
            ]))
            .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn bad_port_override_is_invalid() {
        let mut config = ServerConfig::default();
        let err = config
            .apply_env_overrides(env(&[(ENV_PORT, "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
