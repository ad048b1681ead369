//! Server and UI configuration
//!
//! Every field has a serde default, so a config file only needs the keys it
//! changes.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on request bodies, in bytes
    pub max_body_bytes: usize,
    /// Origins allowed by the CORS layer. Empty means same-origin only.
    pub cors_origins: Vec<String>,
    /// `EnvFilter` directive used when neither a flag nor `RUST_LOG` is set
    pub log_filter: String,
    pub ui: UiConfig,
}

/// Widget-level settings shared by every registered widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix for conventional widget routes (`{prefix}/{widget}/{id}/{action}`)
    pub route_prefix: String,
    /// Seconds between `ping` events on toast streams
    pub sse_keepalive_secs: u64,
    /// Toasts rendered at once; older ones stay in state but are hidden
    pub toast_visible: usize,
    /// Auto-dismiss delay for toasts that do not specify one
    pub toast_default_duration_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_body_bytes: 1024 * 1024,
            cors_origins: Vec::new(),
            log_filter: "hearth=info,tower_http=info".to_string(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            route_prefix: "/htmx".to_string(),
            sse_keepalive_secs: 30,
            toast_visible: 3,
            toast_default_duration_ms: 4000,
        }
    }
}

impl ServerConfig {
    /// `host:port` as a socket address string
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be non-zero".to_string()));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_body_bytes must be greater than zero".to_string(),
            ));
        }
        self.ui.validate()
    }
}

impl UiConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.route_prefix.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "route_prefix must start with '/': {}",
                self.route_prefix
            )));
        }
        if self.route_prefix.len() > 1 && self.route_prefix.ends_with('/') {
            return Err(ConfigError::Invalid(format!(
                "route_prefix must not end with '/': {}",
                self.route_prefix
            )));
        }
        if self.sse_keepalive_secs == 0 {
            return Err(ConfigError::Invalid(
                "sse_keepalive_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.ui.sse_keepalive_secs, 30);
    }

    #[test]
    fn zero_port_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn route_prefix_shape_is_checked() {
        let mut ui = UiConfig::default();
        ui.route_prefix = "htmx".to_string();
        assert!(ui.validate().is_err());

        ui.route_prefix = "/htmx/".to_string();
        assert!(ui.validate().is_err());

        ui.route_prefix = "/".to_string();
        assert!(ui.validate().is_ok());
    }

    #[test]
    fn zero_keepalive_is_rejected() {
        let ui = UiConfig {
            sse_keepalive_secs: 0,
            ..UiConfig::default()
        };
        assert!(ui.validate().is_err());
    }
}
