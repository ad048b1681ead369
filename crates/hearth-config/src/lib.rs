//! # hearth-config
//!
//! Configuration for the hearth server: bind address, body limits, CORS,
//! logging, and the widget-level settings in [`UiConfig`].
//!
//! Files may be TOML, YAML, or JSON (chosen by extension). `HEARTH_HOST`,
//! `HEARTH_PORT` and `HEARTH_LOG` override file values.

mod error;
mod loader;
mod server;

pub use error::{ConfigError, Result};
pub use loader::{ConfigFormat, ENV_HOST, ENV_LOG, ENV_PORT};
pub use server::{ServerConfig, UiConfig};
