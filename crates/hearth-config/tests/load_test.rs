//! File-based loading tests

use hearth_config::{ConfigError, ServerConfig, ENV_PORT};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[tokio::test]
#[serial]
async fn loads_toml_file() {
    let file = write_config(
        ".toml",
        r#"
host = "0.0.0.0"
port = 4000
cors_origins = ["http://localhost:5173"]

[ui]
route_prefix = "/ui"
"#,
    );

    let config = ServerConfig::load(Some(file.path())).await.unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 4000);
    assert_eq!(config.cors_origins, vec!["http://localhost:5173".to_string()]);
    assert_eq!(config.ui.route_prefix, "/ui");
    assert_eq!(config.ui.sse_keepalive_secs, 30);
}

#[tokio::test]
#[serial]
async fn loads_yaml_file() {
    let file = write_config(".yaml", "port: 4100\nui:\n  toast_visible: 1\n");
    let config = ServerConfig::load(Some(file.path())).await.unwrap();
    assert_eq!(config.port, 4100);
    assert_eq!(config.ui.toast_visible, 1);
}

#[tokio::test]
#[serial]
async fn missing_file_is_io_error() {
    let err = ServerConfig::load(Some(std::path::Path::new("/nonexistent/hearth.toml")))
        .await
        .unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[tokio::test]
#[serial]
async fn malformed_file_is_parse_error() {
    let file = write_config(".toml", "port = \"not a number\"\n");
    let err = ServerConfig::load(Some(file.path())).await.unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[tokio::test]
#[serial]
async fn invalid_values_fail_validation() {
    let file = write_config(".json", r#"{"ui": {"route_prefix": "no-slash"}}"#);
    let err = ServerConfig::load(Some(file.path())).await.unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[tokio::test]
#[serial]
async fn environment_overrides_file() {
    let file = write_config(".toml", "port = 4000\n");
    std::env::set_var(ENV_PORT, "4555");
    let result = ServerConfig::load(Some(file.path())).await;
    std::env::remove_var(ENV_PORT);

    assert_eq!(result.unwrap().port, 4555);
}

#[test]
fn defaults_round_trip_through_toml() {
    let config = ServerConfig::default();
    let text = toml::to_string_pretty(&config).expect("serialize defaults");
    let parsed: ServerConfig = toml::from_str(&text).expect("parse defaults");
    assert_eq!(parsed, config);
}
