//! Config file loading and validation.

mod common;

use common::temp_config;
use postdesk::config::{Config, ConfigError};
use std::path::PathBuf;

#[test]
fn defaults_point_at_public_service() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "https://reduxblog.herokuapp.com/api");
    assert_eq!(config.api.key, "postdesk");
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert!(config.api.user_agent.starts_with("postdesk/"));
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("postdesk/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.api.base_url, Config::default().api.base_url);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
key = "my-key"
user_agent = "custom/1.0"

[logging]
file = "/tmp/postdesk-test.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.key, "my-key");
    assert_eq!(config.api.user_agent, "custom/1.0");
    assert_eq!(config.api.base_url, "https://reduxblog.herokuapp.com/api");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(
        config.logging.file_path(),
        PathBuf::from("/tmp/postdesk-test.log")
    );
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[api\nkey = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn rejects_non_http_base_url() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"ftp://example.com/api\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("http"));
}

#[test]
fn rejects_unparseable_base_url() {
    let mut config = Config::default();
    config.api.base_url = "not a url".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn rejects_blank_key() {
    let (_dir, path) = temp_config("[api]\nkey = \"  \"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn rejects_zero_tick_rate() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
