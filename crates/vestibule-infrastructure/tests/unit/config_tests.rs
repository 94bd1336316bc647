//! Configuration loading and validation tests
//!
//! These tests only read the environment. Mutating tests live in
//! `config_env_tests.rs`.

use std::path::PathBuf;

use vestibule_domain::error::Error;
use vestibule_infrastructure::config::loader::validate_app_config;
use vestibule_infrastructure::config::{AppConfig, ConfigLoader, PasswordAlgorithm};
use vestibule_infrastructure::constants::{BCRYPT_DEFAULT_COST, DEFAULT_HTTP_PORT};

use crate::support::SECRET;

fn valid_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt.secret = SECRET.to_string();
    config
}

fn assert_configuration_error(config: &AppConfig, needle: &str) {
    match validate_app_config(config) {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.contains(needle), "unexpected message: {message}");
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_defaults_match_documented_values() {
    let config = AppConfig::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, DEFAULT_HTTP_PORT);
    assert_eq!(config.auth.jwt.expiration_secs, 86_400);
    assert_eq!(config.auth.password.algorithm, PasswordAlgorithm::Bcrypt);
    assert_eq!(config.auth.password.bcrypt_cost, BCRYPT_DEFAULT_COST);
    assert_eq!(config.storage.database_path, PathBuf::from("auth/users.db"));
    assert_eq!(config.logging.level, "info");
    assert!(config.server.cors.enabled);
}

#[test]
fn test_missing_secret_is_rejected() {
    assert_configuration_error(&AppConfig::default(), "JWT secret is required");
}

#[test]
fn test_short_secret_is_rejected() {
    let mut config = valid_config();
    config.auth.jwt.secret = "too-short".to_string();
    assert_configuration_error(&config, "at least 32");
}

#[test]
fn test_zero_expiration_is_rejected() {
    let mut config = valid_config();
    config.auth.jwt.expiration_secs = 0;
    assert_configuration_error(&config, "JWT expiration");
}

#[test]
fn test_bcrypt_cost_bounds() {
    let mut config = valid_config();
    config.auth.password.bcrypt_cost = 32;
    assert_configuration_error(&config, "bcrypt cost");

    config.auth.password.bcrypt_cost = 4;
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_zero_port_and_bad_log_level_are_rejected() {
    let mut config = valid_config();
    config.server.port = 0;
    assert_configuration_error(&config, "port");

    let mut config = valid_config();
    config.logging.level = "chatty".to_string();
    assert_configuration_error(&config, "Invalid log level");
}

#[test]
fn test_valid_config_passes() {
    assert!(validate_app_config(&valid_config()).is_ok());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vestibule.toml");
    std::fs::write(
        &path,
        format!(
            r#"
[server]
port = 4100

[server.cors]
allowed_origins = ["https://app.example.com"]

[auth.jwt]
secret = "{SECRET}"
expiration_secs = 3600

[auth.password]
algorithm = "argon2"
bcrypt_cost = 12

[storage]
database_path = "/var/lib/vestibule/users.db"
"#
        ),
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("VESTIBULE_UNIT_TEST_UNSET")
        .load()
        .unwrap();

    assert_eq!(config.server.port, 4100);
    assert_eq!(config.server.host, "127.0.0.1", "unset keys keep defaults");
    assert_eq!(
        config.server.cors.allowed_origins,
        vec!["https://app.example.com".to_string()]
    );
    assert_eq!(config.auth.jwt.expiration_secs, 3600);
    assert_eq!(config.auth.password.algorithm, PasswordAlgorithm::Argon2);
    assert_eq!(config.auth.password.bcrypt_cost, 12);
    assert_eq!(
        config.storage.database_path,
        PathBuf::from("/var/lib/vestibule/users.db")
    );
}

#[test]
fn test_invalid_toml_values_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vestibule.toml");
    std::fs::write(
        &path,
        format!("[server]\nport = \"not-a-port\"\n\n[auth.jwt]\nsecret = \"{SECRET}\"\n"),
    )
    .unwrap();

    let result = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("VESTIBULE_UNIT_TEST_UNSET")
        .load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}
