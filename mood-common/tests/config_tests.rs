//! Tests for configuration loading and setting resolution
//!
//! Uses serial_test: tests that touch environment variables run one at a
//! time to avoid races.

use mood_common::config::{
    load_config, load_toml_config, resolve_optional_setting, resolve_setting, TomlConfig,
    DEFAULT_PORT,
};
use mood_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

const TEST_ENV: &str = "MOOD_TEST_SETTING";

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
server_url = "http://music.local:9000"
port = 9100
bind = "0.0.0.0"
"#,
    );

    let config = load_toml_config(file.path()).unwrap();
    assert_eq!(config.server_url.as_deref(), Some("http://music.local:9000"));
    assert_eq!(config.port, Some(9100));
    assert_eq!(config.bind.as_deref(), Some("0.0.0.0"));
}

#[test]
fn test_load_partial_config() {
    let file = write_config("port = 8123\n");

    let config = load_toml_config(file.path()).unwrap();
    assert_eq!(config.port, Some(8123));
    assert!(config.server_url.is_none());
    assert!(config.bind.is_none());
}

#[test]
fn test_malformed_explicit_config_is_error() {
    let file = write_config("port = \"not a number\"\n");

    let result = load_config(Some(file.path()));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_missing_explicit_config_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let result = load_config(Some(&missing));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
#[serial]
fn test_cli_argument_wins() {
    env::set_var(TEST_ENV, "7000");

    let port = resolve_setting(Some(6000u16), TEST_ENV, Some(5000), DEFAULT_PORT);
    assert_eq!(port, 6000);

    env::remove_var(TEST_ENV);
}

#[test]
#[serial]
fn test_env_var_beats_config_file() {
    env::set_var(TEST_ENV, "7000");

    let port = resolve_setting(None, TEST_ENV, Some(5000u16), DEFAULT_PORT);
    assert_eq!(port, 7000);

    env::remove_var(TEST_ENV);
}

#[test]
#[serial]
fn test_invalid_env_var_falls_through_to_file() {
    env::set_var(TEST_ENV, "eighty");

    let port = resolve_setting(None, TEST_ENV, Some(5000u16), DEFAULT_PORT);
    assert_eq!(port, 5000);

    env::remove_var(TEST_ENV);
}

#[test]
#[serial]
fn test_default_when_nothing_set() {
    env::remove_var(TEST_ENV);

    let config = TomlConfig::default();
    let port = resolve_setting(None, TEST_ENV, config.port, DEFAULT_PORT);
    assert_eq!(port, DEFAULT_PORT);

    let url = resolve_setting(
        None,
        TEST_ENV,
        config.server_url,
        "http://fallback".to_string(),
    );
    assert_eq!(url, "http://fallback");
}

#[test]
fn test_load_spotify_credentials() {
    let file = write_config(
        r#"
spotify_client_id = "abc"
spotify_client_secret = "xyz"
"#,
    );

    let config = load_toml_config(file.path()).unwrap();
    assert_eq!(config.spotify_client_id.as_deref(), Some("abc"));
    assert_eq!(config.spotify_client_secret.as_deref(), Some("xyz"));
}

#[test]
#[serial]
fn test_optional_setting_priority() {
    env::set_var(TEST_ENV, "from-env");

    let cli = resolve_optional_setting(
        Some("from-cli".to_string()),
        TEST_ENV,
        Some("from-file".to_string()),
    );
    assert_eq!(cli.as_deref(), Some("from-cli"));

    let env_value = resolve_optional_setting(None, TEST_ENV, Some("from-file".to_string()));
    assert_eq!(env_value.as_deref(), Some("from-env"));

    env::remove_var(TEST_ENV);
}

#[test]
#[serial]
fn test_optional_setting_empty_env_is_unset() {
    env::set_var(TEST_ENV, "");

    let value = resolve_optional_setting(None, TEST_ENV, Some("from-file".to_string()));
    assert_eq!(value.as_deref(), Some("from-file"));

    env::remove_var(TEST_ENV);
    let value: Option<String> = resolve_optional_setting(None, TEST_ENV, None);
    assert!(value.is_none());
}
