//! Configuration file loading and validation.

mod common;

use common::temp_config;
use photo_search::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, "https://api.unsplash.com");
    assert_eq!(config.api.access_key_env, "UNSPLASH_ACCESS_KEY");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "http://localhost:9000"
per_page = 12

[loading]
min_visible_ms = 0
max_visible_ms = 0
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:9000");
    assert_eq!(config.api.search_path, "/search/photos");
    assert_eq!(config.api.per_page, Some(12));
    assert_eq!(config.loading.max_visible_ms, 0);
    assert_eq!(config.ui.tick_rate_ms, 120);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn inverted_loading_window_is_rejected() {
    let (_dir, path) = temp_config("[loading]\nmin_visible_ms = 900\nmax_visible_ms = 100\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("max_visible_ms"));
}

#[test]
fn out_of_range_per_page_is_rejected() {
    let (_dir, path) = temp_config("[api]\nper_page = 31\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn unparsable_base_url_is_rejected() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"::nope\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn zero_tick_rate_is_rejected() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
