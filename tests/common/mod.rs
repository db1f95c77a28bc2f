//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use photo_search::api::{ImageRecord, SearchPage, UnsplashClient};
use photo_search::config::{ApiConfig, SecureString};
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_KEY: &str = "test-key";

/// Client pointed at `base_url` with the test key.
pub fn client_for(base_url: &str) -> UnsplashClient {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    };
    UnsplashClient::new(&api, SecureString::new(TEST_KEY.to_string()))
        .expect("Failed to build client")
}

pub fn record(id: &str) -> ImageRecord {
    ImageRecord {
        id: id.to_string(),
        ..ImageRecord::default()
    }
}

pub fn page_of(ids: &[&str], total_pages: u32) -> SearchPage {
    SearchPage {
        total: ids.len() as u64,
        total_pages: Some(total_pages),
        results: ids.iter().map(|id| record(id)).collect(),
    }
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
