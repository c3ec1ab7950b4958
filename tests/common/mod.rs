//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use postdesk::api::{ApiClient, Post, PostId};
use postdesk::config::ApiConfig;
use std::path::PathBuf;
use tempfile::TempDir;

pub use mock_api::{CapturedRequest, MockApi, MockResponse};

pub const TEST_KEY: &str = "test-key";

/// Client pointed at `base_url` with the test key.
pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        key: TEST_KEY.to_string(),
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    })
    .expect("Failed to build client")
}

pub fn post(id: u64, title: &str) -> Post {
    Post {
        id: PostId::Number(id),
        title: title.to_string(),
        categories: "rust".to_string(),
        content: format!("Body of {}", title),
    }
}

/// JSON body for a list response.
pub fn posts_json(posts: &[Post]) -> String {
    serde_json::to_string(posts).expect("Failed to encode posts")
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
