use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub loading: LoadingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Photo-search API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "https://api.unsplash.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the search endpoint, appended to `base_url`.
    #[serde(default = "default_search_path")]
    pub search_path: String,
    /// Direct access key. The environment variable wins when both are set.
    #[serde(default)]
    pub access_key: Option<String>,
    /// Environment variable holding the access key.
    #[serde(default = "default_access_key_env")]
    pub access_key_env: String,
    /// Results per page. Omitted from the request when unset.
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Loading indicator pacing.
///
/// A successful response keeps the spinner up until a duration picked
/// uniformly from `[min_visible_ms, max_visible_ms)` has elapsed since the
/// request started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingConfig {
    #[serde(default = "default_min_visible_ms")]
    pub min_visible_ms: u64,
    #[serde(default = "default_max_visible_ms")]
    pub max_visible_ms: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/animation tick in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

fn default_search_path() -> String {
    "/search/photos".to_string()
}

fn default_access_key_env() -> String {
    "UNSPLASH_ACCESS_KEY".to_string()
}

fn default_connect_timeout() -> u32 {
    10
}

fn default_min_visible_ms() -> u64 {
    500
}

fn default_max_visible_ms() -> u64 {
    1500
}

fn default_tick_rate_ms() -> u64 {
    120
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_path: default_search_path(),
            access_key: None,
            access_key_env: default_access_key_env(),
            per_page: None,
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            min_visible_ms: default_min_visible_ms(),
            max_visible_ms: default_max_visible_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
