use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_CATALOG_URL: &str = "https://swapi.dev/api";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_SYNC_NOTICE_MS: u64 = 3_000;

/// Top-level application configuration.
///
/// Values are baked in at compile time (see `build.rs`); the WASM bundle has no
/// filesystem or process environment to read from at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the local backend (auth, entities, sync).
    pub api_base_url: String,
    /// Base URL of the public external catalog.
    pub catalog_base_url: String,
    /// Abort outstanding requests after this many milliseconds.
    pub request_timeout_ms: u64,
    /// How long the sync success indicator stays up before the draft resets.
    pub sync_notice_ms: u64,
    /// `log` level name for the console logger.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            catalog_base_url: DEFAULT_CATALOG_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            sync_notice_ms: DEFAULT_SYNC_NOTICE_MS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from `SWAPI_*` compile-time variables, falling
    /// back to the defaults for anything missing or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "SWAPI_API_URL" => option_env!("SWAPI_API_URL"),
            "SWAPI_CATALOG_URL" => option_env!("SWAPI_CATALOG_URL"),
            "SWAPI_REQUEST_TIMEOUT_MS" => option_env!("SWAPI_REQUEST_TIMEOUT_MS"),
            "SWAPI_SYNC_NOTICE_MS" => option_env!("SWAPI_SYNC_NOTICE_MS"),
            "SWAPI_LOG_LEVEL" => option_env!("SWAPI_LOG_LEVEL"),
            _ => None,
        })
    }

    fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str, fallback: u64| {
            lookup(key)
                .and_then(|raw| raw.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(fallback)
        };

        Self {
            api_base_url: lookup("SWAPI_API_URL")
                .map(normalize_base_url)
                .unwrap_or(defaults.api_base_url),
            catalog_base_url: lookup("SWAPI_CATALOG_URL")
                .map(normalize_base_url)
                .unwrap_or(defaults.catalog_base_url),
            request_timeout_ms: millis("SWAPI_REQUEST_TIMEOUT_MS", defaults.request_timeout_ms),
            sync_notice_ms: millis("SWAPI_SYNC_NOTICE_MS", defaults.sync_notice_ms),
            log_level: lookup("SWAPI_LOG_LEVEL")
                .map(|level| level.trim().to_lowercase())
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn sync_notice(&self) -> Duration {
        Duration::from_millis(self.sync_notice_ms)
    }

    /// Parsed log level; unknown names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
