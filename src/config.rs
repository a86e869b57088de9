use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConvertError;

/// Addon used when `ADDON_URL` is not set
pub const DEFAULT_ADDON_URL: &str = "https://da5f663b4690-minhatv.baby-beamup.club/";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Addon
    pub addon_url: String,

    // Output
    pub output_file: String,
    pub quality_filter: String,

    // Fetching
    pub fetch_timeout_secs: u64,
    pub max_concurrent_streams: usize,
    pub user_agent: String,

    // Logging
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Addon
            addon_url: env::var("ADDON_URL").unwrap_or_else(|_| DEFAULT_ADDON_URL.to_string()),

            // Output
            output_file: env::var("OUTPUT_FILE").unwrap_or_else(|_| "playlist.m3u".to_string()),
            quality_filter: env::var("QUALITY_FILTER").unwrap_or_default(),

            // Fetching
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(30),
            max_concurrent_streams: env::var("MAX_CONCURRENT_STREAMS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(10),
            user_agent: env::var("USER_AGENT")
                .unwrap_or_else(|_| format!("stremio-m3u/{}", env!("CARGO_PKG_VERSION"))),

            // Logging
            log_json: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    /// Configuration for a given addon with every other setting at its default
    pub fn for_addon(addon_url: &str, output_file: &str) -> Self {
        Self {
            addon_url: addon_url.to_string(),
            output_file: output_file.to_string(),
            quality_filter: String::new(),
            fetch_timeout_secs: 30,
            max_concurrent_streams: 10,
            user_agent: format!("stremio-m3u/{}", env!("CARGO_PKG_VERSION")),
            log_json: false,
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Reject addon addresses that are not absolute http(s) URLs
    pub fn validate(&self) -> Result<(), ConvertError> {
        let parsed = Url::parse(&self.addon_url)
            .map_err(|e| ConvertError::Config(format!("invalid ADDON_URL '{}': {}", self.addon_url, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConvertError::Config(format!(
                "ADDON_URL must use http or https, got '{}'",
                other
            ))),
        }
    }
}
