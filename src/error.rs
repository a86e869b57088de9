use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single request against the addon
#[derive(Error, Debug)]
pub enum AddonError {
    /// Network/connection error, including timeouts
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

/// Conditions that abort a conversion run
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Client(#[source] AddonError),

    #[error("Failed to fetch manifest: {0}")]
    Manifest(#[source] AddonError),

    #[error("No channels found")]
    NoChannels,

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
