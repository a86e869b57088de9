//! Addon HTTP client
//!
//! Issues single-attempt GET requests against the three addon endpoints.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::parser::{parse_manifest, parse_metas};
use super::urls::{catalog_url, manifest_url, stream_url};
use crate::config::Config;
use crate::error::AddonError;
use crate::models::{CatalogRef, Manifest, MetaItem};

/// Addon API client
pub struct AddonClient {
    http: Client,
    base_url: String,
}

impl AddonClient {
    /// Create a new addon client
    ///
    /// # Arguments
    /// * `base_url` - Addon base address, with or without trailing slash
    /// * `timeout` - Applied to every request
    /// * `user_agent` - Sent as `User-Agent`
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, AddonError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AddonError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AddonError> {
        Self::new(&config.addon_url, config.fetch_timeout(), &config.user_agent)
    }

    /// GET a URL and return the body of a 2xx response
    async fn get_text(&self, url: &str) -> Result<String, AddonError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AddonError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AddonError::Http(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| AddonError::Network(e.to_string()))
    }

    /// GET a URL and decode the body as JSON, logging the body if it is not JSON
    async fn get_json_logged(&self, url: &str) -> Result<Value, AddonError> {
        let text = self.get_text(url).await?;
        decode_json(&text).map_err(|e| {
            let preview: String = text.chars().take(500).collect();
            debug!("Response text from {}: {}", url, preview);
            e
        })
    }

    /// Fetch and parse `manifest.json`. Failure here is fatal to a run.
    pub async fn fetch_manifest(&self) -> Result<Manifest, AddonError> {
        let url = manifest_url(&self.base_url);
        info!("Fetching manifest: {}", url);

        let json = self.get_json_logged(&url).await?;
        Ok(parse_manifest(&json))
    }

    /// Fetch a catalog's items
    ///
    /// Returns `None` on any failure; the caller skips the catalog.
    pub async fn fetch_catalog_items(&self, catalog: &CatalogRef) -> Option<Vec<MetaItem>> {
        let url = catalog_url(&self.base_url, &catalog.kind, &catalog.id);
        info!("Fetching catalog: {}", url);

        match self.get_json_logged(&url).await {
            Ok(json) => Some(parse_metas(&json)),
            Err(e) => {
                warn!("Failed to fetch catalog '{}': {}", catalog.name, e);
                None
            }
        }
    }

    /// Fetch the stream list for one item
    ///
    /// Items without a resolvable stream are common, so failures are not logged.
    pub async fn fetch_stream(&self, kind: &str, id: &str) -> Option<Value> {
        let text = self
            .get_text(&stream_url(&self.base_url, kind, id))
            .await
            .ok()?;
        decode_json(&text).ok()
    }
}

fn decode_json(text: &str) -> Result<Value, AddonError> {
    serde_json::from_str(text).map_err(|e| AddonError::Parse(e.to_string()))
}
