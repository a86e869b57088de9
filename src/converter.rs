//! Addon to playlist conversion
//!
//! config -> manifest -> per-catalog resolution -> M3U text -> output file

use chrono::Utc;
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::Config;
use crate::error::ConvertError;
use crate::models::Channel;
use crate::services::{
    addon::AddonClient,
    m3u_writer::format_playlist,
    quality_filter::QualityFilter,
    resolver::Resolver,
};

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub addon_name: String,
    pub addon_version: String,
    /// Channel count per catalog, in manifest order
    pub catalogs: Vec<(String, usize)>,
    pub total_channels: usize,
    pub output_file: PathBuf,
}

/// Run one conversion
///
/// Fails when the manifest cannot be fetched or no channel resolves; in both
/// cases nothing is written.
pub async fn run(config: &Config) -> Result<RunSummary, ConvertError> {
    config.validate()?;

    info!("Addon: {}", config.addon_url);
    info!("Output: {}", config.output_file);

    let client = AddonClient::from_config(config).map_err(ConvertError::Client)?;

    let manifest = client.fetch_manifest().await.map_err(|e| {
        error!("Failed to fetch manifest: {}", e);
        ConvertError::Manifest(e)
    })?;
    info!("Addon: {} (version {})", manifest.name, manifest.version);
    info!("Catalogs found: {}", manifest.catalogs.len());

    let resolver = Resolver::new(
        &client,
        QualityFilter::parse(&config.quality_filter),
        config.max_concurrent_streams,
    );
    let resolved = resolver.resolve_all(&manifest.catalogs).await;

    let catalogs: Vec<(String, usize)> = resolved
        .iter()
        .map(|c| (c.catalog.name.clone(), c.channels.len()))
        .collect();
    let channels: Vec<Channel> = resolved.into_iter().flat_map(|c| c.channels).collect();

    if channels.is_empty() {
        error!("No channels found");
        return Err(ConvertError::NoChannels);
    }

    let output_file = PathBuf::from(&config.output_file);
    let playlist = format_playlist(&channels, Utc::now());
    tokio::fs::write(&output_file, playlist)
        .await
        .map_err(|source| ConvertError::Write {
            path: output_file.clone(),
            source,
        })?;

    info!("M3U file saved: {}", output_file.display());
    info!("Total channels: {}", channels.len());

    Ok(RunSummary {
        addon_name: manifest.name,
        addon_version: manifest.version,
        catalogs,
        total_channels: channels.len(),
        output_file,
    })
}
