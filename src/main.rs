mod config;
mod converter;
mod error;
mod models;
mod services;

#[cfg(test)]
mod test_support;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stremio_m3u=info".into()),
        )
        .with(config.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.log_json).then(|| tracing_subscriber::fmt::layer().with_target(false)))
        .init();

    tracing::info!("Stremio Addon to M3U Converter v{}", env!("CARGO_PKG_VERSION"));

    let summary = converter::run(&config).await?;

    for (catalog, count) in &summary.catalogs {
        tracing::info!("  {}: {} channels", catalog, count);
    }
    tracing::info!(
        "Done: {} channels from {} v{} written to {}",
        summary.total_channels,
        summary.addon_name,
        summary.addon_version,
        summary.output_file.display()
    );

    Ok(())
}
