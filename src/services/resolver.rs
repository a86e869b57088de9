//! Catalog resolution
//!
//! Turns catalogs into channels: fetch the catalog's items, drop the ones the
//! quality filter rejects, then resolve each remaining item's stream with at
//! most `max_concurrent` requests in flight. Catalogs are processed one after
//! another in manifest order.
//!
//! Streams complete in whatever order the network allows. Resolved channels
//! are sorted by name (ties by position in the catalog) before being returned,
//! so the output never depends on request timing.

use futures::{future, stream, StreamExt};
use tracing::{debug, info};

use super::addon::{extract_stream_info, AddonClient};
use super::quality_filter::QualityFilter;
use crate::models::{CatalogRef, Channel, MetaItem};

/// Channels resolved from one catalog, sorted by name
#[derive(Debug, Clone)]
pub struct CatalogChannels {
    pub catalog: CatalogRef,
    pub channels: Vec<Channel>,
}

pub struct Resolver<'a> {
    client: &'a AddonClient,
    filter: QualityFilter,
    max_concurrent: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(client: &'a AddonClient, filter: QualityFilter, max_concurrent: usize) -> Self {
        Self {
            client,
            filter,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Resolve every catalog in order
    pub async fn resolve_all(&self, catalogs: &[CatalogRef]) -> Vec<CatalogChannels> {
        let mut resolved = Vec::with_capacity(catalogs.len());
        for catalog in catalogs {
            let channels = self.resolve_catalog(catalog).await;
            resolved.push(CatalogChannels {
                catalog: catalog.clone(),
                channels,
            });
        }
        resolved
    }

    /// Resolve one catalog's items into channels
    ///
    /// A catalog that cannot be fetched yields no channels.
    pub async fn resolve_catalog(&self, catalog: &CatalogRef) -> Vec<Channel> {
        let Some(items) = self.client.fetch_catalog_items(catalog).await else {
            return Vec::new();
        };
        info!("Found {} items in '{}'", items.len(), catalog.name);

        let items = self.filter.apply(items);
        if !self.filter.is_empty() {
            info!(
                "{} items in '{}' match quality filter {:?}",
                items.len(),
                catalog.name,
                self.filter.keywords()
            );
        }

        let mut resolved: Vec<(usize, Channel)> = stream::iter(items.into_iter().enumerate())
            .map(|(index, item)| async move {
                self.resolve_item(catalog, &item)
                    .await
                    .map(|channel| (index, channel))
            })
            .buffer_unordered(self.max_concurrent)
            .filter_map(future::ready)
            .collect()
            .await;

        resolved.sort_by(|(ia, a), (ib, b)| a.name().cmp(b.name()).then(ia.cmp(ib)));
        resolved.into_iter().map(|(_, channel)| channel).collect()
    }

    async fn resolve_item(&self, catalog: &CatalogRef, item: &MetaItem) -> Option<Channel> {
        let Some(id) = item.id.as_deref() else {
            debug!("Skipping '{}': no id", item.name);
            return None;
        };

        let info = self
            .client
            .fetch_stream(&catalog.kind, id)
            .await
            .as_ref()
            .and_then(extract_stream_info);

        if let Some(info) = &info {
            debug!(name = ?info.name, title = ?info.title, "Stream for '{}': {}", item.name, info.url);
        }

        match info.and_then(|info| Channel::from_item(item, info, &catalog.name)) {
            Some(channel) => {
                info!("  ✓ {}", item.name);
                Some(channel)
            }
            None => {
                info!("  ✗ {}", item.name);
                None
            }
        }
    }
}
