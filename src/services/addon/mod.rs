//! Stremio Addon Integration
//!
//! A Stremio addon exposes its content library over three JSON endpoints,
//! all relative to the addon base address:
//!
//! ```text
//! GET manifest.json                   -> {name, version, catalogs: [{type, id, name}]}
//! GET catalog/{type}/{id}.json        -> {metas: [{id, name, poster | logo}]}
//! GET stream/{type}/{encodedId}.json  -> {streams: [{url | externalUrl, name, title}]}
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::services::addon::AddonClient;
//!
//! let client = AddonClient::from_config(&config)?;
//! let manifest = client.fetch_manifest().await?;
//! for catalog in &manifest.catalogs {
//!     if let Some(items) = client.fetch_catalog_items(catalog).await {
//!         // resolve each item's stream
//!     }
//! }
//! ```

pub mod client;
pub mod parser;
pub mod urls;

pub use client::AddonClient;
pub use parser::extract_stream_info;
