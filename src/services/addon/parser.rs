//! Addon payload parsing
//!
//! Payloads are deserialized into private wire types whose fields all carry
//! defaults. Missing or mistyped fields degrade to those defaults instead of
//! failing the whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{CatalogRef, Manifest, MetaItem, StreamInfo};

/// Name given to catalog items that do not carry one
pub const UNNAMED_ITEM: &str = "Unnamed";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ManifestResponse {
    #[serde(deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    version: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    catalogs: Vec<CatalogEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogEntry {
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    kind: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogResponse {
    #[serde(deserialize_with = "lenient_list")]
    metas: Vec<MetaEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MetaEntry {
    #[serde(deserialize_with = "string_or_number")]
    id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    poster: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    logo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StreamResponse {
    #[serde(deserialize_with = "lenient_list")]
    streams: Vec<StreamEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StreamEntry {
    #[serde(deserialize_with = "lenient_string")]
    url: Option<String>,
    #[serde(rename = "externalUrl", deserialize_with = "lenient_string")]
    external_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    title: Option<String>,
}

/// String value, anything else (null, number, object) becomes `None`
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Ids come as strings or numbers depending on the addon
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

/// Array of entries; a non-array is empty, a malformed entry is defaulted
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Deserialize a payload, defaulting when it is not an object
fn decode<'a, T>(json: &'a Value) -> T
where
    T: Deserialize<'a> + Default,
{
    T::deserialize(json).unwrap_or_default()
}

// ============================================================================
// Domain mapping
// ============================================================================

/// Parse a manifest payload. Never fails.
pub fn parse_manifest(json: &Value) -> Manifest {
    let response: ManifestResponse = decode(json);

    let catalogs = response
        .catalogs
        .into_iter()
        .map(|catalog| {
            let id = catalog.id.unwrap_or_default();
            CatalogRef {
                kind: catalog.kind.unwrap_or_default(),
                name: catalog.name.unwrap_or_else(|| id.clone()),
                id,
            }
        })
        .collect();

    Manifest {
        name: response.name.unwrap_or_else(|| "Unknown".to_string()),
        version: response.version.unwrap_or_else(|| "?".to_string()),
        catalogs,
    }
}

/// Parse the `metas` array of a catalog payload (empty when absent)
pub fn parse_metas(json: &Value) -> Vec<MetaItem> {
    let response: CatalogResponse = decode(json);

    response
        .metas
        .into_iter()
        .map(|meta| MetaItem {
            id: meta.id,
            name: meta.name.unwrap_or_else(|| UNNAMED_ITEM.to_string()),
            poster: meta.poster,
            logo: meta.logo,
        })
        .collect()
}

/// First stream entry carrying `url`, or failing that `externalUrl`
///
/// Entries are scanned in order; the first one with either field wins. Empty
/// strings do not count.
pub fn extract_stream_info(json: &Value) -> Option<StreamInfo> {
    let response: StreamResponse = decode(json);

    response.streams.into_iter().find_map(|stream| {
        let url = stream
            .url
            .filter(|u| !u.is_empty())
            .or(stream.external_url.filter(|u| !u.is_empty()))?;

        Some(StreamInfo {
            url,
            name: stream.name,
            title: stream.title,
        })
    })
}
