use super::{MetaItem, StreamInfo};

/// Resolved, playlist-ready entry
///
/// Only constructible with a non-empty URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    name: String,
    url: String,
    logo: String,
    group: String,
}

impl Channel {
    /// Returns `None` when `url` is empty
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        logo: impl Into<String>,
        group: impl Into<String>,
    ) -> Option<Self> {
        let url = url.into();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            url,
            logo: logo.into(),
            group: group.into(),
        })
    }

    /// Combine a catalog item with its resolved stream
    pub fn from_item(item: &MetaItem, stream: StreamInfo, group: &str) -> Option<Self> {
        Self::new(item.name.clone(), stream.url, item.artwork(), group)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn logo(&self) -> &str {
        &self.logo
    }

    pub fn group(&self) -> &str {
        &self.group
    }
}
