use crate::models::MetaItem;

/// Keyword filter over item names
///
/// Built from a comma-separated list such as `"1080p, 4K"`. An item passes
/// when its name contains any keyword, ignoring case. With no keywords every
/// item passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualityFilter {
    keywords: Vec<String>,
}

impl QualityFilter {
    pub fn parse(filter: &str) -> Self {
        let keywords = filter
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { keywords }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, name: &str) -> bool {
        if self.keywords.is_empty() {
            return true;
        }
        let name = name.to_lowercase();
        self.keywords.iter().any(|k| name.contains(k.as_str()))
    }

    /// Keep the items whose name matches; pass-through when empty
    pub fn apply(&self, items: Vec<MetaItem>) -> Vec<MetaItem> {
        if self.keywords.is_empty() {
            return items;
        }
        items.into_iter().filter(|item| self.matches(&item.name)).collect()
    }
}
