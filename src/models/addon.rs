/// Addon metadata and its catalogs, in the order the addon lists them
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub catalogs: Vec<CatalogRef>,
}

/// Reference to one `catalog/{type}/{id}.json` endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRef {
    /// Content type, e.g. `tv` or `movie`
    pub kind: String,
    pub id: String,
    /// Display name, used as the playlist group
    pub name: String,
}

/// One entry of a catalog's `metas` array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaItem {
    pub id: Option<String>,
    pub name: String,
    pub poster: Option<String>,
    pub logo: Option<String>,
}

impl MetaItem {
    /// Poster, falling back to logo when the poster is missing or empty
    pub fn artwork(&self) -> &str {
        self.poster
            .as_deref()
            .filter(|p| !p.is_empty())
            .or(self.logo.as_deref())
            .unwrap_or("")
    }
}

/// Playable stream picked from a stream-list response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamInfo {
    pub url: String,
    pub name: Option<String>,
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(poster: Option<&str>, logo: Option<&str>) -> MetaItem {
        MetaItem {
            id: Some("x".to_string()),
            name: "X".to_string(),
            poster: poster.map(String::from),
            logo: logo.map(String::from),
        }
    }

    #[test]
    fn test_artwork_prefers_poster() {
        assert_eq!(item(Some("p.png"), Some("l.png")).artwork(), "p.png");
        assert_eq!(item(None, Some("l.png")).artwork(), "l.png");
        assert_eq!(item(Some(""), Some("l.png")).artwork(), "l.png");
        assert_eq!(item(None, None).artwork(), "");
    }
}
