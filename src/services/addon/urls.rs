//! Endpoint URL construction
//!
//! Every URL is built from the addon base with exactly one slash between the
//! base and the endpoint path, whether or not the base ends with `/`.

/// Base address with a single trailing slash
fn normalize_base(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}

/// `{base}/manifest.json`
pub fn manifest_url(base: &str) -> String {
    format!("{}manifest.json", normalize_base(base))
}

/// `{base}/catalog/{type}/{id}.json`
pub fn catalog_url(base: &str, kind: &str, id: &str) -> String {
    format!("{}catalog/{}/{}.json", normalize_base(base), kind, id)
}

/// `{base}/stream/{type}/{id}.json` with `id` encoded as a single path segment
pub fn stream_url(base: &str, kind: &str, id: &str) -> String {
    format!(
        "{}stream/{}/{}.json",
        normalize_base(base),
        kind,
        urlencoding::encode(id)
    )
}
