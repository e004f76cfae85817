use crate::utils::error::{RelayError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub const DEFAULT_EXPORT_BASE: &str = "https://docs.google.com";

static DOC_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"docs\.google\.com/document/d/([a-zA-Z0-9_-]+)").expect("doc id regex")
});

/// Document identifier embedded in a Google Docs address, if any.
pub fn google_doc_id(url: &str) -> Option<String> {
    DOC_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// `<base>/document/d/<doc_id>/export?format=txt`
pub fn export_url(base: &str, doc_id: &str) -> Result<Url> {
    let raw = format!(
        "{}/document/d/{}/export?format=txt",
        base.trim_end_matches('/'),
        doc_id
    );
    Url::parse(&raw).map_err(|e| RelayError::InvalidConfigValue {
        field: "docs_export_base".to_string(),
        value: base.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })
}
