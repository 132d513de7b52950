//! URL handling module for sitesage
//!
//! Provides base+relative resolution, crawl-eligibility checks, collection
//! naming, and stable document identifiers.

mod eligibility;
mod resolve;

pub use eligibility::{is_eligible, ExtensionPolicy};
pub use resolve::resolve;

use crate::UrlError;
use sha2::{Digest, Sha256};
use url::Url;

/// Extracts the lowercase host from a URL string
pub fn extract_host(url_str: &str) -> Result<String, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;
    url.host_str()
        .map(|h| h.to_lowercase())
        .ok_or_else(|| UrlError::MissingHost(url_str.to_string()))
}

/// Derives the index collection name for a URL.
///
/// The collection is a deterministic pure function of the URL's host: dots
/// are replaced with underscores to satisfy storage naming constraints, so
/// `https://docs.example.com/guide` maps to `docs_example_com`.
pub fn collection_name(url_str: &str) -> Result<String, UrlError> {
    let host = extract_host(url_str)?;
    Ok(host.replace('.', "_"))
}

/// Derives a stable document identifier for a URL.
///
/// SHA-256 of the URL string, hex-encoded. Identical across processes and
/// runs, so re-crawling a URL overwrites its record instead of duplicating it.
pub fn document_id(url_str: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url_str.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_host_lowercases() {
        assert_eq!(
            extract_host("https://EXAMPLE.COM/path").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_extract_host_missing() {
        let result = extract_host("data:text/plain,hello");
        assert!(matches!(result, Err(UrlError::MissingHost(_))));
    }

    #[test]
    fn test_extract_host_unparsable() {
        assert!(matches!(
            extract_host("not a url"),
            Err(UrlError::Parse(_))
        ));
    }

    #[test]
    fn test_collection_name_replaces_dots() {
        assert_eq!(
            collection_name("https://docs.example.com/guide").unwrap(),
            "docs_example_com"
        );
    }

    #[test]
    fn test_collection_name_is_deterministic() {
        let a = collection_name("https://example.com/a").unwrap();
        let b = collection_name("https://example.com/b?q=1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_collection_name_ip_host() {
        assert_eq!(
            collection_name("http://127.0.0.1:8080/").unwrap(),
            "127_0_0_1"
        );
    }

    #[test]
    fn test_document_id_is_stable() {
        // Pinned value: SHA-256 must not drift between runs or platforms.
        assert_eq!(
            document_id("https://example.com/"),
            "0f115db062b7c0dd030b16878c99dea5c354b49dc37b38eb8846179c7783e9d7"
        );
    }

    #[test]
    fn test_document_id_distinguishes_urls() {
        assert_ne!(
            document_id("https://example.com/a"),
            document_id("https://example.com/b")
        );
    }
}
