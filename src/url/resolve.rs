use url::Url;

/// Resolves a link href against its base URL.
///
/// Standard base+relative resolution only; no normalization beyond what the
/// `url` crate applies. Returns None for hrefs that cannot be resolved and
/// for obviously non-navigable schemes.
pub fn resolve(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    // Non-navigable link schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    base.join(href).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/docs/page").unwrap()
    }

    #[test]
    fn test_resolve_absolute() {
        let resolved = resolve(&base(), "https://other.com/x").unwrap();
        assert_eq!(resolved.as_str(), "https://other.com/x");
    }

    #[test]
    fn test_resolve_root_relative() {
        let resolved = resolve(&base(), "/about").unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/about");
    }

    #[test]
    fn test_resolve_path_relative() {
        let resolved = resolve(&base(), "intro").unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/docs/intro");
    }

    #[test]
    fn test_resolve_parent_relative() {
        let resolved = resolve(&base(), "../top").unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/top");
    }

    #[test]
    fn test_resolve_fragment_joins_to_base() {
        // `#x` resolves to the base page itself; eligibility and the visited
        // set decide whether it gets crawled again.
        let resolved = resolve(&base(), "#section").unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/docs/page#section");
    }

    #[test]
    fn test_resolve_skips_javascript() {
        assert!(resolve(&base(), "javascript:void(0)").is_none());
    }

    #[test]
    fn test_resolve_skips_mailto() {
        assert!(resolve(&base(), "mailto:a@b.com").is_none());
    }

    #[test]
    fn test_resolve_skips_tel() {
        assert!(resolve(&base(), "tel:+1234").is_none());
    }

    #[test]
    fn test_resolve_skips_data_uri() {
        assert!(resolve(&base(), "data:text/plain,x").is_none());
    }

    #[test]
    fn test_resolve_skips_empty() {
        assert!(resolve(&base(), "   ").is_none());
    }
}
