//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Resolve a URL string against a base URL string.
pub fn resolve(base_url: &str, href: &str) -> Option<String> {
    Url::parse(base_url)
        .ok()
        .map(|base| resolve_url(&base, href))
}

/// Extract the product identifier from a detail-page URL.
///
/// The identifier is always the last path segment, query and fragment
/// excluded.
pub fn product_id(url: &str) -> String {
    let trimmed = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url)
        .trim_end_matches('/');
    trimmed
        .rsplit('/')
        .next()
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://example.com/path/").unwrap();
        assert_eq!(
            resolve_url(&base, "page.html"),
            "https://example.com/path/page.html"
        );
        assert_eq!(
            resolve_url(&base, "/root.html"),
            "https://example.com/root.html"
        );
        assert_eq!(
            resolve_url(&base, "https://other.com/x"),
            "https://other.com/x"
        );
    }

    #[test]
    fn test_resolve_joins_site_origin() {
        assert_eq!(
            resolve(
                "https://webscraper.io",
                "/test-sites/e-commerce/static/product/545"
            ),
            Some("https://webscraper.io/test-sites/e-commerce/static/product/545".to_string())
        );
    }

    #[test]
    fn test_product_id_last_segment() {
        assert_eq!(
            product_id("https://webscraper.io/test-sites/e-commerce/static/product/545"),
            "545"
        );
        assert_eq!(product_id("https://example.com/product/42?ref=1"), "42");
        assert_eq!(product_id("https://example.com/product/42/"), "42");
    }
}
