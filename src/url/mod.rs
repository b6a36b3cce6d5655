//! URL handling module for SEO Auditor
//!
//! This module provides host and origin extraction, well-known file URL
//! construction, link classification and the crawl denylist.

mod classify;
mod domain;

// Re-export main functions
pub use classify::{is_denylisted, is_internal_link, CRAWL_DENYLIST};
pub use domain::{extract_host, origin_of, site_file_url};

/// Resolves a navigation `href` found on `homepage` to an absolute URL
///
/// Absolute `http(s)` URLs are kept as-is. Root-relative hrefs are prefixed
/// with the homepage origin by plain concatenation. Everything else
/// (relative paths, fragments, `mailto:` and friends) is dropped.
///
/// # Arguments
///
/// * `href` - The raw `href` attribute value
/// * `origin` - Origin of the homepage, e.g. `https://example.com`
///
/// # Returns
///
/// * `Some(String)` - The absolute URL to keep
/// * `None` - The href should be discarded
///
/// # Examples
///
/// ```
/// use seo_auditor::url::resolve_navigation_href;
///
/// let origin = "https://example.com";
/// assert_eq!(
///     resolve_navigation_href("/pricing", origin),
///     Some("https://example.com/pricing".to_string())
/// );
/// assert_eq!(resolve_navigation_href("pricing", origin), None);
/// ```
pub fn resolve_navigation_href(href: &str, origin: &str) -> Option<String> {
    if is_absolute_http(href) {
        Some(href.to_string())
    } else if href.starts_with('/') {
        Some(format!("{}{}", origin, href))
    } else {
        None
    }
}

/// Returns true if `href` parses as an absolute `http` or `https` URL
fn is_absolute_http(href: &str) -> bool {
    match ::url::Url::parse(href) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}
