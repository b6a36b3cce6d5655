//! Navigation-menu link extraction
//!
//! The last discovery fallback: read the homepage and keep the links in its
//! `<nav>` menus.

use crate::crawler::fetcher::{FetchOptions, HttpFetcher};
use crate::document::{HtmlDocument, ScraperDocument};
use crate::url::{origin_of, resolve_navigation_href};
use std::time::Duration;

/// Extracts links from `<nav>` elements of a page
///
/// # Link Rules
///
/// **Kept:**
/// - absolute `http(s)` hrefs, verbatim
/// - root-relative hrefs (`/path`), prefixed with the homepage origin
///
/// **Dropped:**
/// - relative paths, fragments, `mailto:`/`tel:`/`javascript:` links
/// - anchors without an `href`
/// - anchors outside `<nav>`
///
/// # Arguments
///
/// * `html` - The homepage HTML
/// * `homepage` - The homepage URL, used for its origin
///
/// # Example
///
/// ```
/// use seo_auditor::crawler::extract_navigation_links;
///
/// let html = r#"<nav><a href="/about">About</a></nav><a href="/footer">Footer</a>"#;
/// let links = extract_navigation_links(html, "https://example.com/");
/// assert_eq!(links, vec!["https://example.com/about"]);
/// ```
pub fn extract_navigation_links(html: &str, homepage: &str) -> Vec<String> {
    let origin = match origin_of(homepage) {
        Some(origin) => origin,
        None => {
            tracing::debug!("Homepage {} has no origin, skipping nav links", homepage);
            return Vec::new();
        }
    };

    let doc = ScraperDocument::parse(html);

    doc.select("nav a")
        .iter()
        .filter_map(|anchor| anchor.attr("href"))
        .filter_map(|href| resolve_navigation_href(href, &origin))
        .collect()
}

/// Fetches the homepage and returns its navigation links
///
/// Failures are logged and yield no links.
pub async fn fetch_navigation_urls(
    fetcher: &dyn HttpFetcher,
    homepage: &str,
    timeout: Duration,
) -> Vec<String> {
    match fetcher.fetch(homepage, &FetchOptions::new(timeout)).await {
        Ok(response) if response.is_success() => {
            extract_navigation_links(&response.body, homepage)
        }
        Ok(response) => {
            tracing::debug!(
                "Homepage {} returned status {}, no nav links",
                homepage,
                response.status
            );
            Vec::new()
        }
        Err(e) => {
            tracing::debug!("Failed to fetch homepage {}: {}", homepage, e);
            Vec::new()
        }
    }
}
