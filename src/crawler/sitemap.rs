//! Sitemap fetching and `<loc>` extraction

use crate::crawler::fetcher::{FetchOptions, HttpFetcher};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::time::Duration;

/// Extracts the text of every `<loc>` element, in document order
///
/// Both `<urlset>` and `<sitemapindex>` documents are read the same way;
/// child sitemaps listed by an index are returned as plain URLs, not
/// expanded. Entries are trimmed and empty ones dropped.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The `<loc>` values
/// * `Err(quick_xml::Error)` - The document is not well-formed XML
pub fn parse_sitemap_locs(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut locs = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"loc" => {
                current = Some(String::new());
            }
            Event::Text(e) => {
                if let Some(loc) = current.as_mut() {
                    loc.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(loc) = current.as_mut() {
                    loc.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"loc" => {
                if let Some(loc) = current.take() {
                    let loc = loc.trim();
                    if !loc.is_empty() {
                        locs.push(loc.to_string());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(locs)
}

/// Fetches one sitemap and returns its `<loc>` entries
///
/// Any failure (transport error, non-2xx status, malformed XML) is logged
/// and treated as an empty sitemap.
///
/// # Arguments
///
/// * `fetcher` - The HTTP fetcher to use
/// * `sitemap_url` - Absolute URL of the sitemap document
/// * `timeout` - Request timeout
pub async fn fetch_sitemap_urls(
    fetcher: &dyn HttpFetcher,
    sitemap_url: &str,
    timeout: Duration,
) -> Vec<String> {
    let response = match fetcher.fetch(sitemap_url, &FetchOptions::new(timeout)).await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Failed to fetch sitemap {}: {}", sitemap_url, e);
            return Vec::new();
        }
    };

    if !response.is_success() {
        tracing::debug!(
            "No sitemap at {} (status {})",
            sitemap_url,
            response.status
        );
        return Vec::new();
    }

    match parse_sitemap_locs(&response.body) {
        Ok(urls) => {
            tracing::debug!("Sitemap {} listed {} URLs", sitemap_url, urls.len());
            urls
        }
        Err(e) => {
            tracing::warn!("Failed to parse sitemap {}: {}", sitemap_url, e);
            Vec::new()
        }
    }
}
