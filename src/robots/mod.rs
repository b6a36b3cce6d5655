//! Robots.txt handling module
//!
//! This module fetches robots.txt and reads the sitemap locations it declares.

mod parser;

pub use parser::ParsedRobots;

use crate::crawler::{FetchOptions, HttpFetcher};
use crate::url::site_file_url;
use std::time::Duration;

/// Fetches `<homepage>/robots.txt`
///
/// # Arguments
///
/// * `fetcher` - The HTTP fetcher to use
/// * `homepage` - Site homepage; a single trailing slash is absorbed
/// * `timeout` - Request timeout
///
/// # Returns
///
/// * `Some(ParsedRobots)` - robots.txt was served with a 2xx status
/// * `None` - Fetch failed or returned a non-2xx status
pub async fn fetch_robots(
    fetcher: &dyn HttpFetcher,
    homepage: &str,
    timeout: Duration,
) -> Option<ParsedRobots> {
    let robots_url = site_file_url(homepage, "robots.txt");

    match fetcher.fetch(&robots_url, &FetchOptions::new(timeout)).await {
        Ok(response) if response.is_success() => Some(ParsedRobots::from_content(&response.body)),
        Ok(response) => {
            tracing::debug!("No robots.txt at {} (status {})", robots_url, response.status);
            None
        }
        Err(e) => {
            tracing::debug!("Failed to fetch {}: {}", robots_url, e);
            None
        }
    }
}
