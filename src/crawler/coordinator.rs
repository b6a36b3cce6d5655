//! Site crawl coordination
//!
//! Runs the discovery strategies in order, then deduplicates, filters and
//! truncates what the first productive strategy found.

use crate::config::HttpConfig;
use crate::crawler::fetcher::HttpFetcher;
use crate::crawler::navigation::fetch_navigation_urls;
use crate::crawler::sitemap::fetch_sitemap_urls;
use crate::robots::fetch_robots;
use crate::url::{is_denylisted, site_file_url};
use std::collections::HashSet;
use std::fmt;

/// Number of URLs returned when the caller doesn't say
pub const DEFAULT_CRAWL_LIMIT: usize = 20;

/// Where a crawl's URLs came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryStrategy {
    /// `<homepage>/sitemap.xml`
    Sitemap,
    /// Sitemaps declared in `<homepage>/robots.txt`
    RobotsSitemaps,
    /// Links inside the homepage's `<nav>` elements
    Navigation,
}

impl fmt::Display for DiscoveryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiscoveryStrategy::Sitemap => "sitemap.xml",
            DiscoveryStrategy::RobotsSitemaps => "robots.txt sitemaps",
            DiscoveryStrategy::Navigation => "navigation links",
        };
        f.write_str(name)
    }
}

/// Raw output of the discovery chain, before filtering and truncation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// The strategy that produced the URLs; None if every strategy came up empty
    pub strategy: Option<DiscoveryStrategy>,
    /// Deduplicated URLs in discovery order
    pub urls: Vec<String>,
}

/// Discovers a site's URLs through an ordered fallback chain
pub struct Coordinator<'a> {
    fetcher: &'a dyn HttpFetcher,
    http: &'a HttpConfig,
}

impl<'a> Coordinator<'a> {
    /// Creates a coordinator using `fetcher` for every request
    pub fn new(fetcher: &'a dyn HttpFetcher, http: &'a HttpConfig) -> Self {
        Self { fetcher, http }
    }

    /// Runs the strategies in order, stopping at the first that finds anything
    ///
    /// # Strategy Order
    ///
    /// 1. `<homepage>/sitemap.xml`
    /// 2. every `Sitemap:` declared in `<homepage>/robots.txt`, fetched as-is
    ///    and accumulated
    /// 3. `<nav>` links on the homepage
    ///
    /// Later strategies are never attempted (nor their URLs fetched) once an
    /// earlier one produced a URL.
    pub async fn discover(&self, homepage: &str) -> Discovery {
        let mut seen = UrlSet::default();

        let sitemap_url = site_file_url(homepage, "sitemap.xml");
        seen.extend(
            fetch_sitemap_urls(self.fetcher, &sitemap_url, self.http.sitemap_timeout()).await,
        );
        if !seen.is_empty() {
            return seen.into_discovery(DiscoveryStrategy::Sitemap);
        }

        let robots = fetch_robots(self.fetcher, homepage, self.http.robots_timeout()).await;
        if let Some(robots) = robots {
            for declared in robots.sitemaps() {
                tracing::debug!("robots.txt declares sitemap {}", declared);
                seen.extend(
                    fetch_sitemap_urls(self.fetcher, &declared, self.http.sitemap_timeout()).await,
                );
            }
        }
        if !seen.is_empty() {
            return seen.into_discovery(DiscoveryStrategy::RobotsSitemaps);
        }

        seen.extend(
            fetch_navigation_urls(self.fetcher, homepage, self.http.navigation_timeout()).await,
        );
        if !seen.is_empty() {
            return seen.into_discovery(DiscoveryStrategy::Navigation);
        }

        Discovery {
            strategy: None,
            urls: Vec::new(),
        }
    }

    /// Discovers, filters and truncates a site's URLs
    ///
    /// # Arguments
    ///
    /// * `homepage` - The site homepage
    /// * `limit` - Maximum number of URLs to return
    ///
    /// # Returns
    ///
    /// At most `limit` URLs, in discovery order, with no duplicates and no
    /// URL containing `/blog`, `/resources` or `/news`. Never fails: an
    /// empty vector is the only failure signal.
    pub async fn crawl(&self, homepage: &str, limit: usize) -> Vec<String> {
        let discovery = self.discover(homepage).await;

        let urls: Vec<String> = discovery
            .urls
            .into_iter()
            .filter(|url| !is_denylisted(url))
            .take(limit)
            .collect();

        match discovery.strategy {
            Some(strategy) => tracing::info!(
                "Discovered {} URLs for {} via {}",
                urls.len(),
                homepage,
                strategy
            ),
            None => tracing::warn!("No URLs discovered for {}", homepage),
        }

        urls
    }
}

/// Insertion-ordered set keyed by exact URL string
#[derive(Default)]
struct UrlSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl UrlSet {
    fn extend(&mut self, urls: Vec<String>) {
        for url in urls {
            if self.seen.insert(url.clone()) {
                self.ordered.push(url);
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    fn into_discovery(self, strategy: DiscoveryStrategy) -> Discovery {
        Discovery {
            strategy: Some(strategy),
            urls: self.ordered,
        }
    }
}

/// Crawls a site for candidate URLs to audit
///
/// Convenience wrapper around [`Coordinator::crawl`].
pub async fn crawl_site(
    fetcher: &dyn HttpFetcher,
    http: &HttpConfig,
    homepage: &str,
    limit: usize,
) -> Vec<String> {
    Coordinator::new(fetcher, http).crawl(homepage, limit).await
}
