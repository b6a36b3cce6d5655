//! Crawler module for site URL discovery and page fetching
//!
//! This module contains the discovery logic, including:
//! - HTTP fetching behind the [`HttpFetcher`] trait
//! - Sitemap parsing
//! - Navigation-menu link extraction
//! - The ordered fallback chain that ties them together

mod coordinator;
mod fetcher;
mod navigation;
mod sitemap;

pub use coordinator::{crawl_site, Coordinator, Discovery, DiscoveryStrategy, DEFAULT_CRAWL_LIMIT};
pub use fetcher::{build_http_client, FetchOptions, FetchResponse, HttpFetcher, ReqwestFetcher};
pub use navigation::{extract_navigation_links, fetch_navigation_urls};
pub use sitemap::{fetch_sitemap_urls, parse_sitemap_locs};
