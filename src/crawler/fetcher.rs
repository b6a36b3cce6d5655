//! HTTP fetcher implementation
//!
//! This module handles all outbound HTTP requests, including:
//! - Building HTTP clients with a default user agent
//! - GET requests with per-request headers and timeouts
//! - Optionally disabling redirect following so callers can record each hop
//! - Error classification
//!
//! Non-2xx responses are returned as ordinary [`FetchResponse`]s; only
//! transport failures are errors.

use crate::FetchError;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::collections::HashMap;
use std::time::Duration;

/// Redirect hops reqwest follows on its own when following is enabled
const AUTO_REDIRECT_LIMIT: usize = 10;

/// Options for a single GET request
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Extra request headers, sent in order
    pub headers: Vec<(String, String)>,
    /// Total time allowed for the request, body included
    pub timeout: Duration,
    /// Whether 3xx responses are followed automatically
    pub follow_redirects: bool,
}

impl FetchOptions {
    /// Options with the given timeout, no extra headers, redirects followed
    pub fn new(timeout: Duration) -> Self {
        Self {
            headers: Vec::new(),
            timeout,
            follow_redirects: true,
        }
    }

    /// Adds a request header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Disables automatic redirect following
    pub fn without_redirects(mut self) -> Self {
        self.follow_redirects = false;
        self
    }
}

/// A completed HTTP response, whatever its status
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// URL of the response (after redirects, if they were followed)
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Response headers, keyed by lowercase name
    pub headers: HashMap<String, String>,
    /// Response body decoded as text
    pub body: String,
}

impl FetchResponse {
    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True for 3xx statuses
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }

    /// Looks up a header by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }
}

/// Performs GET requests
///
/// Implementations must not fail on non-2xx statuses; redirect-chain
/// inspection depends on seeing 3xx responses as data.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// GETs `url`; any completed response, 4xx and 5xx included, is `Ok`
    async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<FetchResponse, FetchError>;
}

/// [`HttpFetcher`] backed by reqwest
///
/// Idle connections are never kept, so every request opens its own
/// connection and nothing is shared between requests.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    following: Client,
    manual: Client,
}

impl ReqwestFetcher {
    /// Builds a fetcher whose requests carry `user_agent` unless overridden
    ///
    /// # Arguments
    ///
    /// * `user_agent` - Default User-Agent header value
    ///
    /// # Returns
    ///
    /// * `Ok(ReqwestFetcher)` - Ready to fetch
    /// * `Err(FetchError)` - The underlying HTTP client could not be built
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let following = build_http_client(user_agent, true)
            .map_err(|e| FetchError::Client(e.to_string()))?;
        let manual = build_http_client(user_agent, false)
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { following, manual })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str, options: &FetchOptions) -> Result<FetchResponse, FetchError> {
        let client = if options.follow_redirects {
            &self.following
        } else {
            &self.manual
        };

        let mut request = client.get(url).timeout(options.timeout);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        tracing::trace!("GET {} (timeout {:?})", url, options.timeout);

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_lowercase(), v.to_string()))
            })
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        Ok(FetchResponse {
            url: final_url,
            status,
            headers,
            body,
        })
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The default User-Agent header
/// * `follow_redirects` - Whether reqwest follows 3xx responses itself
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str, follow_redirects: bool) -> Result<Client, reqwest::Error> {
    let policy = if follow_redirects {
        Policy::limited(AUTO_REDIRECT_LIMIT)
    } else {
        Policy::none()
    };

    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(Duration::from_secs(10))
        .redirect(policy)
        .pool_max_idle_per_host(0)
        .gzip(true)
        .brotli(true)
        .build()
}
