//! SEO Auditor: site discovery and on-page SEO signal extraction
//!
//! This crate discovers a site's pages (sitemap, robots.txt-declared sitemaps,
//! or navigation links), fetches them, extracts SEO-relevant signals from the
//! HTML and turns them into actionable suggestions. Audit results can be
//! forwarded to a generative-language model for natural-language advice.

pub mod audit;
pub mod config;
pub mod crawler;
pub mod document;
pub mod output;
pub mod recommend;
pub mod robots;
pub mod seo;
pub mod server;
pub mod url;

use thiserror::Error;

/// Main error type for SEO Auditor operations
#[derive(Debug, Error)]
pub enum SeoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Recommendation error: {0}")]
    Recommend(#[from] RecommendError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while fetching a URL
///
/// Non-2xx responses are only an error where the caller asks for a page to
/// audit; the fetcher itself reports them as ordinary responses.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Request failed for {url}: {message}")]
    Request { url: String, message: String },

    #[error("Request failed with status: {status}")]
    Status { url: String, status: u16 },

    #[error("Too many redirects from {url}")]
    RedirectLimit { url: String },

    #[error("Redirect loop detected at {url}")]
    RedirectLoop { url: String },

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl FetchError {
    /// Classifies a transport-level reqwest error for the given URL
    pub fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else if error.is_connect() {
            FetchError::Connect {
                url: url.to_string(),
                message: error.to_string(),
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                message: error.to_string(),
            }
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors from the language-model recommendation step
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("No Gemini API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("Request to language model failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Language model returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed language model response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for SEO Auditor operations
pub type Result<T> = std::result::Result<T, SeoError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use audit::{audit_site, audit_url, PageAudit, PageReport, SiteAuditReport};
pub use config::Config;
pub use crawler::{crawl_site, HttpFetcher, ReqwestFetcher, DEFAULT_CRAWL_LIMIT};
pub use seo::{run_seo_checks, AuditResult, Intent};
