use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Main configuration structure for SEO Auditor
///
/// Every section has defaults, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    #[serde(rename = "user-agents")]
    pub user_agents: BTreeMap<String, String>,
    pub server: ServerConfig,
    pub recommend: RecommendConfig,
}

/// Outbound request configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Timeout for sitemap fetches (milliseconds)
    #[serde(rename = "sitemap-timeout-ms")]
    pub sitemap_timeout_ms: u64,

    /// Timeout for robots.txt fetches (milliseconds)
    #[serde(rename = "robots-timeout-ms")]
    pub robots_timeout_ms: u64,

    /// Timeout for the homepage fetch used by the navigation fallback (milliseconds)
    #[serde(rename = "navigation-timeout-ms")]
    pub navigation_timeout_ms: u64,

    /// Timeout for fetching a page to audit (milliseconds)
    #[serde(rename = "page-timeout-ms")]
    pub page_timeout_ms: u64,

    /// Maximum number of redirect hops recorded for a single-URL audit
    #[serde(rename = "max-redirects")]
    pub max_redirects: u32,

    /// Name of the user agent used when the caller doesn't pick one
    #[serde(rename = "default-user-agent")]
    pub default_user_agent: String,
}

impl HttpConfig {
    pub fn sitemap_timeout(&self) -> Duration {
        Duration::from_millis(self.sitemap_timeout_ms)
    }

    pub fn robots_timeout(&self) -> Duration {
        Duration::from_millis(self.robots_timeout_ms)
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_millis(self.navigation_timeout_ms)
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_millis(self.page_timeout_ms)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            sitemap_timeout_ms: 10_000,
            robots_timeout_ms: 8_000,
            navigation_timeout_ms: 10_000,
            page_timeout_ms: 15_000,
            max_redirects: 10,
            default_user_agent: "chrome".to_string(),
        }
    }
}

/// HTTP API server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Language-model recommendation configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Gemini model name
    pub model: String,

    /// Base URL of the generative language REST API
    pub endpoint: String,

    /// API key; the GEMINI_API_KEY environment variable takes precedence
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: None,
        }
    }
}
