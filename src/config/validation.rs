use crate::config::types::{Config, HttpConfig, RecommendConfig, ServerConfig};
use crate::config::user_agents::UserAgents;
use crate::ConfigError;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use url::Url;

const MIN_TIMEOUT_MS: u64 = 100;
const MAX_TIMEOUT_MS: u64 = 300_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_user_agents(&config.user_agents)?;
    validate_http_config(&config.http, &config.user_agents)?;
    validate_server_config(&config.server)?;
    validate_recommend_config(&config.recommend)?;
    Ok(())
}

/// Validates outbound request configuration
fn validate_http_config(
    config: &HttpConfig,
    overrides: &BTreeMap<String, String>,
) -> Result<(), ConfigError> {
    let timeouts = [
        ("sitemap-timeout-ms", config.sitemap_timeout_ms),
        ("robots-timeout-ms", config.robots_timeout_ms),
        ("navigation-timeout-ms", config.navigation_timeout_ms),
        ("page-timeout-ms", config.page_timeout_ms),
    ];

    for (name, value) in timeouts {
        if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&value) {
            return Err(ConfigError::Validation(format!(
                "{} must be between {} and {}, got {}",
                name, MIN_TIMEOUT_MS, MAX_TIMEOUT_MS, value
            )));
        }
    }

    if config.max_redirects < 1 || config.max_redirects > 50 {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be between 1 and 50, got {}",
            config.max_redirects
        )));
    }

    let agents = UserAgents::new(overrides, &config.default_user_agent);
    if !agents.contains(&config.default_user_agent) {
        return Err(ConfigError::Validation(format!(
            "default-user-agent '{}' is not a known agent (known: {})",
            config.default_user_agent,
            agents.names().collect::<Vec<_>>().join(", ")
        )));
    }

    Ok(())
}

/// Validates user-agent overrides: names and values must be non-empty
fn validate_user_agents(overrides: &BTreeMap<String, String>) -> Result<(), ConfigError> {
    for (name, agent) in overrides {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user agent names cannot be empty".to_string(),
            ));
        }

        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "user agent '{}' cannot be empty",
                name
            )));
        }
    }

    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!("Invalid bind address '{}': {}", config.bind, e))
    })?;
    Ok(())
}

/// Validates language-model configuration
fn validate_recommend_config(config: &RecommendConfig) -> Result<(), ConfigError> {
    if config.model.trim().is_empty() {
        return Err(ConfigError::Validation(
            "recommend model cannot be empty".to_string(),
        ));
    }

    let url = Url::parse(&config.endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid recommend endpoint: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Recommend endpoint must use HTTP or HTTPS, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}
