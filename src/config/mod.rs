//! Configuration module for SEO Auditor
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; a missing file means "use the defaults".
//!
//! # Example
//!
//! ```no_run
//! use seo_auditor::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seo-auditor.toml")).unwrap();
//! println!("Page timeout: {}ms", config.http.page_timeout_ms);
//! ```

mod parser;
mod types;
mod user_agents;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, RecommendConfig, ServerConfig};
pub use user_agents::{UserAgents, DEFAULT_AGENT};

// Re-export parser functions
pub use parser::{load_config, load_optional_config};

impl Config {
    /// Builds the immutable user-agent mapping described by this configuration
    pub fn user_agents(&self) -> UserAgents {
        UserAgents::new(&self.user_agents, &self.http.default_user_agent)
    }
}
