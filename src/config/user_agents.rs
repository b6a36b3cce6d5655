use std::collections::BTreeMap;

/// Name of the agent used when nothing else is requested
pub const DEFAULT_AGENT: &str = "chrome";

/// Built-in user agent strings, keyed by the short name callers pass around
const BUILTIN_AGENTS: &[(&str, &str)] = &[
    ("chrome", "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"),
    (
        "googlebot",
        "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
    ),
    ("samsung5g", "Mozilla/5.0 (Linux; Android 13; SM-S901B)"),
    ("iphone13pmax", "Mozilla/5.0 (iPhone14,3; CPU iPhone OS 15_0)"),
];

/// Immutable name → user-agent string mapping
///
/// Built once from the built-in agents plus any `[user-agents]` entries in
/// the configuration, then handed to whoever builds outbound requests.
#[derive(Debug, Clone)]
pub struct UserAgents {
    agents: BTreeMap<String, String>,
    default_name: String,
}

impl UserAgents {
    /// Builds the mapping, letting `overrides` replace or extend the built-ins
    ///
    /// # Arguments
    ///
    /// * `overrides` - Extra or replacement agents from configuration
    /// * `default_name` - Agent used when a lookup misses; falls back to
    ///   `chrome` if it isn't a known name
    pub fn new(overrides: &BTreeMap<String, String>, default_name: &str) -> Self {
        let mut agents: BTreeMap<String, String> = BUILTIN_AGENTS
            .iter()
            .map(|(name, agent)| (name.to_string(), agent.to_string()))
            .collect();

        for (name, agent) in overrides {
            agents.insert(name.to_lowercase(), agent.clone());
        }

        let default_name = default_name.to_lowercase();
        let default_name = if agents.contains_key(&default_name) {
            default_name
        } else {
            DEFAULT_AGENT.to_string()
        };

        Self {
            agents,
            default_name,
        }
    }

    /// Resolves an agent name to its user-agent string
    ///
    /// Unknown or missing names resolve to the default agent.
    pub fn resolve(&self, name: Option<&str>) -> &str {
        name.and_then(|n| self.agents.get(&n.to_lowercase()))
            .or_else(|| self.agents.get(&self.default_name))
            .map(String::as_str)
            .unwrap_or(BUILTIN_AGENTS[0].1)
    }

    /// Returns true if `name` is a known agent
    pub fn contains(&self, name: &str) -> bool {
        self.agents.contains_key(&name.to_lowercase())
    }

    /// Iterates over the known agent names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.agents.keys().map(String::as_str)
    }
}

impl Default for UserAgents {
    fn default() -> Self {
        Self::new(&BTreeMap::new(), DEFAULT_AGENT)
    }
}
