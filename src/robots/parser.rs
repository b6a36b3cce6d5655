//! Robots.txt parser implementation
//!
//! Only `Sitemap:` declarations matter for URL discovery; access rules are
//! not interpreted.

/// Parsed robots.txt data
#[derive(Debug, Clone, Default)]
pub struct ParsedRobots {
    /// Raw robots.txt content
    content: String,
}

impl ParsedRobots {
    /// Creates a new ParsedRobots from raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Returns the sitemap URLs declared in the file, in file order
    ///
    /// A declaration is any line whose lowercase form starts with `sitemap:`
    /// (no leading whitespace allowed). The value is everything after the
    /// first colon, trimmed, so `Sitemap: https://x.com/s.xml` yields
    /// `https://x.com/s.xml`. Empty values are skipped.
    pub fn sitemaps(&self) -> Vec<String> {
        self.content
            .lines()
            .filter(|line| line.to_lowercase().starts_with("sitemap:"))
            .filter_map(|line| line.split_once(':'))
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect()
    }
}
