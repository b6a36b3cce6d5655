use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder text for anchors with no visible text
pub const NO_VISIBLE_TEXT: &str = "[No visible text]";

/// Placeholder for images without a `src` attribute
pub const NO_SRC: &str = "[No src]";

/// Placeholder for images without an `alt` attribute
pub const MISSING_ALT: &str = "[Missing alt]";

/// Core page metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    pub robots: Option<String>,
}

/// JSON-LD types and microdata presence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    /// Distinct `@type` values, in first-seen order
    pub types: Vec<String>,
    pub has_microdata: bool,
}

/// Open Graph tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
}

/// Element counts per heading level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

/// Internal vs external anchor counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub total: usize,
    pub internal: usize,
    pub external: usize,
}

/// Whether search engines are asked not to follow a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Dofollow,
    Nofollow,
}

/// One `<a>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anchor {
    /// 1-based position in document order
    pub index: usize,
    pub href: String,
    pub text: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub is_internal: bool,
}

/// One `<img>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDetail {
    /// 1-based position in document order
    pub index: usize,
    pub src: String,
    pub alt: String,
    /// True only when the `alt` attribute is absent
    pub missing: bool,
}

/// Image totals and per-image details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Images {
    pub total: usize,
    pub missing_alt: usize,
    pub details: Vec<ImageDetail>,
}

/// Heuristic page purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Transactional,
    Informational,
    Navigational,
    #[serde(rename = "Commercial Investigation")]
    CommercialInvestigation,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Transactional => "Transactional",
            Intent::Informational => "Informational",
            Intent::Navigational => "Navigational",
            Intent::CommercialInvestigation => "Commercial Investigation",
            Intent::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword frequency and stuffing flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordUsage {
    pub keyword_frequency: usize,
    pub keyword_stuffing: bool,
}

/// Everything the audit learned about one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub metadata: Metadata,
    pub structured_data: StructuredData,
    pub open_graph: OpenGraph,
    pub headings: Headings,
    pub links: LinkStats,
    pub anchors: Vec<Anchor>,
    pub images: Images,
    pub word_count: usize,
    pub intent: Intent,
    pub keyword: Option<String>,
    pub keyword_frequency: usize,
    pub keyword_stuffing: bool,
    pub suggestions: Vec<String>,
}
