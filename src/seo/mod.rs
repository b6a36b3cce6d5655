//! SEO signal extraction and scoring
//!
//! Each extractor is a pure function over an [`HtmlDocument`](crate::document::HtmlDocument)
//! and derives one category of signal:
//! - metadata and Open Graph tags
//! - JSON-LD types and microdata presence
//! - heading counts
//! - link statistics and anchors
//! - image alt coverage
//! - content intent and keyword usage
//!
//! [`run_seo_checks`] runs all of them over one page and adds suggestions.

mod checks;
mod headings;
mod images;
mod intent;
mod keywords;
mod links;
mod metadata;
mod structured_data;
mod suggestions;
mod types;

pub use checks::{audit_document, run_seo_checks};
pub use headings::check_headings;
pub use images::check_images;
pub use intent::detect_intent;
pub use keywords::{check_keyword_usage, MAX_KEYWORD_FREQUENCY, MAX_KEYWORD_RATIO};
pub use links::{check_links, extract_anchors};
pub use metadata::{check_metadata, check_open_graph};
pub use structured_data::check_structured_data;
pub use suggestions::{generate_suggestions, SuggestionInput};
pub use types::{
    Anchor, AuditResult, Headings, ImageDetail, Images, Intent, KeywordUsage, LinkStats,
    LinkType, Metadata, OpenGraph, StructuredData, MISSING_ALT, NO_SRC, NO_VISIBLE_TEXT,
};
