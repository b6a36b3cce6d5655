use crate::document::{HtmlDocument, ScraperDocument};
use crate::seo::headings::check_headings;
use crate::seo::images::check_images;
use crate::seo::intent::detect_intent;
use crate::seo::keywords::check_keyword_usage;
use crate::seo::links::{check_links, extract_anchors};
use crate::seo::metadata::{check_metadata, check_open_graph};
use crate::seo::structured_data::check_structured_data;
use crate::seo::suggestions::{generate_suggestions, SuggestionInput};
use crate::seo::types::AuditResult;
use crate::url::extract_host;

/// Runs every SEO check against one page
///
/// The HTML is parsed once and every extractor reads the same immutable
/// document. The result depends only on the inputs, so repeated calls with
/// the same arguments produce identical results.
///
/// # Arguments
///
/// * `html` - The page HTML
/// * `url` - The page URL, used to tell internal links from external ones.
///   If it has no hostname only root-relative links count as internal.
/// * `keyword` - Optional target keyword for frequency and stuffing checks
///
/// # Example
///
/// ```
/// use seo_auditor::seo::run_seo_checks;
///
/// let html = r#"<title>SEO Guide</title><h1>Intro</h1><img src="a.jpg">"#;
/// let result = run_seo_checks(html, "https://example.com/", Some("seo"));
///
/// assert_eq!(result.metadata.title.as_deref(), Some("SEO Guide"));
/// assert_eq!(result.headings.h1, 1);
/// assert_eq!(result.images.missing_alt, 1);
/// ```
pub fn run_seo_checks(html: &str, url: &str, keyword: Option<&str>) -> AuditResult {
    let doc = ScraperDocument::parse(html);
    audit_document(&doc, url, keyword)
}

/// Runs every SEO check against an already parsed document
pub fn audit_document(doc: &dyn HtmlDocument, url: &str, keyword: Option<&str>) -> AuditResult {
    let host = extract_host(url);
    let host = host.as_deref();

    let metadata = check_metadata(doc);
    let structured_data = check_structured_data(doc, doc.raw_html());
    let open_graph = check_open_graph(doc);
    let headings = check_headings(doc);
    let links = check_links(doc, host);
    let anchors = extract_anchors(doc, host);
    let images = check_images(doc);

    let body_text = body_text(doc);
    let word_count = body_text.split_whitespace().count();
    let intent = detect_intent(&body_text);
    let keyword_usage = check_keyword_usage(&body_text, keyword);

    let suggestions = generate_suggestions(&SuggestionInput {
        keyword,
        keyword_usage,
        headings: &headings,
        links: &links,
        images: &images,
    });

    AuditResult {
        metadata,
        structured_data,
        open_graph,
        headings,
        links,
        anchors,
        images,
        word_count,
        intent,
        keyword: keyword.map(str::to_string),
        keyword_frequency: keyword_usage.keyword_frequency,
        keyword_stuffing: keyword_usage.keyword_stuffing,
        suggestions,
    }
}

/// Visible body text with whitespace runs collapsed to single spaces
fn body_text(doc: &dyn HtmlDocument) -> String {
    doc.select("body")
        .iter()
        .map(|body| body.text())
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
