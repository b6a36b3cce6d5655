//! Metadata and Open Graph extraction

use crate::document::HtmlDocument;
use crate::seo::types::{Metadata, OpenGraph};

/// Extracts title, description, canonical URL and robots directive
///
/// The title is the trimmed text of the first `<title>`. The other fields
/// come from the first matching tag's attribute. A missing tag or attribute
/// gives `None`; a present-but-empty attribute gives `Some("")`. The robots
/// directive is lowercased.
pub fn check_metadata(doc: &dyn HtmlDocument) -> Metadata {
    let title = doc
        .first("title")
        .map(|element| element.text().trim().to_string());

    Metadata {
        title,
        description: first_attr(doc, r#"meta[name="description"]"#, "content"),
        canonical: first_attr(doc, r#"link[rel="canonical"]"#, "href"),
        robots: first_attr(doc, r#"meta[name="robots"]"#, "content").map(|r| r.to_lowercase()),
    }
}

/// Extracts `og:title`, `og:description` and `og:image`
pub fn check_open_graph(doc: &dyn HtmlDocument) -> OpenGraph {
    OpenGraph {
        og_title: first_attr(doc, r#"meta[property="og:title"]"#, "content"),
        og_description: first_attr(doc, r#"meta[property="og:description"]"#, "content"),
        og_image: first_attr(doc, r#"meta[property="og:image"]"#, "content"),
    }
}

fn first_attr(doc: &dyn HtmlDocument, selector: &str, attr: &str) -> Option<String> {
    doc.first(selector)
        .and_then(|element| element.attr(attr).map(str::to_string))
}
