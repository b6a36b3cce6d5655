//! Link statistics and anchor extraction

use crate::document::HtmlDocument;
use crate::seo::types::{Anchor, LinkStats, LinkType, NO_VISIBLE_TEXT};
use crate::url::is_internal_link;

/// Counts internal and external anchors
///
/// Every `<a>` element counts, with or without an `href`. See
/// [`is_internal_link`] for the classification rule.
///
/// # Arguments
///
/// * `doc` - The parsed page
/// * `host` - Hostname of the audited page, if known
pub fn check_links(doc: &dyn HtmlDocument, host: Option<&str>) -> LinkStats {
    let anchors = doc.select("a");
    let internal = anchors
        .iter()
        .filter(|a| is_internal_link(a.attr("href").unwrap_or(""), host))
        .count();

    LinkStats {
        total: anchors.len(),
        internal,
        external: anchors.len() - internal,
    }
}

/// Lists every anchor in document order with its text, follow type and classification
pub fn extract_anchors(doc: &dyn HtmlDocument, host: Option<&str>) -> Vec<Anchor> {
    doc.select("a")
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let href = element.attr("href").unwrap_or("").to_string();

            let text = match element.text().trim() {
                "" => NO_VISIBLE_TEXT.to_string(),
                text => text.to_string(),
            };

            let link_type = if is_nofollow(element.attr("rel").unwrap_or("")) {
                LinkType::Nofollow
            } else {
                LinkType::Dofollow
            };

            let is_internal = is_internal_link(&href, host);

            Anchor {
                index: i + 1,
                href,
                text,
                link_type,
                is_internal,
            }
        })
        .collect()
}

/// True if the space-separated `rel` value carries the `nofollow` token
fn is_nofollow(rel: &str) -> bool {
    rel.split_whitespace()
        .any(|token| token.eq_ignore_ascii_case("nofollow"))
}
