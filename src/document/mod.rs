//! HTML document access
//!
//! Signal extractors never touch a concrete HTML parser. They query pages
//! through the narrow [`HtmlDocument`] capability (select by CSS selector,
//! then read text, attributes or inner HTML of each match). The default
//! implementation, [`ScraperDocument`], is backed by the `scraper` crate.

use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashMap;

/// Elements whose text content is never visible on the rendered page
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Read-only query capability over a parsed HTML document
pub trait HtmlDocument {
    /// Returns every element matching `selector`, in document order
    ///
    /// An invalid selector matches nothing.
    fn select(&self, selector: &str) -> Vec<ElementView>;

    /// The raw HTML the document was parsed from
    fn raw_html(&self) -> &str;

    /// Number of elements matching `selector`
    fn count(&self, selector: &str) -> usize {
        self.select(selector).len()
    }

    /// The first element matching `selector`, if any
    fn first(&self, selector: &str) -> Option<ElementView> {
        self.select(selector).into_iter().next()
    }
}

/// An owned snapshot of one matched element
///
/// Snapshots are detached from the parse tree, so extractors can hold and
/// pass them around without borrowing the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
    text: String,
    inner_html: String,
    attrs: HashMap<String, String>,
}

impl ElementView {
    /// Builds a view from its parts
    pub fn new(text: String, inner_html: String, attrs: HashMap<String, String>) -> Self {
        Self {
            text,
            inner_html,
            attrs,
        }
    }

    /// Visible text content of the element and its descendants, untrimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Value of attribute `name`; None when the attribute is absent
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Inner HTML of the element (for `<script>` this is the raw script body)
    pub fn html(&self) -> &str {
        &self.inner_html
    }
}

/// [`HtmlDocument`] backed by a `scraper` parse tree
pub struct ScraperDocument {
    raw: String,
    document: Html,
}

impl ScraperDocument {
    /// Parses `html` as a full document
    ///
    /// Parsing is lenient and never fails; malformed markup is repaired the
    /// way a browser would.
    pub fn parse(html: &str) -> Self {
        Self {
            raw: html.to_string(),
            document: Html::parse_document(html),
        }
    }
}

impl HtmlDocument for ScraperDocument {
    fn select(&self, selector: &str) -> Vec<ElementView> {
        let selector = match Selector::parse(selector) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::debug!("Invalid selector {:?}: {:?}", selector, e);
                return Vec::new();
            }
        };

        self.document.select(&selector).map(snapshot).collect()
    }

    fn raw_html(&self) -> &str {
        &self.raw
    }
}

/// Copies the parts of an element extractors care about
fn snapshot(element: ElementRef<'_>) -> ElementView {
    let mut text = String::new();
    collect_visible_text(element, &mut text);

    let attrs = element
        .value()
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    ElementView::new(text, element.inner_html(), attrs)
}

/// Appends the text of `element`'s descendants, skipping invisible subtrees
fn collect_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                if INVISIBLE_ELEMENTS.contains(&el.name()) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_visible_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}
