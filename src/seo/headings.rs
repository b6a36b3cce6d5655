use crate::document::HtmlDocument;
use crate::seo::types::Headings;

/// Counts heading elements at each level
pub fn check_headings(doc: &dyn HtmlDocument) -> Headings {
    Headings {
        h1: doc.count("h1"),
        h2: doc.count("h2"),
        h3: doc.count("h3"),
        h4: doc.count("h4"),
        h5: doc.count("h5"),
        h6: doc.count("h6"),
    }
}
