//! JSON-LD and microdata detection

use crate::document::HtmlDocument;
use crate::seo::types::StructuredData;
use serde_json::Value;

const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;
const MICRODATA_MARKERS: &[&str] = &["itemscope", "itemtype", "itemprop"];

/// Collects schema `@type` values from JSON-LD blocks and detects microdata
///
/// Each block is parsed independently; a block that isn't valid JSON is
/// skipped. `@type` is read from a top-level object or from each element of a
/// top-level array, and may itself be a string or an array of strings.
///
/// # Arguments
///
/// * `doc` - The parsed page
/// * `html` - The raw page HTML, searched case-insensitively for microdata
///   attributes
pub fn check_structured_data(doc: &dyn HtmlDocument, html: &str) -> StructuredData {
    let mut types: Vec<String> = Vec::new();

    for block in doc.select(JSON_LD_SELECTOR) {
        let json: Value = match serde_json::from_str(block.html().trim()) {
            Ok(json) => json,
            Err(e) => {
                tracing::debug!("Skipping malformed JSON-LD block: {}", e);
                continue;
            }
        };

        let items = match &json {
            Value::Array(items) => items.iter().collect::<Vec<_>>(),
            other => vec![other],
        };

        for item in items {
            for schema_type in item_types(item) {
                if !types.contains(&schema_type) {
                    types.push(schema_type);
                }
            }
        }
    }

    let lower = html.to_lowercase();
    let has_microdata = MICRODATA_MARKERS.iter().any(|m| lower.contains(m));

    StructuredData {
        types,
        has_microdata,
    }
}

/// Reads the `@type` of one JSON-LD node
fn item_types(item: &Value) -> Vec<String> {
    match item.get("@type") {
        Some(Value::String(t)) if !t.is_empty() => vec![t.clone()],
        Some(Value::Array(ts)) => ts
            .iter()
            .filter_map(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
