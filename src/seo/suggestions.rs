use crate::seo::types::{Headings, Images, KeywordUsage, LinkStats};

/// Signals the suggestion rules look at
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInput<'a> {
    pub keyword: Option<&'a str>,
    pub keyword_usage: KeywordUsage,
    pub headings: &'a Headings,
    pub links: &'a LinkStats,
    pub images: &'a Images,
}

/// Turns extracted signals into human-readable suggestions
///
/// Every rule is evaluated on its own; the output order is fixed: keyword
/// stuffing, missing h1, no internal links, missing alt attributes.
pub fn generate_suggestions(input: &SuggestionInput<'_>) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let Some(keyword) = input.keyword.filter(|k| !k.trim().is_empty()) {
        if input.keyword_usage.keyword_stuffing {
            suggestions.push(format!(
                "The keyword \"{}\" appears {} times, which may be excessive.",
                keyword, input.keyword_usage.keyword_frequency
            ));
        }
    }

    if input.headings.h1 == 0 {
        suggestions.push("No top-level heading found.".to_string());
    }

    if input.links.internal == 0 {
        suggestions.push("No internal links found.".to_string());
    }

    if input.images.missing_alt > 0 {
        suggestions.push(format!(
            "{} images are missing alt attributes.",
            input.images.missing_alt
        ));
    }

    suggestions
}
