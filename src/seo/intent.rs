use crate::seo::types::Intent;

/// Keyword families, checked in order; the first family with a hit wins
const INTENT_FAMILIES: &[(Intent, &[&str])] = &[
    (
        Intent::Transactional,
        &["buy", "purchase", "order", "discount", "coupon", "deal"],
    ),
    (
        Intent::Informational,
        &["how to", "what is", "guide", "tutorial", "tips", "learn"],
    ),
    (
        Intent::Navigational,
        &["login", "sign in", "homepage", "official site"],
    ),
    (
        Intent::CommercialInvestigation,
        &["best", "compare", "review", "top", "vs", "alternative"],
    ),
];

/// Classifies page purpose from its visible text
///
/// Matching is a lowercase substring test, not word-aware: "border" contains
/// "order" and "stop" contains "top". Families are checked in precedence
/// order Transactional, Informational, Navigational, Commercial Investigation.
pub fn detect_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();

    INTENT_FAMILIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Unknown)
}
