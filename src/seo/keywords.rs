use crate::seo::types::KeywordUsage;
use regex::RegexBuilder;

/// A keyword appearing more often than this is always stuffing
pub const MAX_KEYWORD_FREQUENCY: usize = 30;

/// Keyword share of all words above which the page counts as stuffed
pub const MAX_KEYWORD_RATIO: f64 = 0.05;

/// Counts whole-word, case-insensitive occurrences of `keyword` in `text`
///
/// Multi-word keywords match across any run of whitespace, so "seo tools"
/// also matches "SEO\n  tools". Stuffing is flagged when the frequency
/// exceeds [`MAX_KEYWORD_FREQUENCY`] or the keyword makes up more than
/// [`MAX_KEYWORD_RATIO`] of the words in `text`.
///
/// A missing or blank keyword yields zero frequency and no stuffing.
///
/// # Examples
///
/// ```
/// use seo_auditor::seo::check_keyword_usage;
///
/// let usage = check_keyword_usage("SEO tips for seo beginners", Some("seo"));
/// assert_eq!(usage.keyword_frequency, 2);
/// assert!(usage.keyword_stuffing);
/// ```
pub fn check_keyword_usage(text: &str, keyword: Option<&str>) -> KeywordUsage {
    let keyword = match keyword.map(str::trim) {
        Some(k) if !k.is_empty() => k,
        _ => return KeywordUsage::default(),
    };

    let pattern = keyword
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    let regex = match RegexBuilder::new(&format!(r"\b{}\b", pattern))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => regex,
        Err(e) => {
            tracing::warn!("Could not build keyword pattern for {:?}: {}", keyword, e);
            return KeywordUsage::default();
        }
    };

    let frequency = regex.find_iter(text).count();
    let word_count = text.split_whitespace().count();
    let usage_ratio = if word_count > 0 {
        frequency as f64 / word_count as f64
    } else {
        0.0
    };

    KeywordUsage {
        keyword_frequency: frequency,
        keyword_stuffing: frequency > MAX_KEYWORD_FREQUENCY || usage_ratio > MAX_KEYWORD_RATIO,
    }
}
