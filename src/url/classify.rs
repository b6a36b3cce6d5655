/// Path substrings that exclude a discovered URL from crawl results
pub const CRAWL_DENYLIST: &[&str] = &["/blog", "/resources", "/news"];

/// Returns true if the URL contains any denylisted substring
///
/// This is a plain, case-sensitive substring test: `/blogroll` and
/// `https://x.com/newsletter` are both excluded, `/Blog` is not.
pub fn is_denylisted(url: &str) -> bool {
    CRAWL_DENYLIST.iter().any(|needle| url.contains(needle))
}

/// Classifies an anchor `href` as internal to the audited page's site
///
/// A link is internal if it is root-relative (starts with `/`) or if the
/// page hostname appears anywhere in the href. The substring test is crude;
/// `example.com` also matches `notexample.com`.
///
/// # Arguments
///
/// * `href` - The raw `href` attribute value (empty if absent)
/// * `host` - Hostname of the audited page, if it has one
pub fn is_internal_link(href: &str, host: Option<&str>) -> bool {
    if href.starts_with('/') {
        return true;
    }

    match host {
        Some(host) if !host.is_empty() => href.contains(host),
        _ => false,
    }
}
