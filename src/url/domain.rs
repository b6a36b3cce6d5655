use url::Url;

/// Extracts the hostname from a URL string
///
/// The host is lowercased (the `url` crate normalizes it) and excludes the port.
/// Unparseable URLs and URLs without a host return None.
///
/// # Examples
///
/// ```
/// use seo_auditor::url::extract_host;
///
/// assert_eq!(extract_host("https://EXAMPLE.COM/path"), Some("example.com".to_string()));
/// assert_eq!(extract_host("https://example.com:8080/"), Some("example.com".to_string()));
/// assert_eq!(extract_host("not a url"), None);
/// ```
pub fn extract_host(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
}

/// Returns the origin (scheme, host and non-default port) of a URL string
///
/// # Examples
///
/// ```
/// use seo_auditor::url::origin_of;
///
/// assert_eq!(origin_of("https://example.com/a/b?c"), Some("https://example.com".to_string()));
/// assert_eq!(origin_of("http://127.0.0.1:8080/"), Some("http://127.0.0.1:8080".to_string()));
/// ```
pub fn origin_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let origin = parsed.origin();
    if origin.is_tuple() {
        Some(origin.ascii_serialization())
    } else {
        None
    }
}

/// Builds the URL of a well-known file (e.g. `sitemap.xml`) under a site URL
///
/// A single trailing slash on `site` is absorbed so the result never contains
/// a doubled slash at the join point. Nothing else about `site` is changed.
///
/// # Examples
///
/// ```
/// use seo_auditor::url::site_file_url;
///
/// assert_eq!(site_file_url("https://x.com", "robots.txt"), "https://x.com/robots.txt");
/// assert_eq!(site_file_url("https://x.com/", "robots.txt"), "https://x.com/robots.txt");
/// ```
pub fn site_file_url(site: &str, file: &str) -> String {
    let base = site.strip_suffix('/').unwrap_or(site);
    format!("{}/{}", base, file)
}
