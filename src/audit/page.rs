//! Single-URL audit with redirect-chain capture

use crate::config::HttpConfig;
use crate::crawler::{FetchOptions, FetchResponse, HttpFetcher};
use crate::seo::{run_seo_checks, AuditResult};
use crate::FetchError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

/// One response observed while following redirects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectHop {
    pub url: String,
    pub status: u16,
}

/// Audit of one URL, including every response on the way to the final page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    /// The URL as requested
    pub url: String,
    /// Every response in order, the final one included
    pub redirect_chain: Vec<RedirectHop>,
    #[serde(flatten)]
    pub audit: AuditResult,
}

/// Builds the request options used for every page fetch
pub(crate) fn page_options(http: &HttpConfig, user_agent: &str) -> FetchOptions {
    FetchOptions::new(http.page_timeout())
        .with_header("User-Agent", user_agent)
        .with_header("Accept", "text/html")
}

/// Fetches `url`, following redirects by hand, and audits the final page
///
/// # Arguments
///
/// * `fetcher` - The HTTP fetcher to use
/// * `http` - Timeouts and the redirect limit
/// * `url` - The page to audit
/// * `keyword` - Optional target keyword
/// * `user_agent` - User-Agent header value (already resolved from its name)
///
/// # Returns
///
/// * `Ok(PageReport)` - The redirect chain plus the audit. Checks run with
///   the requested URL, not the final one, so link classification uses the
///   host the caller asked about.
/// * `Err(FetchError)` - Transport failure, a redirect limit or loop, or a
///   final status of 400 or above
pub async fn audit_url(
    fetcher: &dyn HttpFetcher,
    http: &HttpConfig,
    url: &str,
    keyword: Option<&str>,
    user_agent: &str,
) -> Result<PageReport, FetchError> {
    let (redirect_chain, response) = follow_redirects(fetcher, http, url, user_agent).await?;

    if response.status >= 400 {
        return Err(FetchError::Status {
            url: response.url,
            status: response.status,
        });
    }

    tracing::info!(
        "Auditing {} ({} responses in chain)",
        url,
        redirect_chain.len()
    );

    Ok(PageReport {
        url: url.to_string(),
        redirect_chain,
        audit: run_seo_checks(&response.body, url, keyword),
    })
}

/// Follows 3xx responses with a `Location` header until a non-redirect
async fn follow_redirects(
    fetcher: &dyn HttpFetcher,
    http: &HttpConfig,
    url: &str,
    user_agent: &str,
) -> Result<(Vec<RedirectHop>, FetchResponse), FetchError> {
    let options = page_options(http, user_agent).without_redirects();
    let max_redirects = http.max_redirects as usize;

    let mut chain = Vec::new();
    let mut visited = HashSet::new();
    let mut current = url.to_string();
    visited.insert(current.clone());

    loop {
        let response = fetcher.fetch(&current, &options).await?;
        chain.push(RedirectHop {
            url: current.clone(),
            status: response.status,
        });

        let location = match response.header("location") {
            Some(location) if response.is_redirect() => location.to_string(),
            _ => return Ok((chain, response)),
        };

        if chain.len() > max_redirects {
            return Err(FetchError::RedirectLimit { url: url.to_string() });
        }

        let next = resolve_location(&current, &location)?;
        tracing::debug!("{} redirected ({}) to {}", current, response.status, next);

        if !visited.insert(next.clone()) {
            return Err(FetchError::RedirectLoop { url: next });
        }
        current = next;
    }
}

/// Resolves a `Location` header against the URL that returned it
fn resolve_location(current: &str, location: &str) -> Result<String, FetchError> {
    let invalid = |e: url::ParseError| FetchError::InvalidUrl {
        url: location.to_string(),
        message: e.to_string(),
    };

    let base = Url::parse(current).map_err(invalid)?;
    Ok(base.join(location).map_err(invalid)?.to_string())
}
