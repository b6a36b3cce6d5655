//! Multi-page site audit

use crate::audit::page::page_options;
use crate::config::HttpConfig;
use crate::crawler::{crawl_site, HttpFetcher};
use crate::seo::{run_seo_checks, AuditResult};
use crate::FetchError;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Number of pages audited when the caller doesn't say
pub const DEFAULT_FULL_AUDIT_LIMIT: usize = 5;

/// Outcome of auditing one crawled URL
///
/// Serializes as `{"url", "audit"}` on success or `{"url", "error"}` on
/// failure.
#[derive(Debug)]
pub struct PageAudit {
    pub url: String,
    pub result: Result<AuditResult, FetchError>,
}

impl PageAudit {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

impl Serialize for PageAudit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PageAudit", 2)?;
        state.serialize_field("url", &self.url)?;
        match &self.result {
            Ok(audit) => state.serialize_field("audit", audit)?,
            Err(e) => state.serialize_field("error", &e.to_string())?,
        }
        state.end()
    }
}

/// Result of a crawl followed by an audit of every discovered page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAuditReport {
    pub homepage: String,
    /// Number of URLs the crawl returned
    pub total_urls: usize,
    /// Number of entries in `results`, failures included
    pub audited_urls: usize,
    pub results: Vec<PageAudit>,
}

impl SiteAuditReport {
    /// Number of pages that were fetched and checked successfully
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }
}

/// Crawls `homepage` and audits each discovered URL in turn
///
/// Pages are fetched one at a time with redirects followed. A transport
/// failure or non-2xx status is recorded in that page's entry and the run
/// continues.
///
/// # Arguments
///
/// * `fetcher` - The HTTP fetcher to use
/// * `http` - Timeouts for discovery and page fetches
/// * `homepage` - The site homepage
/// * `limit` - Maximum number of pages to audit
/// * `keyword` - Optional target keyword
/// * `user_agent` - User-Agent header value for page fetches
pub async fn audit_site(
    fetcher: &dyn HttpFetcher,
    http: &HttpConfig,
    homepage: &str,
    limit: usize,
    keyword: Option<&str>,
    user_agent: &str,
) -> SiteAuditReport {
    let urls = crawl_site(fetcher, http, homepage, limit).await;
    let options = page_options(http, user_agent);

    let mut results = Vec::with_capacity(urls.len());
    for url in &urls {
        let result = match fetcher.fetch(url, &options).await {
            Ok(response) if response.is_success() => {
                Ok(run_seo_checks(&response.body, url, keyword))
            }
            Ok(response) => Err(FetchError::Status {
                url: url.clone(),
                status: response.status,
            }),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            tracing::warn!("Failed to audit {}: {}", url, e);
        }

        results.push(PageAudit {
            url: url.clone(),
            result,
        });
    }

    let report = SiteAuditReport {
        homepage: homepage.to_string(),
        total_urls: urls.len(),
        audited_urls: results.len(),
        results,
    };

    tracing::info!(
        "Audited {} of {} pages for {}",
        report.success_count(),
        report.total_urls,
        homepage
    );

    report
}
