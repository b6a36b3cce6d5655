//! Audit orchestration over live pages
//!
//! This module ties fetching to the SEO checks:
//! - [`audit_url`] audits one page and records its redirect chain
//! - [`audit_site`] crawls a site and audits each discovered page

mod page;
mod site;

pub use page::{audit_url, PageReport, RedirectHop};
pub use site::{audit_site, PageAudit, SiteAuditReport, DEFAULT_FULL_AUDIT_LIMIT};
