//! Output module for rendering audit reports
//!
//! This module handles:
//! - Choosing between JSON and markdown output
//! - Rendering page and site reports in either format
//! - Writing a rendered report to a file

mod markdown;

pub use markdown::{format_page_report, format_site_report};

use crate::audit::{PageReport, SiteAuditReport};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Report format selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, the same shape the HTTP API returns
    #[default]
    Json,
    /// Human-readable markdown with tables
    Markdown,
}

/// Serializes any report as pretty-printed JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Renders a single-page report in the requested format
pub fn render_page_report(
    report: &PageReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Markdown => Ok(format_page_report(report)),
    }
}

/// Renders a site report in the requested format
pub fn render_site_report(
    report: &SiteAuditReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Markdown => Ok(format_site_report(report)),
    }
}

/// Writes a rendered report to `output_path`, replacing any existing file
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(std::io::Error)` - Failed to create or write the file
pub fn write_report(content: &str, output_path: &Path) -> std::io::Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    Ok(())
}
