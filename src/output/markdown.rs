//! Markdown report generation
//!
//! This module renders page and site audits as human-readable markdown,
//! with tables for counts and plain lists for suggestions.

use crate::audit::{PageReport, SiteAuditReport};
use crate::seo::AuditResult;
use chrono::Utc;

/// Formats a single-page audit as markdown
///
/// # Arguments
///
/// * `report` - The page report, redirect chain included
///
/// # Returns
///
/// A formatted markdown string
pub fn format_page_report(report: &PageReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# SEO Audit: {}\n\n", report.url));
    md.push_str(&format!("_Generated {}_\n\n", timestamp()));

    // Redirect chain
    md.push_str("## Redirect Chain\n\n");
    md.push_str("| # | URL | Status |\n");
    md.push_str("|---|-----|--------|\n");
    for (i, hop) in report.redirect_chain.iter().enumerate() {
        md.push_str(&format!("| {} | {} | {} |\n", i + 1, cell(&hop.url), hop.status));
    }
    md.push('\n');

    push_audit_sections(&mut md, &report.audit, 2);

    md
}

/// Formats a crawl-and-audit run as markdown
///
/// Starts with an overview table, one row per page, followed by a detailed
/// section for each page that was audited successfully.
pub fn format_site_report(report: &SiteAuditReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# SEO Site Audit: {}\n\n", report.homepage));
    md.push_str(&format!("_Generated {}_\n\n", timestamp()));

    md.push_str("## Overview\n\n");
    md.push_str(&format!("- **URLs Discovered**: {}\n", report.total_urls));
    md.push_str(&format!("- **URLs Audited**: {}\n", report.audited_urls));
    md.push_str(&format!("- **Successful**: {}\n", report.success_count()));
    md.push_str(&format!(
        "- **Failed**: {}\n\n",
        report.audited_urls - report.success_count()
    ));

    if report.results.is_empty() {
        md.push_str("No pages were discovered.\n");
        return md;
    }

    md.push_str("| URL | Words | Intent | H1 | Internal Links | Missing Alt | Suggestions |\n");
    md.push_str("|-----|-------|--------|----|----------------|-------------|-------------|\n");
    for page in &report.results {
        match &page.result {
            Ok(audit) => md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                cell(&page.url),
                audit.word_count,
                audit.intent,
                audit.headings.h1,
                audit.links.internal,
                audit.images.missing_alt,
                audit.suggestions.len()
            )),
            Err(e) => md.push_str(&format!(
                "| {} | - | - | - | - | - | error: {} |\n",
                cell(&page.url),
                cell(&e.to_string())
            )),
        }
    }
    md.push('\n');

    for page in &report.results {
        if let Ok(audit) = &page.result {
            md.push_str(&format!("## {}\n\n", page.url));
            push_audit_sections(&mut md, audit, 3);
        }
    }

    md
}

/// Appends the per-page sections, with headings at `level`
fn push_audit_sections(md: &mut String, audit: &AuditResult, level: usize) {
    let h = "#".repeat(level);

    // Metadata
    md.push_str(&format!("{} Metadata\n\n", h));
    md.push_str(&format!("- **Title**: {}\n", or_missing(&audit.metadata.title)));
    md.push_str(&format!(
        "- **Description**: {}\n",
        or_missing(&audit.metadata.description)
    ));
    md.push_str(&format!(
        "- **Canonical**: {}\n",
        or_missing(&audit.metadata.canonical)
    ));
    md.push_str(&format!("- **Robots**: {}\n\n", or_missing(&audit.metadata.robots)));

    // Headings
    let hd = &audit.headings;
    md.push_str(&format!("{} Headings\n\n", h));
    md.push_str("| H1 | H2 | H3 | H4 | H5 | H6 |\n");
    md.push_str("|----|----|----|----|----|----|\n");
    md.push_str(&format!(
        "| {} | {} | {} | {} | {} | {} |\n\n",
        hd.h1, hd.h2, hd.h3, hd.h4, hd.h5, hd.h6
    ));

    // Links and images
    md.push_str(&format!("{} Links and Images\n\n", h));
    md.push_str("| Metric | Count |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Links | {} |\n", audit.links.total));
    md.push_str(&format!("| Internal Links | {} |\n", audit.links.internal));
    md.push_str(&format!("| External Links | {} |\n", audit.links.external));
    md.push_str(&format!("| Images | {} |\n", audit.images.total));
    md.push_str(&format!(
        "| Images Missing Alt | {} |\n\n",
        audit.images.missing_alt
    ));

    // Content
    md.push_str(&format!("{} Content\n\n", h));
    md.push_str(&format!("- **Word Count**: {}\n", audit.word_count));
    md.push_str(&format!("- **Intent**: {}\n", audit.intent));
    if let Some(keyword) = &audit.keyword {
        md.push_str(&format!(
            "- **Keyword**: {} ({} occurrences{})\n",
            keyword,
            audit.keyword_frequency,
            if audit.keyword_stuffing { ", stuffing" } else { "" }
        ));
    }
    md.push('\n');

    // Structured data and Open Graph
    md.push_str(&format!("{} Structured Data\n\n", h));
    if audit.structured_data.types.is_empty() {
        md.push_str("- **JSON-LD Types**: _none_\n");
    } else {
        md.push_str(&format!(
            "- **JSON-LD Types**: {}\n",
            audit.structured_data.types.join(", ")
        ));
    }
    md.push_str(&format!(
        "- **Microdata**: {}\n",
        if audit.structured_data.has_microdata { "yes" } else { "no" }
    ));
    md.push_str(&format!(
        "- **og:title**: {}\n",
        or_missing(&audit.open_graph.og_title)
    ));
    md.push_str(&format!(
        "- **og:description**: {}\n",
        or_missing(&audit.open_graph.og_description)
    ));
    md.push_str(&format!(
        "- **og:image**: {}\n\n",
        or_missing(&audit.open_graph.og_image)
    ));

    // Suggestions
    md.push_str(&format!("{} Suggestions\n\n", h));
    if audit.suggestions.is_empty() {
        md.push_str("No issues found.\n\n");
    } else {
        for suggestion in &audit.suggestions {
            md.push_str(&format!("- {}\n", suggestion));
        }
        md.push('\n');
    }
}

fn or_missing(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => "_missing_",
    }
}

/// Escapes pipes so a value can sit in a table cell
fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
