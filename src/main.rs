//! SEO Auditor main entry point
//!
//! This is the command-line interface for crawling sites, auditing pages,
//! requesting recommendations and running the HTTP API.

use anyhow::Context;
use clap::{Parser, Subcommand};
use seo_auditor::audit::{audit_site, audit_url, DEFAULT_FULL_AUDIT_LIMIT};
use seo_auditor::config::{load_optional_config, Config};
use seo_auditor::crawler::{crawl_site, ReqwestFetcher, DEFAULT_CRAWL_LIMIT};
use seo_auditor::output::{render_page_report, render_site_report, write_report, OutputFormat};
use seo_auditor::recommend::GeminiClient;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// SEO Auditor: discover a site's pages and audit their on-page SEO
///
/// Pages are discovered through sitemap.xml, sitemaps declared in
/// robots.txt, or the homepage navigation menu, then checked for metadata,
/// headings, links, images, structured data and keyword usage.
#[derive(Parser, Debug)]
#[command(name = "seo-auditor")]
#[command(version)]
#[command(about = "Automated on-page SEO auditing", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Discover a site's URLs and print them
    Crawl {
        homepage: String,

        /// Maximum number of URLs to return
        #[arg(short, long, default_value_t = DEFAULT_CRAWL_LIMIT, value_parser = parse_limit)]
        limit: usize,
    },

    /// Audit a single page, recording its redirect chain
    Audit {
        url: String,

        #[command(flatten)]
        options: AuditOptions,
    },

    /// Crawl a site and audit every discovered page
    FullAudit {
        homepage: String,

        /// Maximum number of pages to audit
        #[arg(short, long, default_value_t = DEFAULT_FULL_AUDIT_LIMIT, value_parser = parse_limit)]
        limit: usize,

        #[command(flatten)]
        options: AuditOptions,
    },

    /// Ask the language model for recommendations on a saved audit
    Recommend {
        /// JSON file holding an audit, or `{"auditData": ...}`
        #[arg(value_name = "AUDIT_JSON_FILE")]
        audit_file: PathBuf,
    },

    /// Run the HTTP API
    Serve {
        /// Address to listen on, overriding the configuration
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[derive(clap::Args, Debug)]
struct AuditOptions {
    /// Target keyword for frequency and stuffing checks
    #[arg(short, long)]
    keyword: Option<String>,

    /// User agent name (chrome, googlebot, samsung5g, iphone13pmax, or a configured one)
    #[arg(short = 'u', long)]
    user_agent: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(format!("'{}' is not a positive integer", s)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let config = match load_optional_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    match cli.command {
        Command::Crawl { homepage, limit } => handle_crawl(&config, &homepage, limit).await?,
        Command::Audit { url, options } => handle_audit(&config, &url, &options).await?,
        Command::FullAudit {
            homepage,
            limit,
            options,
        } => handle_full_audit(&config, &homepage, limit, &options).await?,
        Command::Recommend { audit_file } => handle_recommend(&config, &audit_file).await?,
        Command::Serve { bind } => {
            let mut config = config;
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            seo_auditor::server::serve(config).await?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so reports on stdout can be piped.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seo_auditor=info,warn"),
            1 => EnvFilter::new("seo_auditor=debug,info"),
            2 => EnvFilter::new("seo_auditor=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn default_fetcher(config: &Config) -> anyhow::Result<ReqwestFetcher> {
    let user_agents = config.user_agents();
    ReqwestFetcher::new(user_agents.resolve(None)).context("Failed to build HTTP client")
}

/// Prints a report or writes it to the requested file
fn emit(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            write_report(content, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Handles the crawl command: prints discovered URLs one per line
async fn handle_crawl(config: &Config, homepage: &str, limit: usize) -> anyhow::Result<()> {
    let fetcher = default_fetcher(config)?;

    let urls = crawl_site(&fetcher, &config.http, homepage, limit).await;
    if urls.is_empty() {
        tracing::warn!("No URLs found for {}", homepage);
    }

    for url in &urls {
        println!("{}", url);
    }

    Ok(())
}

/// Handles the audit command
async fn handle_audit(config: &Config, url: &str, options: &AuditOptions) -> anyhow::Result<()> {
    let fetcher = default_fetcher(config)?;
    let user_agents = config.user_agents();
    let user_agent = user_agents.resolve(options.user_agent.as_deref());

    let report = audit_url(
        &fetcher,
        &config.http,
        url,
        options.keyword.as_deref(),
        user_agent,
    )
    .await
    .with_context(|| format!("Audit of {} failed", url))?;

    let rendered = render_page_report(&report, options.format)?;
    emit(&rendered, options.output.as_deref())
}

/// Handles the full-audit command
async fn handle_full_audit(
    config: &Config,
    homepage: &str,
    limit: usize,
    options: &AuditOptions,
) -> anyhow::Result<()> {
    let fetcher = default_fetcher(config)?;
    let user_agents = config.user_agents();
    let user_agent = user_agents.resolve(options.user_agent.as_deref());

    tracing::info!("Auditing up to {} pages of {}", limit, homepage);

    let report = audit_site(
        &fetcher,
        &config.http,
        homepage,
        limit,
        options.keyword.as_deref(),
        user_agent,
    )
    .await;

    let rendered = render_site_report(&report, options.format)?;
    emit(&rendered, options.output.as_deref())
}

/// Handles the recommend command
async fn handle_recommend(config: &Config, audit_file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(audit_file)
        .with_context(|| format!("Failed to read {}", audit_file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", audit_file.display()))?;
    let audit = value.get("auditData").unwrap_or(&value);

    let client = GeminiClient::from_config(&config.recommend)?;
    tracing::info!("Requesting recommendations from {}", client.model());

    let recommendations = client.recommend(audit).await?;
    println!("{}", recommendations);

    Ok(())
}
