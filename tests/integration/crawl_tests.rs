//! Integration tests for site discovery
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! discovery chain end-to-end over real HTTP.

use seo_auditor::config::HttpConfig;
use seo_auditor::crawler::{crawl_site, Coordinator, DiscoveryStrategy, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new("TestBot/1.0").expect("Failed to build fetcher")
}

/// Short timeouts so an unexpected hang fails fast
fn test_http_config() -> HttpConfig {
    HttpConfig {
        sitemap_timeout_ms: 2_000,
        robots_timeout_ms: 2_000,
        navigation_timeout_ms: 2_000,
        page_timeout_ms: 2_000,
        ..HttpConfig::default()
    }
}

fn urlset(locs: &[String]) -> String {
    let entries: String = locs
        .iter()
        .map(|loc| format!("<url><loc>{}</loc></url>", loc))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{}</urlset>"#,
        entries
    )
}

#[tokio::test]
async fn test_sitemap_found_skips_other_strategies() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(urlset(&[
            format!("{}/", base_url),
            format!("{}/pricing", base_url),
            format!("{}/blog/launch", base_url),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Neither robots.txt nor the homepage may be touched
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let urls = crawl_site(&test_fetcher(), &test_http_config(), &base_url, 20).await;

    assert_eq!(
        urls,
        vec![format!("{}/", base_url), format!("{}/pricing", base_url)]
    );
}

#[tokio::test]
async fn test_robots_declared_sitemap_used_when_default_missing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "User-agent: *\nDisallow: /admin\nSitemap: {}/s.xml\n",
            base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/s.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(urlset(&[
            format!("{}/a", base_url),
            format!("{}/b", base_url),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The navigation fallback must not run
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher();
    let http = test_http_config();
    let discovery = Coordinator::new(&fetcher, &http).discover(&base_url).await;

    assert_eq!(discovery.strategy, Some(DiscoveryStrategy::RobotsSitemaps));
    assert_eq!(
        discovery.urls,
        vec![format!("{}/a", base_url), format!("{}/b", base_url)]
    );
}

#[tokio::test]
async fn test_navigation_fallback_filters_and_limits() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(
                    r#"<html><body>
                    <nav>
                      <a href="/news/today">News</a>
                      <a href="/features">Features</a>
                      <a href="/pricing">Pricing</a>
                      <a href="/features">Features again</a>
                      <a href="about">Relative</a>
                      <a href="/contact">Contact</a>
                    </nav>
                    <footer><a href="/terms">Terms</a></footer>
                    </body></html>"#,
                )
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let urls = crawl_site(&test_fetcher(), &test_http_config(), &base_url, 2).await;

    assert_eq!(
        urls,
        vec![
            format!("{}/features", base_url),
            format!("{}/pricing", base_url)
        ]
    );
}

#[tokio::test]
async fn test_sitemap_index_entries_not_expanded() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<sitemapindex>
              <sitemap><loc>{0}/sitemap-pages.xml</loc></sitemap>
              <sitemap><loc>{0}/sitemap-products.xml</loc></sitemap>
            </sitemapindex>"#,
            base_url
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap-pages.xml"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let urls = crawl_site(&test_fetcher(), &test_http_config(), &base_url, 20).await;

    assert_eq!(
        urls,
        vec![
            format!("{}/sitemap-pages.xml", base_url),
            format!("{}/sitemap-products.xml", base_url)
        ]
    );
}

#[tokio::test]
async fn test_unreachable_site_yields_empty() {
    // Nothing listens on port 1
    let urls = crawl_site(&test_fetcher(), &test_http_config(), "http://127.0.0.1:1", 20).await;

    assert!(urls.is_empty());
}

#[tokio::test]
async fn test_everything_missing_yields_empty() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // No mocks mounted: every path answers 404
    let urls = crawl_site(&test_fetcher(), &test_http_config(), &base_url, 20).await;

    assert!(urls.is_empty());
    let requests = mock_server.received_requests().await.unwrap_or_default();
    let paths: Vec<String> = requests.iter().map(|r| r.url.path().to_string()).collect();
    assert_eq!(paths, vec!["/sitemap.xml", "/robots.txt", "/"]);
}
