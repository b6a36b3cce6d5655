//! Integration tests for single-page and full-site audits

use seo_auditor::audit::{audit_site, audit_url, RedirectHop};
use seo_auditor::config::{HttpConfig, UserAgents};
use seo_auditor::crawler::ReqwestFetcher;
use seo_auditor::{FetchError, Intent};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<html><head>
<title>Widget Shop</title>
<meta name="description" content="Buy widgets">
</head><body>
<h1>Widgets</h1>
<p>Buy now and get a discount on every widget.</p>
<a href="/cart">Cart</a>
<img src="w.jpg" alt="A widget">
</body></html>"#;

fn test_fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new("TestBot/1.0").expect("Failed to build fetcher")
}

fn test_http_config() -> HttpConfig {
    HttpConfig {
        sitemap_timeout_ms: 2_000,
        robots_timeout_ms: 2_000,
        navigation_timeout_ms: 2_000,
        page_timeout_ms: 2_000,
        ..HttpConfig::default()
    }
}

fn redirect_to(location: &str) -> ResponseTemplate {
    ResponseTemplate::new(301).insert_header("Location", location)
}

#[tokio::test]
async fn test_audit_records_redirect_chain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let googlebot = UserAgents::default().resolve(Some("googlebot")).to_string();

    Mock::given(method("GET"))
        .and(path("/old"))
        .and(header("user-agent", googlebot.as_str()))
        .and(header("accept", "text/html"))
        .respond_with(redirect_to("/new"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/old", base_url);
    let report = audit_url(
        &test_fetcher(),
        &test_http_config(),
        &url,
        Some("widgets"),
        &googlebot,
    )
    .await
    .expect("Audit failed");

    assert_eq!(report.url, url);
    assert_eq!(
        report.redirect_chain,
        vec![
            RedirectHop {
                url: format!("{}/old", base_url),
                status: 301
            },
            RedirectHop {
                url: format!("{}/new", base_url),
                status: 200
            },
        ]
    );
    assert_eq!(report.audit.metadata.title.as_deref(), Some("Widget Shop"));
    assert_eq!(report.audit.headings.h1, 1);
    assert_eq!(report.audit.links.internal, 1);
    assert_eq!(report.audit.intent, Intent::Transactional);
    assert_eq!(report.audit.keyword.as_deref(), Some("widgets"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["redirectChain"][0]["status"], 301);
    assert_eq!(json["metadata"]["title"], "Widget Shop");
}

#[tokio::test]
async fn test_audit_without_redirect() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", base_url);
    let report = audit_url(&test_fetcher(), &test_http_config(), &url, None, "TestBot/1.0")
        .await
        .expect("Audit failed");

    assert_eq!(report.redirect_chain.len(), 1);
    assert_eq!(report.redirect_chain[0].status, 200);
    assert_eq!(report.audit.keyword, None);
    assert_eq!(report.audit.keyword_frequency, 0);
}

#[tokio::test]
async fn test_audit_error_status() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/gone", base_url);
    let err = audit_url(&test_fetcher(), &test_http_config(), &url, None, "TestBot/1.0")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "Request failed with status: 404");
}

#[tokio::test]
async fn test_audit_redirect_loop() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(redirect_to("/b"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(redirect_to("/a"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/a", base_url);
    let err = audit_url(&test_fetcher(), &test_http_config(), &url, None, "TestBot/1.0")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::RedirectLoop { .. }));
}

#[tokio::test]
async fn test_audit_redirect_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for i in 1..=4 {
        Mock::given(method("GET"))
            .and(path(format!("/r{}", i)))
            .respond_with(redirect_to(&format!("/r{}", i + 1)))
            .mount(&mock_server)
            .await;
    }

    let http = HttpConfig {
        max_redirects: 2,
        ..test_http_config()
    };
    let url = format!("{}/r1", base_url);
    let err = audit_url(&test_fetcher(), &http, &url, None, "TestBot/1.0")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::RedirectLimit { .. }));
}

#[tokio::test]
async fn test_full_audit_records_per_page_failures() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<urlset><url><loc>{0}/ok</loc></url><url><loc>{0}/broken</loc></url><url><loc>{0}/resources/x</loc></url></urlset>",
            base_url
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let report = audit_site(
        &test_fetcher(),
        &test_http_config(),
        &base_url,
        5,
        Some("widget"),
        "TestBot/1.0",
    )
    .await;

    assert_eq!(report.total_urls, 2);
    assert_eq!(report.audited_urls, 2);
    assert_eq!(report.success_count(), 1);

    let ok = report.results[0].result.as_ref().expect("First page should audit");
    assert_eq!(ok.metadata.title.as_deref(), Some("Widget Shop"));
    assert!(matches!(
        report.results[1].result,
        Err(FetchError::Status { status: 500, .. })
    ));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["homepage"], base_url);
    assert_eq!(json["totalUrls"], 2);
    assert_eq!(json["results"][0]["url"], format!("{}/ok", base_url));
    assert_eq!(json["results"][0]["audit"]["keyword"], "widget");
    assert_eq!(
        json["results"][1]["error"],
        "Request failed with status: 500"
    );
}

#[tokio::test]
async fn test_full_audit_respects_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let locs: String = (1..=8)
        .map(|i| format!("<url><loc>{}/p{}</loc></url>", base_url, i))
        .collect();
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(format!("<urlset>{}</urlset>", locs)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&mock_server)
        .await;

    let report = audit_site(
        &test_fetcher(),
        &test_http_config(),
        &base_url,
        3,
        None,
        "TestBot/1.0",
    )
    .await;

    assert_eq!(report.total_urls, 3);
    assert_eq!(report.success_count(), 3);
    let urls: Vec<&str> = report.results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/p1", base_url),
            format!("{}/p2", base_url),
            format!("{}/p3", base_url)
        ]
    );
}
