//! Integration tests for the HTTP API
//!
//! The router is driven with `tower::ServiceExt::oneshot`; upstream sites and
//! the language model are wiremock servers.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use seo_auditor::config::{Config, HttpConfig, RecommendConfig, UserAgents};
use seo_auditor::crawler::ReqwestFetcher;
use seo_auditor::recommend::GeminiClient;
use seo_auditor::server::{create_app, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_state(recommender: Option<GeminiClient>) -> AppState {
    let config = Config {
        http: HttpConfig {
            sitemap_timeout_ms: 2_000,
            robots_timeout_ms: 2_000,
            navigation_timeout_ms: 2_000,
            page_timeout_ms: 2_000,
            ..HttpConfig::default()
        },
        ..Config::default()
    };
    let user_agents = config.user_agents();

    AppState {
        fetcher: Arc::new(ReqwestFetcher::new(user_agents.resolve(None)).unwrap()),
        user_agents: Arc::new(user_agents),
        config: Arc::new(config),
        recommender: recommender.map(Arc::new),
    }
}

fn test_app() -> Router {
    create_app(test_state(None))
}

fn query(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", content_type)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_crawl_requires_homepage() {
    let (status, body) = get(test_app(), "/api/crawl").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Homepage URL is required"}));
}

#[tokio::test]
async fn test_crawl_rejects_non_numeric_limit() {
    let uri = format!(
        "/api/crawl?{}",
        query(&[("homepage", "https://x.com"), ("limit", "lots")])
    );
    let (status, body) = get(test_app(), &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn test_crawl_returns_urls() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<urlset><url><loc>{0}/a</loc></url><url><loc>{0}/b</loc></url><url><loc>{0}/c</loc></url></urlset>",
            base_url
        )))
        .mount(&mock_server)
        .await;

    let uri = format!(
        "/api/crawl?{}",
        query(&[("homepage", base_url.as_str()), ("limit", "2")])
    );
    let (status, body) = get(test_app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "homepage": base_url,
            "count": 2,
            "urls": [format!("{}/a", base_url), format!("{}/b", base_url)]
        })
    );
}

#[tokio::test]
async fn test_audit_requires_url() {
    let (status, body) = get(test_app(), "/api/audit?keyword=seo").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing 'url' parameter"}));
}

#[tokio::test]
async fn test_audit_returns_report() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let googlebot = UserAgents::default().resolve(Some("googlebot")).to_string();

    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("user-agent", googlebot.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<title>SEO Guide</title><h1>Intro</h1><img src="a.jpg">"#,
        ))
        .mount(&mock_server)
        .await;

    let url = format!("{}/page", base_url);
    let uri = format!(
        "/api/audit?{}",
        query(&[("url", url.as_str()), ("keyword", "seo"), ("user-agent", "googlebot")])
    );
    let (status, body) = get(test_app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], url);
    assert_eq!(body["redirectChain"], json!([{"url": url, "status": 200}]));
    assert_eq!(body["metadata"]["title"], "SEO Guide");
    assert_eq!(body["headings"]["h1"], 1);
    assert_eq!(body["images"]["missingAlt"], 1);
    assert_eq!(body["keyword"], "seo");
}

#[tokio::test]
async fn test_audit_upstream_error_is_500() {
    let mock_server = MockServer::start().await;
    let url = format!("{}/missing", mock_server.uri());

    let uri = format!("/api/audit?{}", query(&[("url", url.as_str())]));
    let (status, body) = get(test_app(), &uri).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Request failed with status: 404"}));
}

#[tokio::test]
async fn test_full_audit_requires_homepage() {
    let (status, body) = get(test_app(), "/api/full-audit?limit=3").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Homepage parameter is required"}));
}

#[tokio::test]
async fn test_full_audit_report() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<urlset><url><loc>{0}/home</loc></url><url><loc>{0}/down</loc></url></urlset>",
            base_url
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Home</h1>"))
        .mount(&mock_server)
        .await;

    let uri = format!("/api/full-audit?{}", query(&[("homepage", base_url.as_str())]));
    let (status, body) = get(test_app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalUrls"], 2);
    assert_eq!(body["auditedUrls"], 2);
    assert_eq!(body["results"][0]["audit"]["headings"]["h1"], 1);
    assert_eq!(
        body["results"][1]["error"],
        "Request failed with status: 404"
    );
}

#[tokio::test]
async fn test_recommend_requires_audit_data() {
    let (status, body) = post_json(test_app(), "/api/recommend", json!({"other": 1})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing auditData in request body"}));
}

#[tokio::test]
async fn test_recommend_malformed_body_is_json_400() {
    let (status, body) =
        post_raw(test_app(), "/api/recommend", "application/json", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_recommend_wrong_content_type_is_json_error() {
    let (status, body) = post_raw(
        test_app(),
        "/api/recommend",
        "text/plain",
        r#"{"auditData": {}}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_recommend_failure_does_not_echo_key() {
    let recommend = RecommendConfig {
        model: "gemini-test".to_string(),
        // Nothing listens on port 1
        endpoint: "http://127.0.0.1:1".to_string(),
        api_key: None,
    };
    let client = GeminiClient::new(&recommend, "SUPERSECRETKEY").unwrap();
    let app = create_app(test_state(Some(client)));

    let (status, body) = post_json(app, "/api/recommend", json!({"auditData": {}})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("SUPERSECRETKEY"));
}

#[tokio::test]
async fn test_recommend_without_key_is_unavailable() {
    let (status, body) = post_json(
        test_app(),
        "/api/recommend",
        json!({"auditData": {"wordCount": 10}}),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn test_recommend_returns_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"candidates":[{"content":{"parts":[{"text":"Write a meta description."}]}}]}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let recommend = RecommendConfig {
        model: "gemini-test".to_string(),
        endpoint: mock_server.uri(),
        api_key: None,
    };
    let client = GeminiClient::new(&recommend, "test-key").unwrap();
    let app = create_app(test_state(Some(client)));

    let (status, body) = post_json(
        app,
        "/api/recommend",
        json!({"auditData": {"metadata": {"description": null}}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"recommendations": "Write a meta description."}));
}

#[tokio::test]
async fn test_recommend_upstream_failure_is_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let recommend = RecommendConfig {
        model: "gemini-test".to_string(),
        endpoint: mock_server.uri(),
        api_key: None,
    };
    let client = GeminiClient::new(&recommend, "test-key").unwrap();
    let app = create_app(test_state(Some(client)));

    let (status, body) = post_json(app, "/api/recommend", json!({"auditData": {}})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
