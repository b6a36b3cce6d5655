//! Request handlers for the `/api` routes

use crate::audit::{audit_site, audit_url, PageReport, SiteAuditReport, DEFAULT_FULL_AUDIT_LIMIT};
use crate::crawler::{crawl_site, DEFAULT_CRAWL_LIMIT};
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::RecommendError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CrawlParams {
    homepage: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CrawlResponse {
    pub homepage: String,
    pub count: usize,
    pub urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuditParams {
    url: Option<String>,
    keyword: Option<String>,
    #[serde(rename = "user-agent")]
    user_agent: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FullAuditParams {
    homepage: Option<String>,
    limit: Option<String>,
    keyword: Option<String>,
    #[serde(rename = "user-agent")]
    user_agent: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: String,
}

/// Treats an empty query value the same as an absent one
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses the `limit` query parameter
fn parse_limit(raw: Option<&str>, default: usize) -> Result<usize, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(s) => match s.parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(limit),
            _ => Err(ApiError::BadRequest(format!(
                "Invalid 'limit' parameter: {}",
                s
            ))),
        },
    }
}

/// `GET /api/crawl?homepage=&limit=`
pub async fn crawl_handler(
    State(state): State<AppState>,
    Query(params): Query<CrawlParams>,
) -> Result<Json<CrawlResponse>, ApiError> {
    let homepage = present(params.homepage)
        .ok_or_else(|| ApiError::BadRequest("Homepage URL is required".to_string()))?;
    let limit = parse_limit(params.limit.as_deref(), DEFAULT_CRAWL_LIMIT)?;

    let urls = crawl_site(state.fetcher.as_ref(), &state.config.http, &homepage, limit).await;

    Ok(Json(CrawlResponse {
        homepage,
        count: urls.len(),
        urls,
    }))
}

/// `GET /api/audit?url=&keyword=&user-agent=`
pub async fn audit_handler(
    State(state): State<AppState>,
    Query(params): Query<AuditParams>,
) -> Result<Json<PageReport>, ApiError> {
    let url = present(params.url)
        .ok_or_else(|| ApiError::BadRequest("Missing 'url' parameter".to_string()))?;
    let keyword = present(params.keyword);
    let user_agent = state.user_agents.resolve(params.user_agent.as_deref());

    let report = audit_url(
        state.fetcher.as_ref(),
        &state.config.http,
        &url,
        keyword.as_deref(),
        user_agent,
    )
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(report))
}

/// `GET /api/full-audit?homepage=&limit=&keyword=&user-agent=`
pub async fn full_audit_handler(
    State(state): State<AppState>,
    Query(params): Query<FullAuditParams>,
) -> Result<Json<SiteAuditReport>, ApiError> {
    let homepage = present(params.homepage)
        .ok_or_else(|| ApiError::BadRequest("Homepage parameter is required".to_string()))?;
    let limit = parse_limit(params.limit.as_deref(), DEFAULT_FULL_AUDIT_LIMIT)?;
    let keyword = present(params.keyword);
    let user_agent = state.user_agents.resolve(params.user_agent.as_deref());

    let report = audit_site(
        state.fetcher.as_ref(),
        &state.config.http,
        &homepage,
        limit,
        keyword.as_deref(),
        user_agent,
    )
    .await;

    Ok(Json(report))
}

/// `POST /api/recommend` with body `{"auditData": ...}`
///
/// An unparseable body is answered with the usual `{"error": ...}` shape.
pub async fn recommend_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let Json(body) =
        payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let audit = match body.get("auditData") {
        Some(Value::Null) | None => {
            return Err(ApiError::BadRequest(
                "Missing auditData in request body".to_string(),
            ))
        }
        Some(audit) => audit,
    };

    let recommender = state
        .recommender
        .as_ref()
        .ok_or_else(|| ApiError::Unavailable(RecommendError::MissingApiKey.to_string()))?;

    let recommendations = recommender
        .recommend(audit)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(RecommendResponse { recommendations }))
}
