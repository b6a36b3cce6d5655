//! HTTP API server
//!
//! Exposes crawl, audit, full-audit and recommendation endpoints under
//! `/api`. Every error response is JSON of the form `{"error": "..."}`.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{CrawlResponse, RecommendResponse};

use crate::config::{Config, UserAgents};
use crate::crawler::{HttpFetcher, ReqwestFetcher};
use crate::recommend::GeminiClient;
use crate::{FetchError, RecommendError};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: Arc<dyn HttpFetcher>,
    /// None when no API key is configured; `/api/recommend` then answers 503
    pub recommender: Option<Arc<GeminiClient>>,
    pub user_agents: Arc<UserAgents>,
}

impl AppState {
    /// Builds the state from configuration, with a reqwest-backed fetcher
    ///
    /// A missing Gemini API key only disables recommendations.
    pub fn from_config(config: Config) -> Result<Self, FetchError> {
        let user_agents = config.user_agents();
        let fetcher = ReqwestFetcher::new(user_agents.resolve(None))?;

        let recommender = match GeminiClient::from_config(&config.recommend) {
            Ok(client) => Some(Arc::new(client)),
            Err(RecommendError::MissingApiKey) => {
                tracing::warn!("No Gemini API key configured, /api/recommend is disabled");
                None
            }
            Err(e) => {
                tracing::warn!("Recommendations disabled: {}", e);
                None
            }
        };

        Ok(Self {
            config: Arc::new(config),
            fetcher: Arc::new(fetcher),
            recommender,
            user_agents: Arc::new(user_agents),
        })
    }
}

/// Builds the API router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/crawl", get(handlers::crawl_handler))
        .route("/api/audit", get(handlers::audit_handler))
        .route("/api/full-audit", get(handlers::full_audit_handler))
        .route("/api/recommend", post(handlers::recommend_handler))
        .with_state(state)
}

/// Binds to the configured address and serves the API until the process exits
pub async fn serve(config: Config) -> crate::Result<()> {
    let bind = config.server.bind.clone();
    let state = AppState::from_config(config)?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
