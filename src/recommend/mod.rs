//! Natural-language recommendations from a generative language model
//!
//! Audit JSON is embedded in a prompt and sent to the Gemini
//! `generateContent` REST endpoint; the first candidate's text is returned.

use crate::config::RecommendConfig;
use crate::RecommendError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Builds the prompt sent to the model for an audit
///
/// # Example
///
/// ```
/// use seo_auditor::recommend::build_prompt;
///
/// let prompt = build_prompt(&serde_json::json!({"wordCount": 12}));
/// assert!(prompt.contains("\"wordCount\": 12"));
/// ```
pub fn build_prompt(audit: &Value) -> String {
    let pretty = serde_json::to_string_pretty(audit).unwrap_or_else(|_| audit.to_string());

    format!(
        "You are an SEO expert. Here is an SEO audit in JSON:\n{}\n\n\
         Give me 5 key SEO recommendations (clear, actionable, non-generic).",
        pretty
    )
}

/// Client for the Gemini `generateContent` endpoint
///
/// The key travels in a header, never in the URL, so transport errors and
/// logs cannot echo it.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GeminiClient {
    /// Creates a client with an explicit API key
    ///
    /// # Returns
    ///
    /// * `Ok(GeminiClient)` - Ready to send prompts
    /// * `Err(RecommendError)` - The key is empty or the HTTP client could not be built
    pub fn new(config: &RecommendConfig, api_key: &str) -> Result<Self, RecommendError> {
        if api_key.trim().is_empty() {
            return Err(RecommendError::MissingApiKey);
        }

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.to_string(),
        })
    }

    /// Creates a client using `GEMINI_API_KEY`, falling back to the configured key
    pub fn from_config(config: &RecommendConfig) -> Result<Self, RecommendError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| config.api_key.clone())
            .ok_or(RecommendError::MissingApiKey)?;

        Self::new(config, &api_key)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Asks the model for recommendations on an audit
    ///
    /// # Arguments
    ///
    /// * `audit` - Any audit JSON (a page report, a site report, or a bare result)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The model's text
    /// * `Err(RecommendError)` - Transport failure, a non-2xx status, or a
    ///   response without candidate text
    pub async fn recommend(&self, audit: &Value) -> Result<String, RecommendError> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = json!({
            "contents": [{
                "parts": [{ "text": build_prompt(audit) }]
            }]
        });

        tracing::debug!("Requesting recommendations from {}", self.model);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| RecommendError::Http(e.without_url()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RecommendError::Http(e.without_url()))?;

        if !status.is_success() {
            return Err(RecommendError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: Value = serde_json::from_str(&text)
            .map_err(|e| RecommendError::MalformedResponse(e.to_string()))?;

        parsed["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                RecommendError::MalformedResponse("no candidate text in response".to_string())
            })
    }
}
