//! Google Gemini provider implementation.

use async_trait::async_trait;
use reqwest::Client;

use crate::protocol::gemini::{GeminiErrorResponse, GeminiRequest};
use crate::provider::{AnalysisError, Result, VisionProvider};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-flash-latest";

/// Google Gemini API provider. One `generate` call is exactly one
/// request/response exchange; there is no retry and no streaming.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set a custom base URL (e.g., for proxies or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model name (e.g., "gemini-flash-latest").
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl VisionProvider for GeminiProvider {
    async fn generate(&self, request: &GeminiRequest) -> Result<String> {
        // Query-param authentication, per the Gemini API.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        log::debug!("Gemini request to model '{}'", self.model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(AnalysisError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("API Error: {status}"));

            if status == 401 || status == 403 {
                return Err(AnalysisError::Auth(format!(
                    "Gemini authentication failed: {message}. Please check your API key."
                )));
            }

            return Err(AnalysisError::Api(format!(
                "Gemini API error: HTTP {status}: {message}"
            )));
        }

        log::debug!("Gemini reply received");
        response.text().await.map_err(AnalysisError::Http)
    }
}
