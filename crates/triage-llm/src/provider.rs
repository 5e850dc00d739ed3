use async_trait::async_trait;
use thiserror::Error;

use crate::protocol::gemini::GeminiRequest;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(#[from] triage_core::ConfigError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// The single-exchange seam to the remote vision model.
///
/// One invocation performs exactly one outbound request and returns the
/// raw reply body unmodified; parsing is the caller's concern. No retry,
/// no caching, no streaming.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    async fn generate(&self, request: &GeminiRequest) -> Result<String>;
}
