//! The analysis pipeline: build request, exchange once, parse.

use triage_core::LanguageDescriptor;

use crate::parser::{parse_reply, AnalysisFailure, AnalysisOutcome};
use crate::prompt::build_instruction;
use crate::protocol::gemini::GeminiRequest;
use crate::protocol::ImagePayload;
use crate::provider::VisionProvider;

/// Ties a provider to the request builder and parser. Holds no mutable
/// state; each call operates on its own request/response values. Callers
/// are expected to keep one logical analysis in flight at a time by
/// gating the triggering affordance until resolution.
pub struct Analyzer<P: VisionProvider> {
    provider: P,
}

impl<P: VisionProvider> Analyzer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Run one analysis cycle. Every code path terminates in a
    /// renderable report or an explicit failure value.
    pub async fn analyze(
        &self,
        image: &ImagePayload,
        target: &LanguageDescriptor,
    ) -> AnalysisOutcome {
        let request = GeminiRequest::analysis(build_instruction(target), image);

        match self.provider.generate(&request).await {
            Ok(body) => parse_reply(&body),
            Err(e) => {
                log::warn!("analysis exchange failed: {e}");
                AnalysisOutcome::Failed(AnalysisFailure::with_guidance(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{AnalysisError, Result};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedProvider {
        reply: Result<String>,
        requests: Mutex<Vec<GeminiRequest>>,
    }

    impl CannedProvider {
        fn new(reply: Result<String>) -> Self {
            Self {
                reply,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VisionProvider for CannedProvider {
        async fn generate(&self, request: &GeminiRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(body) => Ok(body.clone()),
                Err(AnalysisError::Api(msg)) => Err(AnalysisError::Api(msg.clone())),
                Err(AnalysisError::Auth(msg)) => Err(AnalysisError::Auth(msg.clone())),
                Err(e) => panic!("unsupported canned error {e:?}"),
            }
        }
    }

    fn jpeg() -> ImagePayload {
        ImagePayload::from_bytes(b"\xff\xd8\xff", "image/jpeg")
    }

    fn english() -> &'static LanguageDescriptor {
        LanguageDescriptor::find("en").unwrap()
    }

    #[tokio::test]
    async fn transport_error_becomes_failed_with_guidance() {
        let provider = CannedProvider::new(Err(AnalysisError::Api(
            "Gemini API error: HTTP 500".to_string(),
        )));
        let analyzer = Analyzer::new(provider);

        let outcome = analyzer.analyze(&jpeg(), english()).await;
        let failure = outcome.failure().expect("failed outcome");
        assert!(failure.message.contains("HTTP 500"));
        assert!(failure.message.contains("Verify your API key"));
    }

    #[tokio::test]
    async fn request_carries_instruction_and_image() {
        let body = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "{\"detectedText\":\"ok\"}"}]}}]
        })
        .to_string();
        let provider = CannedProvider::new(Ok(body));
        let analyzer = Analyzer::new(provider);

        let outcome = analyzer.analyze(&jpeg(), english()).await;
        assert_eq!(outcome.report().unwrap().detected_text, "ok");

        let requests = analyzer.provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let parts = &requests[0].contents[0].parts;
        assert!(parts[0].text.as_deref().unwrap().contains("crisis response"));
        assert_eq!(
            parts[1].inline_data.as_ref().unwrap().mime_type,
            "image/jpeg"
        );
    }
}
