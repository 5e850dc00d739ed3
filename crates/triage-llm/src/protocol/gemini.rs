//! Gemini `generateContent` wire format.
//!
//! The request carries an instruction part and an inline image part:
//!
//! ```json
//! {
//!   "contents": [{
//!     "parts": [
//!       {"text": "..."},
//!       {"inlineData": {"mimeType": "image/jpeg", "data": "<base64>"}}
//!     ]
//!   }]
//! }
//! ```
//!
//! The success reply exposes the generated text at
//! `candidates[0].content.parts[0].text`; failures carry an
//! `{"error": {"message": ...}}` envelope alongside a non-2xx status.

use serde::{Deserialize, Serialize};

use crate::protocol::ImagePayload;

/// Gemini request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiInlineData {
    pub mime_type: String,
    pub data: String,
}

impl GeminiRequest {
    /// A single-turn request: one instruction part, one image part.
    pub fn analysis(instruction: String, image: &ImagePayload) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: None,
                parts: vec![
                    GeminiPart {
                        text: Some(instruction),
                        inline_data: None,
                    },
                    GeminiPart {
                        text: None,
                        inline_data: Some(GeminiInlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.data.clone(),
                        }),
                    },
                ],
            }],
        }
    }
}

/// Gemini success envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: GeminiContent,
}

impl GeminiResponse {
    /// The model's primary text content, when present.
    pub fn primary_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// Gemini failure envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorDetail {
    #[serde(default)]
    pub message: String,
}
