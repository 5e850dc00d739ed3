//! Wire types for the remote model exchange.

pub mod gemini;

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

/// A transmittable image: MIME type plus base64 payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    /// Encode raw image bytes for transmission.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Split a `data:<mime>;base64,<payload>` URL into a payload.
    /// Input without a data-URL prefix is assumed to already be base64
    /// JPEG data.
    pub fn from_data_url(url: &str) -> Self {
        if let Some((header, data)) = url.split_once(',') {
            let mime_type = header
                .strip_prefix("data:")
                .and_then(|h| h.split(';').next())
                .filter(|m| !m.is_empty())
                .unwrap_or("image/jpeg");
            return Self {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            };
        }
        Self {
            mime_type: "image/jpeg".to_string(),
            data: url.to_string(),
        }
    }

    /// MIME type for a supported image file extension.
    pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some("image/jpeg"),
            "png" => Some("image/png"),
            "gif" => Some("image/gif"),
            "bmp" => Some("image/bmp"),
            "webp" => Some("image/webp"),
            _ => None,
        }
    }
}
