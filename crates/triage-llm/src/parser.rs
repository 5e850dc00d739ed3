//! Tolerant reply parsing.
//!
//! Every reply ends in a renderable value: a strict decode when the
//! model honored the output contract, a synthesized best-effort report
//! when it returned prose, and an explicit failure only when the reply
//! carried no usable text at all. Nothing here panics or propagates a
//! decode error to the caller - partial information is more useful than
//! a hard failure in a crisis-response tool.

use triage_core::{AnalysisReport, UrgencyLevel};

use crate::protocol::gemini::GeminiResponse;

const DEGRADED_DETECTED_TEXT: &str = "Image analyzed";
const DEGRADED_LANGUAGE: &str = "Unknown";
const DEGRADED_CONTEXT: &str = "Analysis completed";
const DEGRADED_NOTES_PREFIX: &str = "Full response: ";
const EXCERPT_SHORT: usize = 200;
const EXCERPT_LONG: usize = 300;

const KEY_GUIDANCE: &str = "Verify your API key at https://aistudio.google.com/app/apikey";

/// Outcome of one analysis exchange. Callers and tests can distinguish
/// fully trusted results from best-effort ones instead of inferring it
/// from field contents.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Strict decode succeeded; the report is exactly what the model
    /// produced (plus the urgency default rule).
    Parsed(AnalysisReport),
    /// Reply text was present but not valid JSON; `report` is
    /// synthesized from the raw text, kept for diagnostics in `raw`.
    Degraded { report: AnalysisReport, raw: String },
    /// Transport failure, non-2xx status, or a reply with no usable
    /// text. No report fields are available.
    Failed(AnalysisFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisFailure {
    pub message: String,
}

impl AnalysisFailure {
    /// Wrap an upstream message with credential-verification guidance.
    pub fn with_guidance(message: impl std::fmt::Display) -> Self {
        Self {
            message: format!("{message}. {KEY_GUIDANCE}"),
        }
    }
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Parsed(report) | Self::Degraded { report, .. } => Some(report),
            Self::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&AnalysisFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Parse a raw reply body into an outcome. Always yields a value.
pub fn parse_reply(body: &str) -> AnalysisOutcome {
    let envelope: GeminiResponse = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            log::debug!("reply body is not a model envelope: {e}");
            return no_response();
        }
    };

    let text = match envelope.primary_text() {
        Some(text) if !text.trim().is_empty() => text,
        _ => return no_response(),
    };

    let stripped = strip_fences(text);
    match decode_report(&stripped) {
        Some(report) => AnalysisOutcome::Parsed(report),
        None => {
            log::debug!("reply text is not contract JSON; degrading");
            AnalysisOutcome::Degraded {
                report: degraded_report(&stripped),
                raw: stripped,
            }
        }
    }
}

fn no_response() -> AnalysisOutcome {
    AnalysisOutcome::Failed(AnalysisFailure::with_guidance(
        "No response from the model",
    ))
}

/// Remove markdown code-fence delimiters (```json-tagged and bare) and
/// surrounding whitespace.
fn strip_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn decode_report(text: &str) -> Option<AnalysisReport> {
    if let Ok(report) = serde_json::from_str(text) {
        return Some(report);
    }
    // Models habitually wrap the object in prose; retry on the outermost
    // brace span.
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start >= end {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

fn degraded_report(text: &str) -> AnalysisReport {
    AnalysisReport {
        detected_text: DEGRADED_DETECTED_TEXT.to_string(),
        detected_language: DEGRADED_LANGUAGE.to_string(),
        translation: excerpt(text, EXCERPT_SHORT),
        urgency_level: UrgencyLevel::Medium,
        medical_keywords: Vec::new(),
        predicted_conditions: Vec::new(),
        context: DEGRADED_CONTEXT.to_string(),
        suggested_response: excerpt(text, EXCERPT_SHORT),
        additional_notes: format!("{DEGRADED_NOTES_PREFIX}{}", excerpt(text, EXCERPT_LONG)),
    }
}

// Char-boundary safe; byte slicing would panic on multibyte input.
fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(text: &str) -> String {
        json!({
            "candidates": [
                {"content": {"parts": [{"text": text}], "role": "model"}}
            ]
        })
        .to_string()
    }

    #[test]
    fn contract_json_parses_strictly() {
        let text = r#"{"detectedText":"AYUDA","detectedLanguage":"Spanish","translation":"HELP","urgencyLevel":"high","medicalKeywords":["help"],"context":"sign","suggestedResponse":"on the way","additionalNotes":""}"#;
        let outcome = parse_reply(&envelope(text));

        let expected: AnalysisReport = serde_json::from_str(text).unwrap();
        assert_eq!(outcome, AnalysisOutcome::Parsed(expected));
    }

    #[test]
    fn fenced_json_with_prose_prefix_still_parses() {
        let text = "Here is the JSON: ```json\n{\"detectedText\":\"HELP\",\"urgencyLevel\":\"critical\"}\n```";
        let outcome = parse_reply(&envelope(text));

        let report = match outcome {
            AnalysisOutcome::Parsed(report) => report,
            other => panic!("expected Parsed, got {other:?}"),
        };
        assert_eq!(report.detected_text, "HELP");
        assert_eq!(report.urgency_level, UrgencyLevel::Critical);
        assert_eq!(report.translation, "");
        assert!(report.medical_keywords.is_empty());
    }

    #[test]
    fn bare_fences_are_stripped() {
        let text = "```\n{\"detectedText\":\"X\"}\n```";
        let outcome = parse_reply(&envelope(text));
        assert_eq!(outcome.report().unwrap().detected_text, "X");
        assert!(!outcome.is_degraded());
    }

    #[test]
    fn prose_reply_degrades_with_fixed_markers() {
        let outcome = parse_reply(&envelope("I cannot process this image."));

        assert!(outcome.is_degraded());
        let report = outcome.report().unwrap();
        assert_eq!(report.detected_text, "Image analyzed");
        assert_eq!(report.detected_language, "Unknown");
        assert_eq!(report.urgency_level, UrgencyLevel::Medium);
        assert_eq!(report.translation, "I cannot process this image.");
        assert_eq!(report.suggested_response, "I cannot process this image.");
        assert_eq!(report.context, "Analysis completed");
        assert!(report.medical_keywords.is_empty());
        assert!(report.predicted_conditions.is_empty());
        assert_eq!(
            report.additional_notes,
            "Full response: I cannot process this image."
        );
    }

    #[test]
    fn degraded_excerpts_are_truncated() {
        let long = "x".repeat(500);
        let outcome = parse_reply(&envelope(&long));

        let report = outcome.report().unwrap();
        assert_eq!(report.translation.chars().count(), 200);
        assert_eq!(report.suggested_response.chars().count(), 200);
        assert_eq!(
            report.additional_notes,
            format!("Full response: {}", "x".repeat(300))
        );
    }

    #[test]
    fn truncation_never_splits_multibyte_chars() {
        let long = "é".repeat(400);
        let outcome = parse_reply(&envelope(&long));

        let report = outcome.report().unwrap();
        assert_eq!(report.translation.chars().count(), 200);
        assert!(report.translation.chars().all(|c| c == 'é'));
    }

    #[test]
    fn empty_candidates_fail_with_no_response() {
        let outcome = parse_reply(r#"{"candidates": []}"#);
        let failure = outcome.failure().expect("failed outcome");
        assert!(failure.message.contains("No response from the model"));
        assert!(failure.message.contains("Verify your API key"));
    }

    #[test]
    fn whitespace_only_text_fails_with_no_response() {
        let outcome = parse_reply(&envelope("   \n  "));
        assert!(outcome.failure().is_some());
    }

    #[test]
    fn unparseable_body_fails_instead_of_panicking() {
        let outcome = parse_reply("not json at all");
        assert!(outcome.failure().is_some());
    }
}
