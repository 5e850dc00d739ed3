//! Analysis report data model.
//!
//! `AnalysisReport` mirrors the JSON object the model is instructed to
//! produce. Field names are camelCase on the wire; every field tolerates
//! absence so a sparse-but-valid reply still decodes.

use serde::{Deserialize, Deserializer, Serialize};

use crate::urgency::UrgencyLevel;

/// One structured analysis of a submitted image. Immutable once
/// constructed; owned by the caller for the lifetime of one analysis
/// cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisReport {
    /// Verbatim text found in the image, in its original language.
    pub detected_text: String,
    /// Human-readable name of the detected source language.
    pub detected_language: String,
    /// Rendering of the detected content in the requested target
    /// language, in plain non-technical wording.
    pub translation: String,
    pub urgency_level: UrgencyLevel,
    /// Salient terms, ordered as received; duplicates permitted.
    pub medical_keywords: Vec<String>,
    pub predicted_conditions: Vec<PredictedCondition>,
    pub context: String,
    pub suggested_response: String,
    pub additional_notes: String,
}

/// A speculative assessment the model attaches to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictedCondition {
    pub condition: String,
    pub probability: ProbabilityLevel,
    pub reasoning: String,
}

impl Default for PredictedCondition {
    fn default() -> Self {
        Self {
            condition: String::new(),
            probability: ProbabilityLevel::Medium,
            reasoning: String::new(),
        }
    }
}

/// Confidence attached to a predicted condition. Unrecognized input
/// resolves to `Medium`, matching the urgency rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbabilityLevel {
    Low,
    Medium,
    High,
}

impl ProbabilityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl<'de> Deserialize<'de> for ProbabilityLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(
            match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
                Some("low") => Self::Low,
                Some("high") => Self::High,
                _ => Self::Medium,
            },
        )
    }
}

/// A single geolocation reading, acquired at most once per session by an
/// external collaborator and consumed opaquely at alert-composition time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
}
