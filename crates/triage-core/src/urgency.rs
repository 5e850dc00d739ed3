//! Urgency classification.
//!
//! The model reports urgency as a free-text string. Classification is
//! deliberately cautious: anything we do not recognize resolves to
//! `Medium`, never `Low`, so an unreadable reply is still treated as
//! potentially serious.

use serde::{Deserialize, Deserializer, Serialize};

/// Ranked severity attached to an analysis. `Critical` is the sole
/// escalation trigger in the surrounding system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    /// Classify a raw urgency value. Unknown, empty, or missing input
    /// resolves to `Medium`.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("low") => Self::Low,
            Some("medium") => Self::Medium,
            Some("high") => Self::High,
            Some("critical") => Self::Critical,
            _ => Self::Medium,
        }
    }

    /// Canonical lowercase name, matching the wire vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Presentation tier, 0 (low) through 3 (critical).
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl Default for UrgencyLevel {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Tolerant on the wire: a missing key hits `#[serde(default)]` on the
// containing struct; a present-but-unrecognized value lands here and is
// classified instead of rejected.
impl<'de> Deserialize<'de> for UrgencyLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::classify(raw.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_values_classify_exactly() {
        assert_eq!(UrgencyLevel::classify(Some("low")), UrgencyLevel::Low);
        assert_eq!(UrgencyLevel::classify(Some("medium")), UrgencyLevel::Medium);
        assert_eq!(UrgencyLevel::classify(Some("high")), UrgencyLevel::High);
        assert_eq!(
            UrgencyLevel::classify(Some("critical")),
            UrgencyLevel::Critical
        );
    }

    #[test]
    fn classification_is_case_insensitive_and_trims() {
        assert_eq!(
            UrgencyLevel::classify(Some("CRITICAL")),
            UrgencyLevel::Critical
        );
        assert_eq!(UrgencyLevel::classify(Some("  High ")), UrgencyLevel::High);
    }

    #[test]
    fn unknown_empty_and_missing_default_to_medium() {
        assert_eq!(UrgencyLevel::classify(None), UrgencyLevel::Medium);
        assert_eq!(UrgencyLevel::classify(Some("")), UrgencyLevel::Medium);
        assert_eq!(UrgencyLevel::classify(Some("bogus")), UrgencyLevel::Medium);
    }

    #[test]
    fn levels_are_ranked() {
        assert!(UrgencyLevel::Low < UrgencyLevel::Medium);
        assert!(UrgencyLevel::Medium < UrgencyLevel::High);
        assert!(UrgencyLevel::High < UrgencyLevel::Critical);
        assert_eq!(UrgencyLevel::Critical.rank(), 3);
    }

    #[test]
    fn only_critical_escalates() {
        assert!(UrgencyLevel::Critical.is_critical());
        assert!(!UrgencyLevel::High.is_critical());
    }

    #[test]
    fn deserializes_invalid_value_as_medium() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default)]
            level: UrgencyLevel,
        }

        let w: Wrapper = serde_json::from_str(r#"{"level":"severe"}"#).unwrap();
        assert_eq!(w.level, UrgencyLevel::Medium);

        let w: Wrapper = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(w.level, UrgencyLevel::Medium);

        let w: Wrapper = serde_json::from_str(r#"{"level":null}"#).unwrap();
        assert_eq!(w.level, UrgencyLevel::Medium);
    }
}
