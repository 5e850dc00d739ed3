//! Emergency alert composition.
//!
//! Produces a single plain-text, transport-agnostic message for
//! escalation sinks (clipboard, mail prefill). The section order and
//! headers are fixed: every alert contains every section, with explicit
//! placeholders for empty values, so downstream recipients can rely on
//! the structure.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::report::{AnalysisReport, LocationFix};

const EMPTY_FIELD: &str = "N/A";
const NO_KEYWORDS: &str = "None";
const NO_LOCATION: &str = "Not available";

/// Fixed subject banner for mailto-style sinks.
pub fn alert_subject() -> &'static str {
    "EMERGENCY ALERT - Immediate response requested"
}

/// Compose the escalation message with an explicit timestamp.
pub fn compose_alert(
    report: &AnalysisReport,
    location: Option<&LocationFix>,
    composed_at: DateTime<Utc>,
) -> String {
    let detected_issue = if report.detected_text.is_empty() {
        EMPTY_FIELD.to_string()
    } else if report.detected_language.is_empty() {
        report.detected_text.clone()
    } else {
        format!("{} ({})", report.detected_text, report.detected_language)
    };

    let keywords = if report.medical_keywords.is_empty() {
        NO_KEYWORDS.to_string()
    } else {
        report.medical_keywords.join(", ")
    };

    let location_line = match location {
        Some(fix) => format!(
            "https://maps.google.com/?q={},{}",
            fix.latitude, fix.longitude
        ),
        None => NO_LOCATION.to_string(),
    };

    format!(
        "*** EMERGENCY ALERT *** Urgency: {}\n\
         Detected issue: {}\n\
         Translation: {}\n\
         Medical keywords: {}\n\
         Context: {}\n\
         Suggested response: {}\n\
         Location: {}\n\
         Time: {}\n\
         Notes: {}",
        report.urgency_level.as_str().to_uppercase(),
        detected_issue,
        or_placeholder(&report.translation),
        keywords,
        or_placeholder(&report.context),
        or_placeholder(&report.suggested_response),
        location_line,
        composed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        or_placeholder(&report.additional_notes),
    )
}

/// Compose the escalation message stamped with the current time.
pub fn compose_alert_now(report: &AnalysisReport, location: Option<&LocationFix>) -> String {
    compose_alert(report, location, Utc::now())
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_FIELD
    } else {
        value
    }
}
