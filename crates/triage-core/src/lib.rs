pub mod alert;
pub mod config;
pub mod language;
pub mod localization;
pub mod report;
pub mod urgency;

pub use alert::{alert_subject, compose_alert, compose_alert_now};
pub use config::{Config, ConfigError};
pub use language::{LanguageDescriptor, SUPPORTED_LANGUAGES};
pub use localization::{LabelCatalog, LabelSet};
pub use report::{AnalysisReport, LocationFix, PredictedCondition, ProbabilityLevel};
pub use urgency::UrgencyLevel;
