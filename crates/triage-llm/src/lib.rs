pub mod parser;
pub mod pipeline;
pub mod prompt;
pub mod protocol;
pub mod provider;
pub mod providers;

pub use parser::{parse_reply, AnalysisFailure, AnalysisOutcome};
pub use pipeline::Analyzer;
pub use prompt::build_instruction;
pub use protocol::gemini::{GeminiRequest, GeminiResponse};
pub use protocol::ImagePayload;
pub use provider::{AnalysisError, VisionProvider};
pub use providers::GeminiProvider;
