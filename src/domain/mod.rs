pub mod configuration;
pub mod error;
pub mod projection;
pub mod request;
pub mod result;
pub mod style;
pub mod submission;

pub use configuration::{ApiKey, EnhancerConfig, GeminiApiConfig};
pub use error::{AppError, ErrorCategory};
pub use projection::{API_CALL_MODEL, ApiCallPayload, ChatMessage, OutputView};
pub use request::{GenerationRequest, SYSTEM_INSTRUCTION};
pub use result::{EnhancedResult, StructuredAnalysis};
pub use style::EnhancementStyle;
pub use submission::{PromptSubmission, submit};
