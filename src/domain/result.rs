//! Structured result returned by the generation service.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Role/task/context breakdown of an enhanced prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredAnalysis {
    pub role: String,
    pub task: String,
    pub context: String,
    pub instructions: Vec<String>,
    pub constraints: Vec<String>,
    pub output_format: String,
}

/// Top-level unit produced by a successful enhancement request.
///
/// Field order matches the wire order, so serializing keeps keys stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedResult {
    pub enhanced_prompt: String,
    pub minimal_version: String,
    pub structured_analysis: StructuredAnalysis,
}

impl EnhancedResult {
    /// Parse a JSON document that must carry every field of the response schema.
    pub fn from_json(text: &str) -> Result<Self, AppError> {
        serde_json::from_str(text).map_err(|e| AppError::MalformedResponse(e.to_string()))
    }
}
