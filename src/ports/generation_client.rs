//! Generation service port definition.

use crate::domain::{ApiKey, AppError, GenerationRequest};

/// Raw answer from the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationResponse {
    /// Text payload, absent when the service produced no candidate text.
    pub text: Option<String>,
}

impl GenerationResponse {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }
}

/// Port for the external generation service.
///
/// Implementations perform exactly one call per invocation.
pub trait GenerationClient {
    fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, AppError>;
}

impl<T: GenerationClient + ?Sized> GenerationClient for Box<T> {
    fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, AppError> {
        (**self).generate(api_key, request)
    }
}
