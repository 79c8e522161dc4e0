//! Enhancement request: one call to the generation service per submission.

use crate::app::AppContext;
use crate::domain::{AppError, EnhancedResult, GenerationRequest, PromptSubmission};
use crate::ports::GenerationClient;

/// Send `submission` to the generation service and parse the structured result.
///
/// The credential is checked before any call is made. The call is attempted
/// once; failures are logged and returned, never retried.
pub fn execute<G: GenerationClient>(
    ctx: &AppContext<G>,
    submission: &PromptSubmission,
) -> Result<EnhancedResult, AppError> {
    let api_key = ctx
        .api_key()
        .ok_or_else(|| AppError::MissingCredential { env_var: ctx.api_key_env().to_string() })?;

    let request = GenerationRequest::for_submission(submission);
    tracing::debug!(
        style = submission.style.label(),
        prompt_bytes = submission.prompt.len(),
        "requesting enhancement"
    );

    let result = ctx.client().generate(api_key, &request).and_then(|response| {
        let text = response.text.filter(|text| !text.trim().is_empty());
        let text = text.ok_or(AppError::EmptyResponse)?;
        EnhancedResult::from_json(&text)
    });

    if let Err(err) = &result {
        tracing::error!(error = %err, "Gemini API error");
    }
    result
}
