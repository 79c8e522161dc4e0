//! penh: turn raw prompts into structured, style-aware prompts via the Gemini API.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::path::Path;

use adapters::HttpGeminiClient;
use app::{AppContext, commands};
use domain::configuration::load_config;

pub use app::commands::render::RenderedView;
pub use app::{EnhancerSession, SessionState};
pub use domain::{
    ApiKey, AppError, EnhancedResult, EnhancementStyle, EnhancerConfig, ErrorCategory,
    GeminiApiConfig, OutputView, PromptSubmission, StructuredAnalysis,
};
pub use ports::{GenerationClient, GenerationResponse};

// =============================================================================
// Enhancement API
// =============================================================================

/// Enhance `prompt` using the default configuration.
///
/// Reads `~/.config/penh/config.toml` when present and takes the API key from
/// the configured environment variable (`GEMINI_API_KEY` by default).
/// Blank prompts are rejected with `Ok(None)` and make no request.
pub fn enhance(prompt: &str, style: EnhancementStyle) -> Result<Option<EnhancedResult>, AppError> {
    enhance_with_config(None, prompt, style)
}

/// Enhance `prompt` using the config file at `config_path` (or the default location).
pub fn enhance_with_config(
    config_path: Option<&Path>,
    prompt: &str,
    style: EnhancementStyle,
) -> Result<Option<EnhancedResult>, AppError> {
    let config = load_config(config_path)?;
    let api_key = ApiKey::from_env(&config.gemini.api_key_env);
    let client = HttpGeminiClient::new(&config.gemini)?;
    let ctx = AppContext::new(client, api_key, config.gemini.api_key_env.clone());
    enhance_with(&ctx, prompt, style)
}

/// Enhance `prompt` through an explicit context, e.g. one wrapping a custom client.
pub fn enhance_with<G: GenerationClient>(
    ctx: &AppContext<G>,
    prompt: &str,
    style: EnhancementStyle,
) -> Result<Option<EnhancedResult>, AppError> {
    match PromptSubmission::capture(prompt, style) {
        Some(submission) => commands::enhance::execute(ctx, &submission).map(Some),
        None => Ok(None),
    }
}

// =============================================================================
// Projection API
// =============================================================================

/// Render `views` of an existing result.
pub fn render(
    result: &EnhancedResult,
    views: &[OutputView],
) -> Result<Vec<RenderedView>, AppError> {
    commands::render::render_views(result, views)
}

/// Parse a saved JSON view and render `views` from it.
pub fn render_json(source: &str, views: &[OutputView]) -> Result<Vec<RenderedView>, AppError> {
    commands::render::execute(source, views)
}
