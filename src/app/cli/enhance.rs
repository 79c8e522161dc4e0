use super::{EnhanceArgs, input, output};
use crate::adapters::HttpGeminiClient;
use crate::app::commands::render::render_views;
use crate::app::{AppContext, EnhancerSession};
use crate::domain::configuration::load_config;
use crate::domain::{ApiKey, AppError};

pub(super) fn run_enhance(args: EnhanceArgs) -> Result<(), AppError> {
    let config = load_config(args.config.as_deref())?;

    let raw = input::resolve_prompt(&args.prompt)?;
    if raw.text.trim().is_empty() {
        eprintln!("Prompt is empty; nothing to enhance.");
        return Ok(());
    }

    let style = match args.style {
        Some(style) => style,
        None if raw.interactive => input::select_style()?,
        None => Default::default(),
    };

    let api_key_env = config.gemini.api_key_env.clone();
    let api_key = ApiKey::from_env(&api_key_env);
    let client = HttpGeminiClient::new(&config.gemini)?;
    let ctx = AppContext::new(client, api_key, api_key_env);

    let mut session = EnhancerSession::new();
    if let Some(result) = session.submit(&ctx, &raw.text, style)? {
        let rendered = render_views(result, &args.views.selected())?;
        output::print_views(&rendered);
    }
    Ok(())
}
