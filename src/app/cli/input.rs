use crate::domain::{AppError, EnhancementStyle};
use dialoguer::{Input, Select};
use std::io::{self, IsTerminal, Read};

/// Raw prompt text and whether it was entered interactively.
pub(super) struct RawPrompt {
    pub text: String,
    pub interactive: bool,
}

/// Resolve the raw prompt from arguments, piped stdin, or an interactive prompt.
pub(super) fn resolve_prompt(words: &[String]) -> Result<RawPrompt, AppError> {
    if !words.is_empty() {
        return Ok(RawPrompt { text: words.join(" "), interactive: false });
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut text = String::new();
        stdin.lock().read_to_string(&mut text)?;
        return Ok(RawPrompt { text, interactive: false });
    }

    let text: String = Input::new()
        .with_prompt("Raw prompt")
        .allow_empty(true)
        .interact_text()
        .map_err(|err| AppError::config_error(format!("Failed to read prompt: {}", err)))?;
    Ok(RawPrompt { text, interactive: true })
}

pub(super) fn select_style() -> Result<EnhancementStyle, AppError> {
    let items: Vec<&str> = EnhancementStyle::ALL.iter().map(|style| style.label()).collect();
    let selection = Select::new()
        .with_prompt("Enhancement style")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::config_error(format!("Failed to select style: {}", err)))?;

    Ok(selection.map(|index| EnhancementStyle::ALL[index]).unwrap_or_default())
}
