//! Output projections of an [`EnhancedResult`].
//!
//! Every view is derived from the result alone; rendering has no side effects
//! and can be repeated any number of times.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::{AppError, EnhancedResult};

/// Model id used by the exported chat-completion payload.
pub const API_CALL_MODEL: &str = "gpt-4o";

const MARKDOWN_TEMPLATE_NAME: &str = "enhanced_prompt.md";

const MARKDOWN_TEMPLATE: &str = "
# Enhanced Prompt

{{ enhanced_prompt }}

---

## Structured Analysis
**Role:** {{ role }}
**Task:** {{ task }}

### Instructions
{% for item in instructions %}- {{ item }}
{% endfor %}
### Constraints
{% for item in constraints %}- {{ item }}
{% endfor %}
";

/// The export formats available for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputView {
    Main,
    Minimal,
    Json,
    ApiCall,
    Markdown,
}

impl OutputView {
    /// All views in tab order.
    pub const ALL: [OutputView; 5] = [
        OutputView::Main,
        OutputView::Minimal,
        OutputView::Json,
        OutputView::ApiCall,
        OutputView::Markdown,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            OutputView::Main => "main",
            OutputView::Minimal => "minimal",
            OutputView::Json => "json",
            OutputView::ApiCall => "api",
            OutputView::Markdown => "markdown",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            OutputView::Main => "Main",
            OutputView::Minimal => "Minimal",
            OutputView::Json => "JSON",
            OutputView::ApiCall => "OpenAI API",
            OutputView::Markdown => "Markdown",
        }
    }

    pub fn from_name(name: &str) -> Option<OutputView> {
        match name.trim().to_lowercase().as_str() {
            "main" | "enhanced" => Some(OutputView::Main),
            "minimal" => Some(OutputView::Minimal),
            "json" => Some(OutputView::Json),
            "api" | "api-call" | "openai" => Some(OutputView::ApiCall),
            "markdown" | "md" => Some(OutputView::Markdown),
            _ => None,
        }
    }

    /// Render this view of `result`.
    pub fn render(&self, result: &EnhancedResult) -> Result<String, AppError> {
        match self {
            OutputView::Main => Ok(main_view(result).to_string()),
            OutputView::Minimal => Ok(minimal_view(result).to_string()),
            OutputView::Json => json_view(result),
            OutputView::ApiCall => api_call_view(result),
            OutputView::Markdown => markdown_view(result),
        }
    }
}

impl fmt::Display for OutputView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutputView {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| AppError::InvalidView(s.to_string()))
    }
}

/// Chat-completion request wrapping the enhanced prompt as the only user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiCallPayload<'a> {
    pub model: &'static str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ApiCallPayload<'a> {
    pub fn for_result(result: &'a EnhancedResult) -> Self {
        Self {
            model: API_CALL_MODEL,
            messages: vec![ChatMessage { role: "user", content: &result.enhanced_prompt }],
        }
    }
}

pub fn main_view(result: &EnhancedResult) -> &str {
    &result.enhanced_prompt
}

pub fn minimal_view(result: &EnhancedResult) -> &str {
    &result.minimal_version
}

/// Full result as two-space indented JSON.
pub fn json_view(result: &EnhancedResult) -> Result<String, AppError> {
    to_pretty_json(result)
}

pub fn api_call_view(result: &EnhancedResult) -> Result<String, AppError> {
    to_pretty_json(&ApiCallPayload::for_result(result))
}

pub fn markdown_view(result: &EnhancedResult) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    let analysis = &result.structured_analysis;
    let rendered = env
        .template_from_named_str(MARKDOWN_TEMPLATE_NAME, MARKDOWN_TEMPLATE)
        .and_then(|template| {
            template.render(context! {
                enhanced_prompt => &result.enhanced_prompt,
                role => &analysis.role,
                task => &analysis.task,
                instructions => &analysis.instructions,
                constraints => &analysis.constraints,
            })
        })
        .map_err(|err| AppError::TemplateRender(err.to_string()))?;

    Ok(rendered.trim().to_string())
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Serialization(e.to_string()))
}
