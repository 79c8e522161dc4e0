use std::io;

use thiserror::Error;

/// Library-wide error type for penh operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// The generation service credential was not provided.
    #[error("API key is missing. Please set {env_var}.")]
    MissingCredential { env_var: String },

    /// Gemini API call failed.
    #[error("Gemini API error: {message}")]
    GeminiApiError { message: String, status: Option<u16> },

    /// The service answered without any text payload.
    #[error("No response received from Gemini.")]
    EmptyResponse,

    /// The returned payload is not valid JSON or does not match the response schema.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Style name is not one of the known styles.
    #[error(
        "Invalid style '{0}': must be one of professional, technical, academic, creative, marketing, simple"
    )]
    InvalidStyle(String),

    /// View name is not one of the known output views.
    #[error("Invalid view '{0}': must be one of main, minimal, json, api, markdown")]
    InvalidView(String),

    /// A request is already outstanding for this session.
    #[error("An enhancement request is already in progress")]
    RequestInFlight,

    /// A request outcome was reported while no request was outstanding.
    #[error("No enhancement request is in progress")]
    NoRequestInFlight,

    /// Markdown template rendering failed.
    #[error("Template render error: {0}")]
    TemplateRender(String),

    /// JSON serialization of an output view failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Coarse classification of failures surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Reported before any network activity.
    Configuration,
    /// The external call failed or produced no payload.
    Service,
    /// The payload did not satisfy the response contract.
    Contract,
    /// Local failures unrelated to the request exchange.
    Other,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Classify this error into the request-stage taxonomy.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::MissingCredential { .. } => ErrorCategory::Configuration,
            AppError::GeminiApiError { .. } | AppError::EmptyResponse => ErrorCategory::Service,
            AppError::MalformedResponse(_) => ErrorCategory::Contract,
            AppError::Io(_)
            | AppError::InvalidStyle(_)
            | AppError::InvalidView(_)
            | AppError::RequestInFlight
            | AppError::NoRequestInFlight
            | AppError::TemplateRender(_)
            | AppError::Serialization(_) => ErrorCategory::Other,
        }
    }
}
