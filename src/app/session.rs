//! Session state for one user working through capture → request → projection.

use crate::app::AppContext;
use crate::app::commands::enhance;
use crate::domain::{AppError, EnhancedResult, EnhancementStyle, PromptSubmission};
use crate::ports::GenerationClient;

/// Status of the current enhancement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Ready(EnhancedResult),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn result(&self) -> Option<&EnhancedResult> {
        match self {
            SessionState::Ready(result) => Some(result),
            _ => None,
        }
    }
}

/// Tracks one request at a time.
///
/// Submitting while a request is outstanding is rejected and leaves the state
/// untouched. Starting a request discards any previous result or error.
#[derive(Debug, Default)]
pub struct EnhancerSession {
    state: SessionState,
}

impl EnhancerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Move to `Loading`. Valid from `Idle`, `Error` and `Ready`.
    pub fn begin(&mut self) -> Result<(), AppError> {
        if self.state.is_loading() {
            return Err(AppError::RequestInFlight);
        }
        self.state = SessionState::Loading;
        Ok(())
    }

    /// Leave `Loading` with the outcome of the request.
    pub fn complete(&mut self, outcome: Result<EnhancedResult, AppError>) -> Result<(), AppError> {
        if !self.state.is_loading() {
            return Err(AppError::NoRequestInFlight);
        }
        self.state = match outcome {
            Ok(result) => SessionState::Ready(result),
            Err(err) => SessionState::Error(err.to_string()),
        };
        Ok(())
    }

    /// Capture `raw_text`, run the request and record the outcome.
    ///
    /// Returns `Ok(None)` without touching the state when the text is blank.
    pub fn submit<G: GenerationClient>(
        &mut self,
        ctx: &AppContext<G>,
        raw_text: &str,
        style: EnhancementStyle,
    ) -> Result<Option<&EnhancedResult>, AppError> {
        let Some(submission) = PromptSubmission::capture(raw_text, style) else {
            return Ok(None);
        };

        self.begin()?;
        match enhance::execute(ctx, &submission) {
            Ok(result) => {
                self.complete(Ok(result))?;
                Ok(self.state.result())
            }
            Err(err) => {
                self.state = SessionState::Error(err.to_string());
                Err(err)
            }
        }
    }
}
