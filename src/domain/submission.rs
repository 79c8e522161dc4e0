use crate::domain::EnhancementStyle;

/// A validated prompt/style pair ready to be sent for enhancement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSubmission {
    /// Raw prompt text, exactly as entered.
    pub prompt: String,
    pub style: EnhancementStyle,
}

impl PromptSubmission {
    /// Accept the pair unless the text is blank after trimming.
    ///
    /// The accepted prompt keeps its original whitespace.
    pub fn capture(raw_text: &str, style: EnhancementStyle) -> Option<Self> {
        if raw_text.trim().is_empty() {
            return None;
        }
        Some(Self { prompt: raw_text.to_string(), style })
    }
}

/// Capture a submission and hand it to `notify` exactly once.
///
/// Blank input is a silent no-op. Returns whether `notify` was called.
pub fn submit<F>(raw_text: &str, style: EnhancementStyle, notify: F) -> bool
where
    F: FnOnce(PromptSubmission),
{
    match PromptSubmission::capture(raw_text, style) {
        Some(submission) => {
            notify(submission);
            true
        }
        None => false,
    }
}
