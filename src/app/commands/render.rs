//! Re-derive output views from a saved result without contacting the service.

use crate::domain::{AppError, EnhancedResult, OutputView};

/// One rendered view of a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub view: OutputView,
    pub content: String,
}

/// Render `views` of `result`, in the order given.
pub fn render_views(
    result: &EnhancedResult,
    views: &[OutputView],
) -> Result<Vec<RenderedView>, AppError> {
    views
        .iter()
        .map(|view| Ok(RenderedView { view: *view, content: view.render(result)? }))
        .collect()
}

/// Parse a saved JSON view and render `views` from it.
pub fn execute(source: &str, views: &[OutputView]) -> Result<Vec<RenderedView>, AppError> {
    let result = EnhancedResult::from_json(source)?;
    render_views(&result, views)
}
