use super::{RenderArgs, output};
use crate::app::commands::render;
use crate::domain::AppError;
use std::io::{self, Read};
use std::path::Path;

pub(super) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let source = read_source(&args.input)?;
    let rendered = render::execute(&source, &args.views.selected())?;
    output::print_views(&rendered);
    Ok(())
}

fn read_source(path: &Path) -> Result<String, AppError> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        return Ok(text);
    }
    if !path.exists() {
        return Err(AppError::config_error(format!("Input file not found: {}", path.display())));
    }
    Ok(std::fs::read_to_string(path)?)
}
