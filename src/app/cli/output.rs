use crate::app::commands::render::RenderedView;

/// Print views to stdout. A single view is printed bare; several get headers.
pub(super) fn print_views(rendered: &[RenderedView]) {
    if let [single] = rendered {
        println!("{}", single.content);
        return;
    }

    for (index, view) in rendered.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("=== {} ===", view.view.label());
        println!("{}", view.content);
    }
}
