use crate::components::App;
use crate::content;
use dioxus::prelude::*;

/// Renders [`App`] to an HTML fragment.
#[must_use]
pub fn render_app() -> String {
    let mut dom = VirtualDom::new(App);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Renders [`App`] inside a complete HTML5 document titled with the brand.
#[must_use]
pub fn render_document() -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"en\">",
            "<head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
            "<title>{title}</title>",
            "<script src=\"{tailwind}\"></script>",
            "</head>",
            "<body>{body}</body>",
            "</html>",
        ),
        title = content::BRAND,
        tailwind = content::TAILWIND_CDN,
        body = render_app(),
    )
}
