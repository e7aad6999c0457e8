//! Markdown-to-HTML conversion for post bodies.
//!
//! Conversion happens once at write time; the resulting fragment is stored
//! verbatim and re-emitted on every page and embed that shows the post.
//! Because the fragment ends up inside arbitrary third-party pages, the
//! rendered HTML is sanitized before storage: raw HTML and script content
//! in the markdown source do not survive.

use pulldown_cmark::{Options, Parser, html};

/// Convert markdown text to a sanitized HTML fragment.
///
/// Pure and deterministic; conversion itself cannot fail. Supports
/// tables, footnotes, strikethrough, and task lists on top of CommonMark.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    ammonia::clean(&html_output)
}
