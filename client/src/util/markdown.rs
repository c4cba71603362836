//! Markdown rendering for assistant answers.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

/// Render `markdown` to HTML with raw HTML from the source dropped.
///
/// Links and images whose destination uses a scheme other than `http`,
/// `https` or `mailto` are unwrapped: the link text (or image alt text)
/// stays, the element does not.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Answers are model output; never let them inject markup or script URLs.
    let mut dropped_link = false;
    let mut dropped_image = false;
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { ref dest_url, .. }) if !is_safe_destination(dest_url) => {
            dropped_link = true;
            None
        }
        Event::End(TagEnd::Link) if dropped_link => {
            dropped_link = false;
            None
        }
        Event::Start(Tag::Image { ref dest_url, .. }) if !is_safe_destination(dest_url) => {
            dropped_image = true;
            None
        }
        Event::End(TagEnd::Image) if dropped_image => {
            dropped_image = false;
            None
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Relative URLs and `http`/`https`/`mailto` pass; any other scheme fails.
///
/// Browsers ignore embedded whitespace and control characters when reading a
/// scheme, so those are stripped before checking.
fn is_safe_destination(dest: &str) -> bool {
    let cleaned: String = dest
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    match cleaned.find([':', '/', '?', '#']) {
        Some(end) if cleaned[end..].starts_with(':') => matches!(&cleaned[..end], "http" | "https" | "mailto"),
        _ => true,
    }
}
