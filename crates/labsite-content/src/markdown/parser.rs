//! Markdown rendering and heading extraction via `pulldown-cmark`.
//!
//! # Example
//!
//! ```rust
//! use labsite_content::markdown::parser::{extract_first_heading, render_markdown};
//!
//! let content = "# Funding\n\nSupported by **several** grants.";
//!
//! assert_eq!(extract_first_heading(content).as_deref(), Some("Funding"));
//! assert!(render_markdown(content).contains("<strong>several</strong>"));
//! ```

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Render Markdown to an HTML fragment.
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, options());
    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Extract the text of the first heading, at any level.
///
/// Inline formatting is stripped. Returns `None` if the content has no
/// non-empty heading.
///
/// # Example
///
/// ```rust
/// use labsite_content::markdown::parser::extract_first_heading;
///
/// let content = "Intro text\n\n## The *Lab*\n\nMore";
/// assert_eq!(extract_first_heading(content).as_deref(), Some("The Lab"));
/// ```
pub fn extract_first_heading(content: &str) -> Option<String> {
    let mut in_heading = false;
    let mut heading_text = String::new();

    for event in Parser::new_ext(content, options()) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                in_heading = true;
                heading_text.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                let trimmed = heading_text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_heading = false;
            }
            Event::Text(text) | Event::Code(text) if in_heading => {
                heading_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_heading => {
                heading_text.push(' ');
            }
            _ => {}
        }
    }

    None
}
