//! Software page markup.

use std::fmt::{self, Write};

use labsite_content::SoftwareLink;

use super::html::escape_html;

/// Render the software links as a list; no links renders a short notice.
pub fn render_links(links: &[SoftwareLink]) -> String {
    if links.is_empty() {
        return "<p class=\"software-empty\">No software listed yet.</p>\n".to_string();
    }

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_list(&mut out, links);
    out
}

fn write_list(out: &mut String, links: &[SoftwareLink]) -> fmt::Result {
    writeln!(out, r#"<ul class="software-links">"#)?;
    for link in links {
        write!(
            out,
            r#"  <li><a href="{}">{}</a>"#,
            escape_html(&link.url),
            escape_html(&link.name)
        )?;
        if !link.description.is_empty() {
            write!(
                out,
                r#" <span class="description">{}</span>"#,
                escape_html(&link.description)
            )?;
        }
        writeln!(out, "</li>")?;
    }
    writeln!(out, "</ul>")
}
