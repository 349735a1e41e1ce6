//! Page layout templates.
//!
//! A layout is an HTML document with `{{ name }}` placeholders:
//!
//! - `{{ site_title }}` and `{{ title }}`: escaped text
//! - `{{ nav }}`: the navigation bar markup
//! - `{{ content }}`: the page body markup (required)
//!
//! Substitution is a single pass over the template, so placeholder-like
//! text inside a page body is left alone. Unknown placeholders are kept
//! verbatim.

use std::path::Path;

use labsite_core::{Error, Result};

use super::html::escape_html;

/// Layout used when the config names no layout file.
pub const DEFAULT_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} | {{ site_title }}</title>
  <link rel="stylesheet" href="css/site.css">
</head>
<body>
  <header>
    <h1 class="site-title">{{ site_title }}</h1>
{{ nav }}
  </header>
  <main class="container">
{{ content }}
  </main>
</body>
</html>
"#;

/// One link in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Link text
    pub title: String,
    /// Slug of the target page
    pub slug: String,
}

impl NavEntry {
    /// Relative link to the page.
    pub fn href(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Values substituted into a layout for one page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Site name
    pub site_title: &'a str,
    /// Page title
    pub title: &'a str,
    /// Rendered navigation markup
    pub nav: &'a str,
    /// Rendered page body
    pub content: &'a str,
}

/// A parsed layout template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    template: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            template: DEFAULT_LAYOUT.to_string(),
        }
    }
}

impl Layout {
    /// Create a layout, checking it has a `{{ content }}` placeholder.
    pub fn new<S: Into<String>>(template: S) -> Result<Self> {
        let template = template.into();
        if !placeholders(&template).any(|name| name == "content") {
            return Err(Error::config(
                "layout template has no {{ content }} placeholder",
            ));
        }
        Ok(Self { template })
    }

    /// Load a layout from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let template =
            std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::new(template).map_err(|e| Error::config(format!("{}: {e}", path.display())))
    }

    /// Substitute a page into the layout.
    pub fn render(&self, ctx: &PageContext<'_>) -> String {
        let mut out = String::with_capacity(self.template.len() + ctx.content.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("{{") {
            let Some(len) = rest[start + 2..].find("}}") else {
                break;
            };
            let end = start + 2 + len + 2;
            out.push_str(&rest[..start]);

            match rest[start + 2..end - 2].trim() {
                "site_title" => out.push_str(&escape_html(ctx.site_title)),
                "title" => out.push_str(&escape_html(ctx.title)),
                "nav" => out.push_str(ctx.nav),
                "content" => out.push_str(ctx.content),
                _ => out.push_str(&rest[start..end]),
            }
            rest = &rest[end..];
        }

        out.push_str(rest);
        out
    }
}

/// Names of all `{{ name }}` placeholders in a template.
fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    template.split("{{").skip(1).filter_map(|chunk| {
        chunk.find("}}").map(|end| chunk[..end].trim())
    })
}

/// Render the navigation bar, marking the current page.
pub fn render_nav(entries: &[NavEntry], current_slug: &str) -> String {
    let mut out = String::from("    <nav>\n      <ul class=\"nav\">\n");
    for entry in entries {
        let class = if entry.slug == current_slug {
            r#" class="active""#
        } else {
            ""
        };
        out.push_str(&format!(
            "        <li{class}><a href=\"{}\">{}</a></li>\n",
            escape_html(&entry.href()),
            escape_html(&entry.title)
        ));
    }
    out.push_str("      </ul>\n    </nav>");
    out
}
