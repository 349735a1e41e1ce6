//! YAML frontmatter splitting for Markdown pages.
//!
//! A page may start with a YAML block fenced by `---` lines:
//!
//! ```markdown
//! ---
//! title: Research
//! nav_order: 2
//! ---
//!
//! # Our Research
//! ```
//!
//! # Usage
//!
//! ```rust
//! use labsite_content::markdown::split_frontmatter;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Default)]
//! struct Meta {
//!     title: Option<String>,
//! }
//!
//! let fm = split_frontmatter("---\ntitle: Research\n---\n\nBody");
//! let meta: Meta = fm.deserialize().unwrap();
//! assert_eq!(meta.title.as_deref(), Some("Research"));
//! assert_eq!(fm.body().trim(), "Body");
//! ```

use labsite_core::{Error, Result};
use serde::de::DeserializeOwned;

/// A page split into its frontmatter block and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// Raw YAML between the fences, if the page had a fenced block.
    yaml: Option<&'a str>,
    /// Everything after the closing fence (or the whole page).
    body: &'a str,
}

impl<'a> Frontmatter<'a> {
    fn absent(body: &'a str) -> Self {
        Self { yaml: None, body }
    }

    /// Page body after the block.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Deserialize the block into `T`.
    ///
    /// A missing or blank block yields `T::default()`. Malformed YAML is an
    /// error: a typo in a page header should stop the build rather than
    /// silently drop the page's metadata.
    pub fn deserialize<T: DeserializeOwned + Default>(&self) -> Result<T> {
        match self.yaml {
            Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str(yaml)
                .map_err(|e| Error::parse(format!("invalid frontmatter: {e}"))),
            _ => Ok(T::default()),
        }
    }
}

/// Split a page into frontmatter and body.
///
/// The opening fence must be the very first line. Without a closing fence
/// the whole content is treated as body.
pub fn split_frontmatter(content: &str) -> Frontmatter<'_> {
    let Some(rest) = content.strip_prefix("---") else {
        return Frontmatter::absent(content);
    };
    let Some(rest) = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) else {
        return Frontmatter::absent(content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Frontmatter {
                yaml: Some(&rest[..offset]),
                body: &rest[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    log::warn!("Frontmatter opening delimiter found but no closing delimiter");
    Frontmatter::absent(content)
}

// ============================================================================
// Tests
// ============================================================================
