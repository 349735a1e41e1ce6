//! Content loading for labsite.
//!
//! Reads the three kinds of site input from disk and turns them into the
//! types the site builder renders:
//!
//! - [`roster`]: the team roster store (`roster.yaml`)
//! - [`links`]: the software-links list (`software.yaml`)
//! - [`pages`]: Markdown prose pages with optional YAML frontmatter
//! - [`markdown`]: frontmatter splitting and Markdown-to-HTML conversion
//!
//! # Example
//!
//! ```rust
//! use labsite_content::roster::parse_roster;
//! use labsite_core::Role;
//!
//! let yaml = "members:\n  - role: PI\n    name: Jane Doe\n  - role: RA\n    name: Ada\n";
//! let roster = parse_roster(yaml).unwrap();
//! assert_eq!(roster.count(Role::PrincipalInvestigator), 1);
//! ```

pub mod links;
pub mod markdown;
pub mod pages;
pub mod roster;

use std::path::Path;

use labsite_core::{Error, Result};

// Re-export commonly used types
pub use links::{load_links, parse_links, SoftwareLink};
pub use markdown::{extract_first_heading, render_markdown, split_frontmatter, Frontmatter};
pub use pages::{load_page, load_pages, Page};
pub use roster::{load_roster, parse_roster};

/// Read a UTF-8 file, attaching the path to any I/O error.
pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
}
