//! Markdown frontmatter and rendering utilities.
//!
//! - [`frontmatter`]: split YAML frontmatter from a page body
//! - [`parser`]: heading extraction and HTML rendering

pub mod frontmatter;
pub mod parser;

pub use frontmatter::{split_frontmatter, Frontmatter};
pub use parser::{extract_first_heading, render_markdown};
