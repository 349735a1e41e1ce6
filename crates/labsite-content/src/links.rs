//! Software-links list.
//!
//! ```yaml
//! links:
//!   - name: cellsim
//!     url: https://github.com/example/cellsim
//!     description: Agent-based cell growth simulator
//! ```

use std::path::Path;

use labsite_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::read_file;

/// One entry on the software page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareLink {
    /// Project name shown as the link text
    pub name: String,
    /// Target URL
    pub url: String,
    /// Optional one-line description
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct LinksFile {
    #[serde(default)]
    links: Vec<SoftwareLink>,
}

/// Parse the software-links list from YAML text.
pub fn parse_links(yaml: &str) -> Result<Vec<SoftwareLink>> {
    let file: LinksFile = serde_yaml::from_str(yaml)
        .map_err(|e| Error::parse(format!("invalid software links: {e}")))?;

    for (i, link) in file.links.iter().enumerate() {
        if link.name.trim().is_empty() {
            return Err(Error::validation_field(
                format!("links[{i}].name"),
                "must not be empty",
            ));
        }
        if link.url.trim().is_empty() {
            return Err(Error::validation_field(
                format!("links[{i}].url"),
                format!("link '{}' has no URL", link.name),
            ));
        }
    }

    Ok(file.links)
}

/// Load the software-links list from a file.
pub fn load_links(path: &Path) -> Result<Vec<SoftwareLink>> {
    let content = read_file(path)?;
    let links = parse_links(&content)?;
    log::debug!("Loaded {} software links from {}", links.len(), path.display());
    Ok(links)
}
