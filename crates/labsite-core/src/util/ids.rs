//! ID normalization utilities.
//!
//! Turns display names and file names into lowercase kebab-case IDs usable
//! as URL slugs and HTML anchors.

use std::path::Path;

/// Normalize a name to a lowercase kebab-case ID.
///
/// Anything other than letters, digits, and hyphens becomes a separator;
/// runs of separators collapse into a single hyphen.
///
/// # Examples
///
/// ```
/// use labsite_core::util::ids::normalize_id;
///
/// assert_eq!(normalize_id("Jane Doe"), "jane-doe");
/// assert_eq!(normalize_id("research_software"), "research-software");
/// assert_eq!(normalize_id("  Dr. A.  Smith "), "dr-a-smith");
/// assert_eq!(normalize_id("Muñoz"), "muñoz");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
}

/// Compute an ID from a file path's stem.
///
/// Returns `None` if the path has no file stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use labsite_core::util::ids::id_from_path;
///
/// assert_eq!(
///     id_from_path(Path::new("content/pages/Funding_And_Grants.md")),
///     Some("funding-and-grants".to_string())
/// );
/// assert_eq!(id_from_path(Path::new("/")), None);
/// ```
pub fn id_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(normalize_id)
}
