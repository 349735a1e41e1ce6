//! Markdown prose pages.
//!
//! Every `*.md` file in the pages directory becomes one HTML page. The
//! optional frontmatter controls how it is listed:
//!
//! | key | meaning | default |
//! |---|---|---|
//! | `title` | page and nav title | first heading, then file stem |
//! | `slug` | output file name | normalized file stem |
//! | `nav_order` | position in the nav bar | `100` |
//! | `nav` | show in the nav bar | `true` |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use labsite_core::{id_from_path, normalize_id, Error, Result};
use serde::Deserialize;

use crate::markdown::{extract_first_heading, render_markdown, split_frontmatter};
use crate::read_file;

/// Nav position for pages that do not set `nav_order`.
pub const DEFAULT_NAV_ORDER: i64 = 100;

#[derive(Debug, Default, Deserialize)]
struct PageMeta {
    title: Option<String>,
    slug: Option<String>,
    nav_order: Option<i64>,
    nav: Option<bool>,
}

/// A rendered prose page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Output name without extension (`index` for the home page)
    pub slug: String,
    /// Title used in `<title>` and the nav bar
    pub title: String,
    /// Sort key for the nav bar
    pub nav_order: i64,
    /// Whether the page is linked from the nav bar
    pub in_nav: bool,
    /// Body rendered to HTML
    pub html: String,
    /// File the page was read from
    pub source: PathBuf,
}

impl Page {
    /// Output file name, e.g. `research.html`.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Load and render a single page.
pub fn load_page(path: &Path) -> Result<Page> {
    let content = read_file(path)?;
    let fm = split_frontmatter(&content);
    let meta: PageMeta = fm
        .deserialize()
        .map_err(|e| Error::parse(format!("{}: {e}", path.display())))?;

    let stem_id = id_from_path(path).unwrap_or_default();
    let slug = match meta.slug.as_deref() {
        Some(slug) => normalize_id(slug),
        None => stem_id.clone(),
    };
    if slug.is_empty() {
        return Err(Error::validation_field(
            path.display().to_string(),
            "page has no usable slug",
        ));
    }

    let title = meta
        .title
        .filter(|t| !t.trim().is_empty())
        .or_else(|| extract_first_heading(fm.body()))
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or(stem_id)
        });

    Ok(Page {
        slug,
        title,
        nav_order: meta.nav_order.unwrap_or(DEFAULT_NAV_ORDER),
        in_nav: meta.nav.unwrap_or(true),
        html: render_markdown(fm.body()),
        source: path.to_path_buf(),
    })
}

/// Load every `*.md` page in `dir`, sorted by nav order then slug.
///
/// A missing directory yields no pages. Two pages with the same slug are
/// an error.
pub fn load_pages(dir: &Path) -> Result<Vec<Page>> {
    if !dir.is_dir() {
        log::warn!("Pages directory {} not found; no prose pages", dir.display());
        return Ok(Vec::new());
    }

    let pattern = format!("{}/*.md", glob::Pattern::escape(&dir.to_string_lossy()));
    let paths = glob::glob(&pattern)
        .map_err(|e| Error::config(format!("invalid pages pattern '{pattern}': {e}")))?;

    let mut pages = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            Error::io_with_path(std::io::Error::from(e), path)
        })?;
        log::debug!("Loading page {}", path.display());
        pages.push(load_page(&path)?);
    }

    pages.sort_by(|a, b| a.nav_order.cmp(&b.nav_order).then_with(|| a.slug.cmp(&b.slug)));

    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for page in &pages {
        if let Some(first) = seen.insert(&page.slug, &page.source) {
            return Err(Error::validation(format!(
                "pages {} and {} share the slug '{}'",
                first.display(),
                page.source.display(),
                page.slug
            )));
        }
    }

    Ok(pages)
}
