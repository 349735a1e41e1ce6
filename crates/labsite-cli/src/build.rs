//! Site assembly and output.
//!
//! A build has three steps:
//!
//! 1. Load inputs: prose pages, the roster store, the software list, and
//!    the layout ([`Site::load`])
//! 2. Render every page body and wrap it in the layout ([`Site::render`])
//! 3. Check the output location, then write the pages and copy static
//!    assets into the output directory ([`Site::write`])
//!
//! The team and software pages are only generated when their input files
//! exist, so a site without a software list simply has no software page.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use labsite_content::{load_links, load_pages, load_roster, Page, SoftwareLink};
use labsite_core::{normalize_id, Error, Result, Role, Roster};
use walkdir::WalkDir;

use crate::config::SiteConfig;
use crate::render::{render_links, render_nav, render_roster, Layout, NavEntry, PageContext};

/// A page ready to be written: output file name and full HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Output name without extension
    pub slug: String,
    /// Complete HTML document
    pub html: String,
}

impl RenderedPage {
    /// Output file name.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Directory the site was written to
    pub output_dir: PathBuf,
    /// Number of HTML pages written
    pub pages_written: usize,
    /// Number of static files copied
    pub assets_copied: usize,
}

/// Page body before layout, in nav order.
#[derive(Debug, Clone)]
struct PageBody {
    slug: String,
    title: String,
    nav_order: i64,
    in_nav: bool,
    body: String,
}

/// All loaded site inputs.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    pages: Vec<Page>,
    roster: Option<Roster>,
    links: Option<Vec<SoftwareLink>>,
    layout: Layout,
}

impl Site {
    /// Load every input named by the configuration.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        let pages = load_pages(&config.resolve(&config.pages_dir))?;
        log::info!("Loaded {} prose pages", pages.len());

        let roster_path = config.resolve(&config.roster_file);
        let roster = if roster_path.exists() {
            let roster = load_roster(&roster_path)?;
            for role in Role::ALL {
                log::info!("Roster: {} {role} member(s)", roster.count(role));
            }
            Some(roster)
        } else {
            log::warn!("No roster at {}; skipping team page", roster_path.display());
            None
        };

        let software_path = config.resolve(&config.software_file);
        let links = if software_path.exists() {
            Some(load_links(&software_path)?)
        } else {
            log::warn!(
                "No software list at {}; skipping software page",
                software_path.display()
            );
            None
        };

        let layout = match &config.layout_file {
            Some(path) => Layout::from_file(&config.resolve(path))?,
            None => Layout::default(),
        };

        let site = Self {
            config: config.clone(),
            pages,
            roster,
            links,
            layout,
        };
        site.check_slugs()?;
        Ok(site)
    }

    /// Create a site from already-loaded inputs.
    pub fn from_parts(
        config: SiteConfig,
        pages: Vec<Page>,
        roster: Option<Roster>,
        links: Option<Vec<SoftwareLink>>,
        layout: Layout,
    ) -> Result<Self> {
        let site = Self {
            config,
            pages,
            roster,
            links,
            layout,
        };
        site.check_slugs()?;
        Ok(site)
    }

    /// The loaded roster, if the site has one.
    pub fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    /// The loaded software links, if the site has a list.
    pub fn links(&self) -> Option<&[SoftwareLink]> {
        self.links.as_deref()
    }

    /// The loaded prose pages.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    fn check_slugs(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for body in self.bodies() {
            if !seen.insert(body.slug.clone()) {
                return Err(Error::validation(format!(
                    "more than one page would be written to {}.html",
                    body.slug
                )));
            }
        }
        Ok(())
    }

    fn bodies(&self) -> Vec<PageBody> {
        let mut bodies: Vec<PageBody> = self
            .pages
            .iter()
            .map(|page| PageBody {
                slug: page.slug.clone(),
                title: page.title.clone(),
                nav_order: page.nav_order,
                in_nav: page.in_nav,
                body: page.html.clone(),
            })
            .collect();

        if let Some(roster) = &self.roster {
            let team = &self.config.roster;
            bodies.push(PageBody {
                slug: normalize_id(&team.slug),
                title: team.page_title.clone(),
                nav_order: team.nav_order,
                in_nav: true,
                body: render_roster(roster, &team.headings),
            });
        }

        if let Some(links) = &self.links {
            let software = &self.config.software;
            bodies.push(PageBody {
                slug: normalize_id(&software.slug),
                title: software.page_title.clone(),
                nav_order: software.nav_order,
                in_nav: true,
                body: render_links(links),
            });
        }

        bodies.sort_by(|a, b| a.nav_order.cmp(&b.nav_order).then_with(|| a.slug.cmp(&b.slug)));
        bodies
    }

    /// Navigation entries in display order.
    pub fn nav(&self) -> Vec<NavEntry> {
        self.bodies()
            .into_iter()
            .filter(|b| b.in_nav)
            .map(|b| NavEntry {
                title: b.title,
                slug: b.slug,
            })
            .collect()
    }

    /// Render every page into a full HTML document.
    pub fn render(&self) -> Vec<RenderedPage> {
        let nav = self.nav();
        self.bodies()
            .into_iter()
            .map(|b| {
                let nav_html = render_nav(&nav, &b.slug);
                let html = self.layout.render(&PageContext {
                    site_title: &self.config.site_title,
                    title: &b.title,
                    nav: &nav_html,
                    content: &b.body,
                });
                RenderedPage { slug: b.slug, html }
            })
            .collect()
    }

    /// Render and write the site into `output_dir`.
    ///
    /// Existing files in the output directory are overwritten but never
    /// deleted. Nothing is written if the output directory lies inside the
    /// static directory or a static file would replace a generated page.
    pub fn write(&self, output_dir: &Path) -> Result<BuildReport> {
        let static_dir = self.config.resolve(&self.config.static_dir);
        let assets = if static_dir.is_dir() {
            check_output_outside(&static_dir, output_dir)?;
            collect_assets(&static_dir)?
        } else {
            Vec::new()
        };

        let pages = self.render();
        check_asset_clashes(&pages, &assets)?;

        std::fs::create_dir_all(output_dir).map_err(|e| Error::io_with_path(e, output_dir))?;
        for page in &pages {
            let path = output_dir.join(page.file_name());
            std::fs::write(&path, &page.html).map_err(|e| Error::io_with_path(e, &path))?;
            log::debug!("Wrote {}", path.display());
        }

        for asset in &assets {
            let to = output_dir.join(&asset.relative);
            if let Some(parent) = to.parent() {
                std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
            }
            std::fs::copy(&asset.source, &to).map_err(|e| Error::io_with_path(e, &asset.source))?;
        }
        log::debug!("Copied {} static files", assets.len());

        Ok(BuildReport {
            output_dir: output_dir.to_path_buf(),
            pages_written: pages.len(),
            assets_copied: assets.len(),
        })
    }
}

/// A static file and its path relative to the static directory.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Asset {
    source: PathBuf,
    relative: PathBuf,
}

/// Every file under `static_dir`, in file-name order.
fn collect_assets(static_dir: &Path) -> Result<Vec<Asset>> {
    let mut assets = Vec::new();
    for entry in WalkDir::new(static_dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(static_dir).to_path_buf();
            Error::io_with_path(std::io::Error::from(e), path)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(static_dir)
            .map_err(|_| {
                Error::config(format!(
                    "{} is not under {}",
                    entry.path().display(),
                    static_dir.display()
                ))
            })?
            .to_path_buf();
        assets.push(Asset {
            source: entry.into_path(),
            relative,
        });
    }
    Ok(assets)
}

/// Reject an output directory equal to, or nested in, the static directory.
///
/// Copying assets there would truncate each file onto itself.
fn check_output_outside(static_dir: &Path, output_dir: &Path) -> Result<()> {
    let static_dir = canonical_path(static_dir)?;
    let output = canonical_path(output_dir)?;
    if output.starts_with(&static_dir) {
        return Err(Error::validation_field(
            "output_dir",
            format!(
                "output directory {} is inside the static directory {}",
                output.display(),
                static_dir.display()
            ),
        ));
    }
    Ok(())
}

fn check_asset_clashes(pages: &[RenderedPage], assets: &[Asset]) -> Result<()> {
    let page_files: HashSet<PathBuf> = pages.iter().map(|p| PathBuf::from(p.file_name())).collect();
    match assets.iter().find(|a| page_files.contains(&a.relative)) {
        Some(asset) => Err(Error::validation(format!(
            "static file {} would replace the generated page {}",
            asset.source.display(),
            asset.relative.display()
        ))),
        None => Ok(()),
    }
}

/// Canonical form of `path`, which need not exist yet.
///
/// The longest existing ancestor is canonicalized and the missing
/// components are appended to it.
fn canonical_path(path: &Path) -> Result<PathBuf> {
    let mut existing = path;
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }
    let base = if existing.as_os_str().is_empty() {
        Path::new(".")
    } else {
        existing
    };
    let mut canonical = base.canonicalize().map_err(|e| Error::io_with_path(e, base))?;
    canonical.extend(missing.iter().rev());
    Ok(canonical)
}
