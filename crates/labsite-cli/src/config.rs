//! Site configuration.
//!
//! Loaded from `labsite.toml`. Every key has a default, so an absent
//! default file simply means "use the defaults". Relative paths are
//! resolved against the directory holding the config file.
//!
//! ```toml
//! site_title = "Morphology Lab"
//! output_dir = "public"
//!
//! [roster]
//! page_title = "People"
//!
//! [roster.headings]
//! pi = "Faculty"
//! ra = "Students"
//! ```

use std::path::{Component, Path, PathBuf};

use labsite_core::{normalize_id, Error, Result, Role};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "labsite.toml";

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name shown in the header and `<title>`
    pub site_title: String,
    /// Directory of Markdown prose pages
    pub pages_dir: PathBuf,
    /// Directory the built site is written to
    pub output_dir: PathBuf,
    /// Roster store (YAML)
    pub roster_file: PathBuf,
    /// Software-links list (YAML)
    pub software_file: PathBuf,
    /// Directory copied verbatim into the output (images, CSS)
    pub static_dir: PathBuf,
    /// HTML layout template; the built-in layout is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<PathBuf>,
    /// Team roster page
    pub roster: RosterPageConfig,
    /// Software-links page
    pub software: SoftwarePageConfig,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    root: PathBuf,
}

/// Settings for the generated team page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterPageConfig {
    /// Page and nav title
    pub page_title: String,
    /// Output name without extension
    pub slug: String,
    /// Nav bar position
    pub nav_order: i64,
    /// Section heading per role
    pub headings: RoleHeadings,
}

/// Section headings for each role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleHeadings {
    /// Heading above the principal investigators
    pub pi: String,
    /// Heading above the research assistants
    pub ra: String,
}

/// Settings for the generated software page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwarePageConfig {
    /// Page and nav title
    pub page_title: String,
    /// Output name without extension
    pub slug: String,
    /// Nav bar position
    pub nav_order: i64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Research Group".to_string(),
            pages_dir: PathBuf::from("content/pages"),
            output_dir: PathBuf::from("public"),
            roster_file: PathBuf::from("content/roster.yaml"),
            software_file: PathBuf::from("content/software.yaml"),
            static_dir: PathBuf::from("static"),
            layout_file: None,
            roster: RosterPageConfig::default(),
            software: SoftwarePageConfig::default(),
            root: PathBuf::new(),
        }
    }
}

impl Default for RosterPageConfig {
    fn default() -> Self {
        Self {
            page_title: "Team".to_string(),
            slug: "team".to_string(),
            nav_order: 50,
            headings: RoleHeadings::default(),
        }
    }
}

impl Default for RoleHeadings {
    fn default() -> Self {
        Self {
            pi: Role::PrincipalInvestigator.heading().to_string(),
            ra: Role::ResearchAssistant.heading().to_string(),
        }
    }
}

impl RoleHeadings {
    /// Heading for a role's section.
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::PrincipalInvestigator => &self.pi,
            Role::ResearchAssistant => &self.ra,
        }
    }
}

impl Default for SoftwarePageConfig {
    fn default() -> Self {
        Self {
            page_title: "Software".to_string(),
            slug: "software".to_string(),
            nav_order: 60,
        }
    }
}

impl SiteConfig {
    /// Project name used in CLI hints.
    pub fn project_name() -> &'static str {
        "labsite"
    }

    /// Resolve which config file to use.
    ///
    /// An explicit path wins; otherwise `labsite.toml` in the working
    /// directory.
    pub fn resolve_config_path(explicit: Option<&str>) -> PathBuf {
        match explicit {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Load configuration.
    ///
    /// A missing explicit file is an error; a missing default file yields
    /// the default configuration rooted at the working directory.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let path = Self::resolve_config_path(explicit);
        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "Config file {} does not exist",
                    path.display()
                )));
            }
            log::info!("No {DEFAULT_CONFIG_FILE} found; using default configuration");
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let mut config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Check settings that would otherwise produce a broken site.
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::validation_field("output_dir", "must not be empty"));
        }
        let roster_slug = normalize_id(&self.roster.slug);
        let software_slug = normalize_id(&self.software.slug);
        if roster_slug.is_empty() {
            return Err(Error::validation_field("roster.slug", "must not be empty"));
        }
        if software_slug.is_empty() {
            return Err(Error::validation_field("software.slug", "must not be empty"));
        }
        if roster_slug == software_slug {
            return Err(Error::validation(format!(
                "roster and software pages share the slug '{roster_slug}'"
            )));
        }
        if without_cur_dir(&self.output_dir).starts_with(without_cur_dir(&self.static_dir)) {
            return Err(Error::validation_field(
                "output_dir",
                "must not be static_dir or a directory inside it",
            ));
        }
        Ok(())
    }

    /// Set the directory relative paths resolve against.
    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.root = root.into();
        self
    }

    /// Resolve a configured path against the config root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// `path` with every `.` component dropped.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
