//! Common fixtures for labsite integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use labsite_cli::SiteConfig;
use tempfile::TempDir;

/// A site source tree in a temporary directory.
///
/// Mirrors the default layout: `content/pages/*.md`, `content/roster.yaml`,
/// `content/software.yaml`, and `static/`.
pub struct SiteFixture {
    /// Temporary site root
    pub dir: TempDir,
}

impl SiteFixture {
    /// Creates an empty site tree.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("content/pages")).unwrap();
        Self { dir }
    }

    /// Site root path.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file relative to the site root, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Writes a prose page.
    pub fn page(&self, name: &str, content: &str) -> PathBuf {
        self.write(&format!("content/pages/{name}"), content)
    }

    /// Writes the roster store.
    pub fn roster(&self, yaml: &str) -> PathBuf {
        self.write("content/roster.yaml", yaml)
    }

    /// Writes the software list.
    pub fn software(&self, yaml: &str) -> PathBuf {
        self.write("content/software.yaml", yaml)
    }

    /// Default configuration rooted at the fixture.
    pub fn config(&self) -> SiteConfig {
        SiteConfig::default().with_root(self.root())
    }

    /// Default output directory.
    pub fn output(&self) -> PathBuf {
        self.root().join("public")
    }

    /// Reads a built file from the output directory.
    pub fn read_output(&self, name: &str) -> String {
        std::fs::read_to_string(self.output().join(name)).unwrap()
    }
}

impl Default for SiteFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A roster with two PIs and three RAs, interleaved.
pub const MIXED_ROSTER: &str = r#"
members:
  - role: PI
    name: Jane Doe
    photo: images/team/jane.jpg
    info: Associate Professor, Biology
    email: jane@example.edu
    education:
      - PhD, University A
      - MSc, University B
      - BSc, University C
  - role: RA
    name: Ada Lovelace
    info: Graduate Student
    education:
      - BSc, University D
  - role: PI
    name: John Roe
    info: Assistant Professor, Physics
  - role: RA
    name: Grace Hopper
  - role: RA
    name: Barbara Liskov
    education:
      - MEng, University E
      - BSc, University F
"#;

/// A two-entry software list.
pub const SOFTWARE: &str = r#"
links:
  - name: cellsim
    url: https://example.org/cellsim
    description: Agent-based cell growth simulator
  - name: tracer
    url: https://example.org/tracer
"#;
