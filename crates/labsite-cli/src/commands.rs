//! Handlers for `build`, `roster` and `check`.

use std::path::Path;

use labsite_core::{Error, Result, Role, Roster, RowGroup};
use serde::Serialize;

use crate::build::{BuildReport, Site};
use crate::config::SiteConfig;

/// Build the site, optionally overriding the output directory.
pub fn cmd_build(config: &SiteConfig, output: Option<&Path>) -> Result<BuildReport> {
    let site = Site::load(config)?;
    let output_dir = match output {
        Some(dir) => dir.to_path_buf(),
        None => config.resolve(&config.output_dir),
    };
    site.write(&output_dir)
}

/// Rows for one role, as printed by `labsite roster --json`.
#[derive(Debug, Serialize)]
pub struct SectionRows<'a> {
    /// Role tag
    pub role: Role,
    /// Rows in display order
    pub rows: Vec<RowGroup<'a>>,
}

/// Row groups for the requested role, or for every role.
pub fn roster_sections(roster: &Roster, role: Option<Role>) -> Vec<SectionRows<'_>> {
    let roles: Vec<Role> = match role {
        Some(role) => vec![role],
        None => Role::ALL.to_vec(),
    };
    roles
        .into_iter()
        .map(|role| SectionRows {
            role,
            rows: roster.section(role),
        })
        .collect()
}

/// Format sections as plain text, one line per row.
pub fn format_sections(sections: &[SectionRows<'_>]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("{} ({} rows)\n", section.role, section.rows.len()));
        for (i, row) in section.rows.iter().enumerate() {
            let names: Vec<&str> = row.iter().map(|m| m.name.as_str()).collect();
            out.push_str(&format!("  row {}: {}\n", i + 1, names.join(" | ")));
        }
    }
    out
}

/// Print the roster's row groups.
pub fn cmd_roster(config: &SiteConfig, role: Option<Role>, json: bool) -> Result<()> {
    let roster = labsite_content::load_roster(&config.resolve(&config.roster_file))?;
    let sections = roster_sections(&roster, role);
    if json {
        let text = serde_json::to_string_pretty(&sections)
            .map_err(|e| Error::parse(format!("failed to encode rows: {e}")))?;
        println!("{text}");
    } else {
        print!("{}", format_sections(&sections));
    }
    Ok(())
}

/// Counts reported by `labsite check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Prose pages found
    pub pages: usize,
    /// Members per role, in page order
    pub members: Vec<(Role, usize)>,
    /// Software links found, if the list exists
    pub links: Option<usize>,
}

/// Load every input without writing anything.
pub fn cmd_check(config: &SiteConfig) -> Result<CheckReport> {
    let site = Site::load(config)?;
    let members = match site.roster() {
        Some(roster) => Role::ALL.iter().map(|r| (*r, roster.count(*r))).collect(),
        None => Vec::new(),
    };
    Ok(CheckReport {
        pages: site.pages().len(),
        members,
        links: site.links().map(<[_]>::len),
    })
}

/// Process exit status for a failed command.
///
/// Problems with the site inputs (unknown role tags, malformed YAML,
/// invalid settings) exit with 2; filesystem failures exit with 1.
pub fn exit_code(err: &Error) -> u8 {
    if err.is_input_error() { 2 } else { 1 }
}
