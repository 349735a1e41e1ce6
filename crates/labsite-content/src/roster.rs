//! Roster store loading.
//!
//! The roster lives in a YAML file with a single `members` list, in the
//! order members should appear on the page:
//!
//! ```yaml
//! members:
//!   - role: PI
//!     name: Jane Doe
//!     photo: images/team/jane.jpg
//!     info: Associate Professor, Department of Biology
//!     email: jane@example.edu
//!     education:
//!       - PhD, Some University
//!       - BSc, Another University
//! ```
//!
//! Role tags are checked here, at the edge of the system: an unknown tag is
//! reported with the member it belongs to instead of the member silently
//! vanishing from every section.

use std::path::Path;

use labsite_core::{Error, MemberRecord, Result, Role, Roster};
use serde::Deserialize;

use crate::read_file;

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    members: Vec<StoredMember>,
}

/// A member as written in the store, before its role tag is checked.
#[derive(Debug, Deserialize)]
struct StoredMember {
    role: String,
    name: String,
    #[serde(default, alias = "photo_ref")]
    photo: String,
    #[serde(default, alias = "info_line")]
    info: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    education: Vec<String>,
}

impl StoredMember {
    fn into_record(self, index: usize) -> Result<MemberRecord> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::validation_field(
                format!("members[{index}].name"),
                "must not be empty",
            ));
        }

        let role: Role = self.role.parse().map_err(|e| match e {
            Error::UnknownRole { tag } => Error::validation_field(
                format!("members[{index}].role"),
                format!("unknown role tag '{tag}' for member '{name}'"),
            ),
            other => other,
        })?;

        Ok(MemberRecord {
            role,
            name,
            photo_ref: self.photo,
            info_line: self.info,
            email: self.email,
            education_entries: self.education,
        })
    }
}

/// Parse a roster from YAML text.
pub fn parse_roster(yaml: &str) -> Result<Roster> {
    let file: RosterFile = serde_yaml::from_str(yaml)
        .map_err(|e| Error::parse(format!("invalid roster: {e}")))?;

    let members = file
        .members
        .into_iter()
        .enumerate()
        .map(|(i, stored)| stored.into_record(i))
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Parsed roster with {} members", members.len());
    Ok(Roster::new(members))
}

/// Load the roster store from a file.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let content = read_file(path)?;
    parse_roster(&content).map_err(|e| match e {
        Error::Parse { message } => Error::parse(format!("{}: {message}", path.display())),
        other => other,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ROSTER: &str = r#"
members:
  - role: PI
    name: Jane Doe
    photo: images/jane.jpg
    info: Associate Professor
    email: jane@example.edu
    education:
      - PhD, University A
      - BSc, University B
  - role: RA
    name: Ada
  - role: RA
    name: Grace
    education: []
  - role: PI
    name: John Roe
"#;

    #[test]
    fn test_parse_roster_preserves_order() {
        let roster = parse_roster(ROSTER).unwrap();
        let names: Vec<&str> = roster.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe", "Ada", "Grace", "John Roe"]);
    }

    #[test]
    fn test_parse_roster_fields() {
        let roster = parse_roster(ROSTER).unwrap();
        let jane = &roster.members[0];
        assert_eq!(jane.role, Role::PrincipalInvestigator);
        assert_eq!(jane.photo_ref, "images/jane.jpg");
        assert_eq!(jane.info_line, "Associate Professor");
        assert_eq!(jane.education_lines().count(), 2);
        assert!(roster.members[1].education_entries.is_empty());
    }

    #[test]
    fn test_parse_roster_sections() {
        let roster = parse_roster(ROSTER).unwrap();
        assert_eq!(roster.section(Role::PrincipalInvestigator).len(), 1);
        assert_eq!(roster.section(Role::ResearchAssistant).len(), 1);
    }

    #[test]
    fn test_unknown_role_names_member() {
        let yaml = "members:\n  - role: Alumni\n    name: Old Friend\n";
        let err = parse_roster(yaml).unwrap_err();
        let Error::Validation { field, message } = err else {
            unreachable!("Expected Validation error");
        };
        assert_eq!(field.as_deref(), Some("members[0].role"));
        assert!(message.contains("Alumni"));
        assert!(message.contains("Old Friend"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let yaml = "members:\n  - role: RA\n    name: '  '\n";
        let err = parse_roster(yaml).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_empty_roster() {
        let roster = parse_roster("members: []\n").unwrap();
        assert!(roster.is_empty());
        let roster = parse_roster("{}").unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = parse_roster("members: [\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_load_roster_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.yaml");
        std::fs::write(&path, ROSTER).unwrap();
        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_load_roster_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_roster(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::IoPath { .. }));
    }
}
