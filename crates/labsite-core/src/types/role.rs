//! Role tags for roster members.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The role a member holds on the roster page.
///
/// A closed set: adding a role means adding a variant here and to
/// [`Role::ALL`]. Input tags are the short forms `PI` and `RA`; the long
/// names are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Role {
    /// Principal investigator
    #[serde(rename = "PI")]
    PrincipalInvestigator,
    /// Research assistant
    #[serde(rename = "RA")]
    ResearchAssistant,
}

impl Role {
    /// Every role, in the order sections appear on the roster page.
    pub const ALL: [Role; 2] = [Role::PrincipalInvestigator, Role::ResearchAssistant];

    /// Short tag used in the roster store.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PrincipalInvestigator => "PI",
            Self::ResearchAssistant => "RA",
        }
    }

    /// Default section heading for this role.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::PrincipalInvestigator => "Principal Investigators",
            Self::ResearchAssistant => "Research Assistants",
        }
    }

    /// Lowercase key used for CSS classes and config tables.
    pub fn key(&self) -> &'static str {
        match self {
            Self::PrincipalInvestigator => "pi",
            Self::ResearchAssistant => "ra",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Parses a role tag, ignoring case and treating `-`/space as `_`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "PI" | "PRINCIPAL_INVESTIGATOR" => Ok(Self::PrincipalInvestigator),
            "RA" | "RESEARCH_ASSISTANT" => Ok(Self::ResearchAssistant),
            _ => Err(Error::unknown_role(s.trim())),
        }
    }
}
