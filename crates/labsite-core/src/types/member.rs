//! Member records shown on the roster page.

use serde::Serialize;

use super::Role;
use crate::util::ids::normalize_id;

/// One person on the roster.
///
/// Records are read from the roster store and never modified while a page
/// is rendered; row groups borrow them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    /// Roster section this member belongs to
    pub role: Role,
    /// Display name
    pub name: String,
    /// Image reference, passed through to the markup untouched
    #[serde(rename = "photo")]
    pub photo_ref: String,
    /// Title or affiliation line
    #[serde(rename = "info")]
    pub info_line: String,
    /// Contact address (not validated)
    pub email: String,
    /// Degrees and institutions, in display order
    #[serde(rename = "education")]
    pub education_entries: Vec<String>,
}

impl MemberRecord {
    /// Creates a record with only a role and a name.
    pub fn new<S: Into<String>>(role: Role, name: S) -> Self {
        Self {
            role,
            name: name.into(),
            photo_ref: String::new(),
            info_line: String::new(),
            email: String::new(),
            education_entries: Vec::new(),
        }
    }

    /// Sets the photo reference.
    pub fn with_photo<S: Into<String>>(mut self, photo_ref: S) -> Self {
        self.photo_ref = photo_ref.into();
        self
    }

    /// Sets the info line.
    pub fn with_info<S: Into<String>>(mut self, info_line: S) -> Self {
        self.info_line = info_line.into();
        self
    }

    /// Sets the email address.
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = email.into();
        self
    }

    /// Appends one education entry.
    pub fn with_education<S: Into<String>>(mut self, entry: S) -> Self {
        self.education_entries.push(entry.into());
        self
    }

    /// Education lines to render: the non-blank entries, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use labsite_core::{MemberRecord, Role};
    ///
    /// let member = MemberRecord::new(Role::ResearchAssistant, "Ada")
    ///     .with_education("BSc, Somewhere")
    ///     .with_education("   ")
    ///     .with_education("MSc, Elsewhere");
    ///
    /// let lines: Vec<&str> = member.education_lines().collect();
    /// assert_eq!(lines, vec!["BSc, Somewhere", "MSc, Elsewhere"]);
    /// ```
    pub fn education_lines(&self) -> impl Iterator<Item = &str> {
        self.education_entries
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
    }

    /// Stable anchor ID derived from the member's name.
    pub fn anchor_id(&self) -> String {
        format!("member-{}", normalize_id(&self.name))
    }

    /// Returns `true` if the member has the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
