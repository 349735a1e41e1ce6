//! The team roster and its row grouping.
//!
//! The roster page shows one section per role. Each section lays its
//! members out in a two-column grid, so the members of a role are split
//! into consecutive rows of at most [`ROW_WIDTH`] cells. A trailing odd
//! member gets a row of its own; an empty section gets no rows at all.
//!
//! # Example
//!
//! ```rust
//! use labsite_core::{render_section, MemberRecord, Role};
//!
//! let members = vec![
//!     MemberRecord::new(Role::PrincipalInvestigator, "A"),
//!     MemberRecord::new(Role::ResearchAssistant, "B"),
//!     MemberRecord::new(Role::PrincipalInvestigator, "C"),
//!     MemberRecord::new(Role::ResearchAssistant, "D"),
//! ];
//!
//! let rows = render_section(&members, Role::PrincipalInvestigator);
//! assert_eq!(rows.len(), 1);
//! let names: Vec<&str> = rows[0].iter().map(|m| m.name.as_str()).collect();
//! assert_eq!(names, vec!["A", "C"]);
//! ```

use crate::types::{MemberRecord, Role, RowGroup};

/// Number of cells in a full roster row.
pub const ROW_WIDTH: usize = 2;

/// Group the members holding `role` into rows of at most [`ROW_WIDTH`].
///
/// Members keep their input order. The result has
/// `ceil(matching / ROW_WIDTH)` rows, all full except possibly the last.
pub fn render_section(all_members: &[MemberRecord], role: Role) -> Vec<RowGroup<'_>> {
    let matching: Vec<&MemberRecord> = all_members.iter().filter(|m| m.has_role(role)).collect();

    matching.chunks(ROW_WIDTH).map(RowGroup::from_chunk).collect()
}

/// The ordered collection of every member shown on the site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// All members, in display order
    pub members: Vec<MemberRecord>,
}

impl Roster {
    /// Creates a roster from members in display order.
    pub fn new(members: Vec<MemberRecord>) -> Self {
        Self { members }
    }

    /// Rows for one role's section.
    pub fn section(&self, role: Role) -> Vec<RowGroup<'_>> {
        render_section(&self.members, role)
    }

    /// Number of members holding `role`.
    pub fn count(&self, role: Role) -> usize {
        self.members.iter().filter(|m| m.has_role(role)).count()
    }

    /// Roles with at least one member, in page order.
    pub fn roles_present(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.count(*role) > 0)
            .collect()
    }

    /// Total number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
