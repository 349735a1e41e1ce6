//! Row groups for the two-column roster grid.

use serde::Serialize;

use super::MemberRecord;

/// One visual row of the roster grid: one or two members.
///
/// Borrows its members from the roster, so building rows never copies or
/// modifies a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowGroup<'a> {
    members: Vec<&'a MemberRecord>,
}

impl<'a> RowGroup<'a> {
    /// Creates a row from a chunk of members.
    pub(crate) fn from_chunk(chunk: &[&'a MemberRecord]) -> Self {
        debug_assert!(!chunk.is_empty() && chunk.len() <= crate::roster::ROW_WIDTH);
        Self {
            members: chunk.to_vec(),
        }
    }

    /// The members in this row, left to right.
    pub fn members(&self) -> &[&'a MemberRecord] {
        &self.members
    }

    /// Number of cells in this row (1 or 2).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; rows are never emitted empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the members in this row.
    pub fn iter(&self) -> impl Iterator<Item = &'a MemberRecord> + '_ {
        self.members.iter().copied()
    }
}
