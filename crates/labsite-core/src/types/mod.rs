//! Core types for the roster page.

mod member;
mod proptests;
mod role;
mod row_group;

pub use member::MemberRecord;
pub use role::Role;
pub use row_group::RowGroup;
