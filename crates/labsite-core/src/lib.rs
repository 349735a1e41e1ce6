#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! labsite core: member records, role tags, row grouping and errors.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Member records, role tags, and row groups
//! - [`roster`]: The ordered roster and the row-grouping operation
//! - [`util`]: ID utilities

pub mod error;
pub mod roster;
pub mod types;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use roster::{render_section, Roster, ROW_WIDTH};
pub use types::{MemberRecord, RowGroup, Role};

// Convenience re-exports from util
pub use util::ids::{id_from_path, normalize_id};
