//! Utility modules.
//!
//! - [`ids`]: ID normalization for slugs and anchors

pub mod ids;
