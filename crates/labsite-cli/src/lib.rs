//! # labsite-cli
//!
//! Site builder and command-line tools for labsite:
//! - Building the static site (prose pages, team roster, software links)
//! - Printing the roster's row layout
//! - Checking inputs without writing output
//! - Managing `labsite.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod build;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod render;

pub use build::{BuildReport, RenderedPage, Site};
pub use config::SiteConfig;
pub use labsite_core::{Error, Result};
