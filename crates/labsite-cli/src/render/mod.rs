//! HTML emission for site pages.
//!
//! - [`html`]: escaping
//! - [`roster`]: team page grid built from row groups
//! - [`links`]: software page list
//! - [`layout`]: page shell and navigation bar

pub mod html;
pub mod layout;
pub mod links;
pub mod roster;

pub use html::escape_html;
pub use layout::{render_nav, Layout, NavEntry, PageContext, DEFAULT_LAYOUT};
pub use links::render_links;
pub use roster::{render_roster, render_section_html};
