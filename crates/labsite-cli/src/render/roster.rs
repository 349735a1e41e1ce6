//! Roster page markup.
//!
//! Consumes the row groups produced by [`labsite_core::render_section`] and
//! emits the two-column grid: one `row` container per group, opened and
//! closed around its one or two member cards.

use std::fmt::{self, Write};

use labsite_core::{MemberRecord, Role, Roster, RowGroup};

use super::html::escape_html;
use crate::config::RoleHeadings;

/// Render the body of the team page: one section per role with members.
///
/// Roles without members produce no section at all.
pub fn render_roster(roster: &Roster, headings: &RoleHeadings) -> String {
    Role::ALL
        .into_iter()
        .map(|role| render_section_html(role, headings.for_role(role), &roster.section(role)))
        .collect()
}

/// Render one role's section; empty input renders nothing.
pub fn render_section_html(role: Role, heading: &str, rows: &[RowGroup<'_>]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_section(&mut out, role, heading, rows);
    out
}

fn write_section(out: &mut String, role: Role, heading: &str, rows: &[RowGroup<'_>]) -> fmt::Result {
    if rows.is_empty() {
        return Ok(());
    }
    writeln!(out, r#"<section class="roster-section roster-{}">"#, role.key())?;
    writeln!(out, "  <h2>{}</h2>", escape_html(heading))?;
    for row in rows {
        write_row(out, row)?;
    }
    writeln!(out, "</section>")
}

fn write_row(out: &mut String, row: &RowGroup<'_>) -> fmt::Result {
    writeln!(out, r#"  <div class="row">"#)?;
    for member in row.iter() {
        write_card(out, member)?;
    }
    writeln!(out, "  </div>")
}

fn write_card(out: &mut String, member: &MemberRecord) -> fmt::Result {
    let name = escape_html(&member.name);
    writeln!(
        out,
        r#"    <div class="col-md-6 member" id="{}">"#,
        escape_html(&member.anchor_id())
    )?;
    if !member.photo_ref.is_empty() {
        writeln!(
            out,
            r#"      <img class="member-photo" src="{}" alt="{name}">"#,
            escape_html(&member.photo_ref)
        )?;
    }
    writeln!(out, r#"      <h4 class="member-name">{name}</h4>"#)?;
    if !member.info_line.is_empty() {
        writeln!(
            out,
            r#"      <p class="member-info">{}</p>"#,
            escape_html(&member.info_line)
        )?;
    }
    if !member.email.is_empty() {
        let email = escape_html(&member.email);
        writeln!(
            out,
            r#"      <p class="member-email"><a href="mailto:{email}">{email}</a></p>"#
        )?;
    }
    for line in member.education_lines() {
        writeln!(
            out,
            r#"      <p class="member-education">{}</p>"#,
            escape_html(line)
        )?;
    }
    writeln!(out, "    </div>")
}
