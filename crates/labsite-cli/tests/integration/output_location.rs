//! Output directory placement and static-file clashes.

use labsite_cli::commands::cmd_build;
use labsite_cli::Error;

use crate::common::{SiteFixture, MIXED_ROSTER};

const CSS: &str = "body { margin: 0; }";

fn site_with_css() -> SiteFixture {
    let site = SiteFixture::new();
    site.page("about.md", "About us.");
    site.write("static/css/site.css", CSS);
    site
}

#[test]
fn test_output_override_onto_static_keeps_assets() {
    let site = site_with_css();
    let static_dir = site.root().join("static");

    let err = cmd_build(&site.config(), Some(static_dir.as_path())).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));

    let css = std::fs::read_to_string(static_dir.join("css/site.css")).unwrap();
    assert_eq!(css, CSS);
    assert!(!static_dir.join("about.html").exists());
}

#[test]
fn test_output_override_through_parent_component() {
    let site = site_with_css();
    let out = site.root().join("content/../static");

    let err = cmd_build(&site.config(), Some(out.as_path())).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    let css = std::fs::read_to_string(site.root().join("static/css/site.css")).unwrap();
    assert_eq!(css, CSS);
}

#[test]
fn test_configured_output_with_cur_dir_rejected() {
    let site = site_with_css();
    site.write("labsite.toml", "output_dir = \"./static\"\n");

    let err = labsite_cli::SiteConfig::from_file(&site.root().join("labsite.toml")).unwrap_err();
    assert!(err.to_string().contains("static_dir"));
}

#[test]
fn test_output_nested_in_static_rejected() {
    let site = site_with_css();
    let out = site.root().join("static/public");

    let err = cmd_build(&site.config(), Some(out.as_path())).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert!(!out.exists());
}

#[test]
fn test_static_file_clashing_with_team_page() {
    let site = SiteFixture::new();
    site.roster(MIXED_ROSTER);
    site.write("static/team.html", "<p>old team page</p>");

    let err = cmd_build(&site.config(), None).unwrap_err();
    assert!(err.to_string().contains("team.html"));
    assert!(!site.output().exists());
}

#[test]
fn test_nested_static_html_is_copied() {
    let site = SiteFixture::new();
    site.roster(MIXED_ROSTER);
    site.write("static/archive/team.html", "<p>2019 team</p>");

    let report = cmd_build(&site.config(), None).unwrap();
    assert_eq!(report.assets_copied, 1);
    assert!(site.output().join("archive/team.html").exists());
    assert!(site.read_output("team.html").contains("Jane Doe"));
}
