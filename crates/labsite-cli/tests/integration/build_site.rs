//! End-to-end builds of fixture sites.

use labsite_cli::commands::cmd_build;

use crate::common::{SiteFixture, MIXED_ROSTER, SOFTWARE};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_build_full_site() {
    let site = SiteFixture::new();
    site.page(
        "index.md",
        "---\ntitle: Home\nnav_order: 0\n---\n\n# Welcome\n\nWe study cell morphology.",
    );
    site.page("funding.md", "# Funding\n\nSupported by grant 12345.");
    site.roster(MIXED_ROSTER);
    site.software(SOFTWARE);
    site.write("static/css/site.css", "body { margin: 0; }");
    site.write("static/images/team/jane.jpg", "jpg");

    let report = cmd_build(&site.config(), None).unwrap();
    assert_eq!(report.pages_written, 4);
    assert_eq!(report.assets_copied, 2);
    assert_eq!(report.output_dir, site.output());

    for name in ["index.html", "funding.html", "team.html", "software.html"] {
        assert!(site.output().join(name).exists(), "{name} missing");
    }
    assert!(site.output().join("css/site.css").exists());

    let index = site.read_output("index.html");
    assert!(index.contains("<title>Home | Research Group</title>"));
    assert!(index.contains("We study cell morphology."));
    assert!(index.contains(r#"<a href="team.html">Team</a>"#));
}

#[test]
fn test_team_page_grid() {
    let site = SiteFixture::new();
    site.roster(MIXED_ROSTER);
    cmd_build(&site.config(), None).unwrap();

    let team = site.read_output("team.html");

    // 2 PIs -> one full row; 3 RAs -> a full row plus a single-member row.
    assert_eq!(count(&team, r#"<div class="row">"#), 3);
    assert_eq!(count(&team, "<div"), count(&team, "</div>"));
    assert_eq!(count(&team, r#"class="col-md-6 member""#), 5);

    let pi_section = team.find("roster-pi").unwrap();
    let ra_section = team.find("roster-ra").unwrap();
    assert!(pi_section < ra_section);

    // Input order within a role is kept.
    let jane = team.find("Jane Doe").unwrap();
    let john = team.find("John Roe").unwrap();
    assert!(jane < john);
    let ada = team.find("Ada Lovelace").unwrap();
    let grace = team.find("Grace Hopper").unwrap();
    let barbara = team.find("Barbara Liskov").unwrap();
    assert!(ada < grace && grace < barbara);

    // Education lines: 3 + 1 + 0 + 0 + 2.
    assert_eq!(count(&team, "member-education"), 6);
}

#[test]
fn test_custom_headings_and_layout() {
    let site = SiteFixture::new();
    site.roster(MIXED_ROSTER);
    site.write(
        "layout.html",
        "<html><body><h1>{{site_title}}</h1>{{ content }}</body></html>",
    );
    site.write(
        "labsite.toml",
        "site_title = \"Morphology Lab\"\nlayout_file = \"layout.html\"\n\n[roster.headings]\npi = \"Faculty\"\nra = \"Students\"\n",
    );

    let config = labsite_cli::SiteConfig::from_file(&site.root().join("labsite.toml")).unwrap();
    cmd_build(&config, None).unwrap();

    let team = site.read_output("team.html");
    assert!(team.starts_with("<html><body><h1>Morphology Lab</h1>"));
    assert!(team.contains("<h2>Faculty</h2>"));
    assert!(team.contains("<h2>Students</h2>"));
}

#[test]
fn test_output_override() {
    let site = SiteFixture::new();
    site.page("about.md", "About us.");
    let out = site.root().join("elsewhere");

    let report = cmd_build(&site.config(), Some(out.as_path())).unwrap();
    assert_eq!(report.pages_written, 1);
    assert!(out.join("about.html").exists());
    assert!(!site.output().exists());
}

#[test]
fn test_roster_with_only_research_assistants() {
    let site = SiteFixture::new();
    site.roster("members:\n  - role: RA\n    name: Solo\n");
    cmd_build(&site.config(), None).unwrap();

    let team = site.read_output("team.html");
    assert!(!team.contains("roster-pi"));
    assert_eq!(count(&team, r#"<div class="row">"#), 1);
}
