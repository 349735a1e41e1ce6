//! Input checking and error reporting.

use labsite_cli::commands::{cmd_build, cmd_check};
use labsite_cli::Error;
use labsite_core::Role;

use crate::common::{SiteFixture, MIXED_ROSTER, SOFTWARE};

#[test]
fn test_check_reports_counts() {
    let site = SiteFixture::new();
    site.page("index.md", "Home");
    site.roster(MIXED_ROSTER);
    site.software(SOFTWARE);

    let report = cmd_check(&site.config()).unwrap();
    assert_eq!(report.pages, 1);
    assert_eq!(
        report.members,
        vec![
            (Role::PrincipalInvestigator, 2),
            (Role::ResearchAssistant, 3)
        ]
    );
    assert_eq!(report.links, Some(2));
    assert!(!site.output().exists());
}

#[test]
fn test_check_without_optional_inputs() {
    let site = SiteFixture::new();
    let report = cmd_check(&site.config()).unwrap();
    assert_eq!(report.pages, 0);
    assert!(report.members.is_empty());
    assert_eq!(report.links, None);
}

#[test]
fn test_unknown_role_fails_build() {
    let site = SiteFixture::new();
    site.roster("members:\n  - role: PI\n    name: Jane\n  - role: Postdoc\n    name: Sam\n");

    let err = cmd_build(&site.config(), None).unwrap_err();
    let Error::Validation { field, message } = err else {
        unreachable!("Expected Validation error");
    };
    assert_eq!(field.as_deref(), Some("members[1].role"));
    assert!(message.contains("Postdoc"));
    assert!(message.contains("Sam"));
    assert!(!site.output().exists());
}

#[test]
fn test_page_slug_clash_with_team_page() {
    let site = SiteFixture::new();
    site.page("team.md", "Our team in prose.");
    site.roster(MIXED_ROSTER);

    let err = cmd_check(&site.config()).unwrap_err();
    assert!(err.to_string().contains("team.html"));
}

#[test]
fn test_malformed_software_list() {
    let site = SiteFixture::new();
    site.software("links:\n  - name: broken\n");

    let err = cmd_check(&site.config()).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_layout_without_content_placeholder() {
    let site = SiteFixture::new();
    site.write("layout.html", "<html></html>");
    let mut config = site.config();
    config.layout_file = Some("layout.html".into());

    let err = cmd_check(&config).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}
