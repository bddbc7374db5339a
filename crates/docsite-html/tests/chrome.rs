//! End-to-end tests rendering chrome from pipeline JSON.

use docsite_core::{Config, OutlineHeading, Slugger, Toc};
use docsite_html::{Attributes, TocOptions, render_chrome, render_table_of_contents};

fn render(toc: &Toc) -> Option<String> {
    render_table_of_contents(toc, &TocOptions::default(), &Attributes::new())
}

#[test]
fn test_two_children_render_two_entries() {
    let toc = Toc::from_json(
        r##"{
            "items": [{
                "url": "#flags",
                "title": "Feature flags",
                "items": [
                    { "url": "#creating-flags", "title": "Creating flags" },
                    { "url": "#archiving-flags", "title": "Archiving flags" }
                ]
            }]
        }"##,
    )
    .expect("parse toc");

    let html = render(&toc).expect("toc rendered");

    assert_eq!(html.matches("<li ").count(), 2);
    assert_eq!(html.matches("<a ").count(), 2);
    assert!(html.contains(r##"href="#creating-flags""##));
    assert!(html.contains(">Creating flags</a>"));
    assert!(html.contains(r##"href="#archiving-flags""##));
    assert!(html.contains(">Archiving flags</a>"));
}

#[test]
fn test_absent_children_render_nothing() {
    let toc = Toc::from_json(
        r##"{ "items": [{ "url": "#integrations", "title": "Integrations" }] }"##,
    )
    .expect("parse toc");

    assert!(render(&toc).is_none());
}

#[test]
fn test_null_children_render_nothing() {
    let toc = Toc::from_json(
        r##"{ "items": [{ "url": "#integrations", "title": "Integrations", "items": null }] }"##,
    )
    .expect("parse toc");

    assert!(render(&toc).is_none());
}

#[test]
fn test_outline_to_sidebar() {
    let mut slugger = Slugger::new();
    let outline: Vec<OutlineHeading> = [
        (1, "Experiments"),
        (2, "Overview"),
        (2, "Overview"),
        (3, "Metrics"),
    ]
    .into_iter()
    .map(|(level, text)| OutlineHeading::new(level, text, slugger.slug(text)))
    .collect();

    let toc = Toc::from_outline(&outline);
    let html = render(&toc).expect("toc rendered");

    assert_eq!(html.matches("<li ").count(), 2);
    assert!(html.contains(r##"href="#overview""##));
    assert!(html.contains(r##"href="#overview-1""##));
    assert!(!html.contains("Metrics"));
}

#[test]
fn test_page_chrome_for_section() {
    let config = Config::default();
    let toc = Toc::default();

    let parts = render_chrome(&config, &toc, "/guides/flags");

    assert!(parts.toc.is_none());
    assert!(
        parts
            .header
            .contains(r#"<a href="/guides" class="docsite-topnav-link" aria-current="page">Guides</a>"#)
    );
    assert!(parts.css.contains("@media screen and (min-width: 52em)"));
}
