use super::{Catalog, Entry, LoadError, Section};
use std::fs;
use tempfile::TempDir;

const DATASET: &str = r#"
{
  "sections": [
    {
      "id": "gamejams",
      "title": "Game Jams",
      "entries": [
        { "type": "project", "projectId": "p1" },
        { "type": "project", "projectId": "ghost", "label": "Lost Jam" },
        { "type": "link", "label": "itch.io", "url": "https://itch.io" },
        { "type": "text", "content": "Made in 48 hours." },
        { "type": "video", "src": "clip.mp4" }
      ]
    },
    { "id": "about", "title": "About / Contact", "entries": [] }
  ],
  "projects": [
    {
      "id": "p1",
      "title": "Orbit",
      "year": 2020,
      "platform": "Web",
      "screenshots": ["s1.png", "s2.mp4"],
      "links": [{ "label": "Play", "url": "https://example.com/orbit" }]
    },
    { "id": "p2", "title": "Drift", "year": "2019" }
  ]
}
"#;

fn catalog() -> Catalog {
    Catalog::from_json_str(DATASET).expect("parse dataset")
}

#[test]
fn parses_every_entry_variant() {
    let catalog = catalog();
    let entries = &catalog.section(0).expect("section").entries;
    assert!(matches!(&entries[0], Entry::Project { project_id, label: None } if project_id == "p1"));
    assert!(matches!(&entries[2], Entry::Link(link) if link.url == "https://itch.io"));
    assert!(matches!(&entries[3], Entry::Text { content } if content == "Made in 48 hours."));
    assert!(matches!(&entries[4], Entry::Unknown { .. }));
}

#[test]
fn year_accepts_numbers_and_strings() {
    let catalog = catalog();
    assert_eq!(catalog.project("p1").and_then(|p| p.year.as_deref()), Some("2020"));
    assert_eq!(catalog.project("p2").and_then(|p| p.year.as_deref()), Some("2019"));
    assert!(catalog.project("p2").expect("p2").screenshots.is_empty());
}

#[test]
fn display_labels_resolve_projects_and_fall_back() {
    let catalog = catalog();
    let entries = &catalog.section(0).expect("section").entries;
    assert_eq!(entries[0].display_label(&catalog), "Orbit (2020) - Web");
    assert_eq!(entries[1].display_label(&catalog), "Lost Jam");
    assert_eq!(entries[2].display_label(&catalog), "itch.io");
    assert!(entries[4].display_label(&catalog).contains("\"video\""));
}

#[test]
fn unlabelled_dangling_project_uses_placeholder() {
    let catalog = Catalog::from_json_str(
        r#"{"sections":[{"id":"a","title":"A","entries":[{"type":"project","projectId":"nope"}]}]}"#,
    )
    .expect("parse");
    let entry = &catalog.section(0).expect("section").entries[0];
    assert_eq!(entry.display_label(&catalog), "(unknown project)");
}

#[test]
fn link_without_url_is_kept_as_unknown() {
    let catalog = Catalog::from_json_str(
        r#"{"sections":[{"id":"a","title":"A","entries":[{"type":"link","label":"x"}]}]}"#,
    )
    .expect("parse");
    let entry = &catalog.section(0).expect("section").entries[0];
    assert!(matches!(entry, Entry::Unknown { .. }));
}

#[test]
fn malformed_projects_degrade_instead_of_failing_the_load() {
    let catalog = Catalog::from_json_str(
        r#"{
          "sections": [],
          "projects": [
            {"id": "p1", "title": "Orbit", "links": [{"label": "itch"}, {"url": "https://example.com"}]},
            {"title": "no id", "year": 2020}
          ]
        }"#,
    )
    .expect("parse");

    let links = &catalog.project("p1").expect("p1").links;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].label, "https://example.com");

    let orphan = &catalog.projects()[1];
    assert!(orphan.id.is_empty());
    assert_eq!(orphan.title, "no id");
}

#[test]
fn find_section_matches_id_or_title() {
    let catalog = catalog();
    assert_eq!(catalog.find_section("gamejams"), Some(0));
    assert_eq!(catalog.find_section("game jams"), Some(0));
    assert_eq!(catalog.find_section("ABOUT / CONTACT"), Some(1));
    assert_eq!(catalog.find_section("GAMEJAMS"), None);
    assert_eq!(catalog.find_section("nonexistent-id"), None);
}

#[test]
fn slug_collapses_separators() {
    let section = Section {
        id: "about".to_string(),
        title: "About / Contact  Me".to_string(),
        entries: Vec::new(),
    };
    assert_eq!(section.slug(), "about_contact_me");
}

#[test]
fn load_reports_missing_and_malformed_files() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("missing.json");
    assert!(matches!(Catalog::load(&missing), Err(LoadError::Read { .. })));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ \"sections\": [").expect("write");
    assert!(matches!(Catalog::load(&broken), Err(LoadError::Parse { .. })));

    let good = dir.path().join("data.json");
    fs::write(&good, DATASET).expect("write");
    let loaded = Catalog::load(&good).expect("load");
    assert_eq!(loaded.section_count(), 2);
}
