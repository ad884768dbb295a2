use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::carousel::MediaProbe;
use crate::catalog::Catalog;
use crate::session::{Session, SessionOptions};
use crate::theme::Skin;

/// Probe that succeeds for every file except the listed names.
#[derive(Debug, Default)]
pub struct StubProbe {
    missing: HashSet<String>,
}

impl StubProbe {
    pub fn missing(names: &[&str]) -> Self {
        Self {
            missing: names.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl MediaProbe for StubProbe {
    fn probe(&self, source: &Path) -> io::Result<u64> {
        let name = source
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        if self.missing.contains(&name) {
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
        } else {
            Ok(1024)
        }
    }
}

/// Three sections: a single-project section, a mixed one and an empty one.
pub fn sample_catalog() -> Catalog {
    Catalog::from_json_str(
        r#"
{
  "sections": [
    {
      "id": "a",
      "title": "Games",
      "entries": [{ "type": "project", "projectId": "p1" }]
    },
    {
      "id": "misc",
      "title": "Odds and Ends",
      "entries": [
        { "type": "text", "content": "Hello there." },
        { "type": "link", "label": "Blog", "url": "https://example.com/blog" },
        { "type": "project", "projectId": "gone", "label": "Archived" },
        { "type": "project", "projectId": "p2" }
      ]
    },
    { "id": "empty", "title": "Empty", "entries": [] }
  ],
  "projects": [
    { "id": "p1", "title": "X", "year": 2020, "screenshots": ["s1.png", "s2.mp4"] },
    { "id": "p2", "title": "Y", "year": 2021, "role": "Lead", "screenshots": [] }
  ]
}
"#,
    )
    .expect("sample catalog")
}

/// Session over [`sample_catalog`] with a stub probe.
pub fn sample_session(state_path: Option<PathBuf>) -> Session {
    Session::with_probe(
        sample_catalog(),
        SessionOptions {
            media_root: PathBuf::from("media"),
            root_label: "~/portfolio".to_string(),
            state_path,
            skin: Skin::Classic,
        },
        Box::new(StubProbe::default()),
    )
}
