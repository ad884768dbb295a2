//! Read-only access to the portfolio dataset.
//!
//! The dataset is a single JSON document with two top-level arrays:
//! `sections` (each owning an ordered list of entries) and `projects`.
//! It is loaded once at startup and never mutated afterwards.
//!
//! Project entries only carry a `projectId`; the project record is
//! resolved lazily through [`Catalog::project`], so several entries (even
//! across sections) can point at the same project.

pub mod stats;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// Failure at the one asynchronous boundary: reading the dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    /// Label falls back to the URL; `None` without a URL.
    fn from_value(raw: &Value) -> Option<Self> {
        let url = string_field(raw, "url")?;
        Some(Link {
            label: string_field(raw, "label").unwrap_or_else(|| url.clone()),
            url,
        })
    }
}

/// A single row of a section.
///
/// `Unknown` keeps the raw JSON of entries whose `type` tag is not
/// recognised so the pane can show a structural dump instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Text { content: String },
    Link(Link),
    Project { project_id: String, label: Option<String> },
    Unknown { raw: Value },
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Entry::from_value(raw))
    }
}

impl Entry {
    fn from_value(raw: Value) -> Self {
        let kind = raw.get("type").and_then(Value::as_str);
        match kind {
            Some("text") => Entry::Text {
                content: string_field(&raw, "content").unwrap_or_default(),
            },
            Some("link") => match Link::from_value(&raw) {
                Some(link) => Entry::Link(link),
                None => Entry::Unknown { raw },
            },
            Some("project") => match string_field(&raw, "projectId") {
                Some(project_id) => Entry::Project {
                    project_id,
                    label: string_field(&raw, "label"),
                },
                None => Entry::Unknown { raw },
            },
            _ => Entry::Unknown { raw },
        }
    }

    /// Single-line label used by the entry pane.
    pub fn display_label(&self, catalog: &Catalog) -> String {
        match self {
            Entry::Text { content } => content.clone(),
            Entry::Link(link) => link.label.clone(),
            Entry::Project { project_id, label } => match catalog.project(project_id) {
                Some(project) => format!(
                    "{} ({}) - {}",
                    project.title,
                    project.year.as_deref().unwrap_or(""),
                    project.platform.as_deref().unwrap_or("Unknown")
                ),
                None => label
                    .clone()
                    .unwrap_or_else(|| "(unknown project)".to_string()),
            },
            Entry::Unknown { raw } => raw.to_string(),
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Section {
    /// Path-like identifier derived from the title: runs of whitespace and
    /// `/` collapse to `_`, then lowercase.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        let mut in_separator = false;
        for ch in self.title.chars() {
            if ch.is_whitespace() || ch == '/' {
                if !in_separator {
                    slug.push('_');
                    in_separator = true;
                }
            } else {
                slug.extend(ch.to_lowercase());
                in_separator = false;
            }
        }
        slug
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "year_as_string")]
    pub year: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default, deserialize_with = "usable_links")]
    pub links: Vec<Link>,
}

/// Links without a URL cannot be opened and are dropped.
fn usable_links<'de, D>(deserializer: D) -> Result<Vec<Link>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .iter()
        .filter_map(|item| {
            let link = Link::from_value(item);
            if link.is_none() {
                log::debug!("dropping project link without url: {item}");
            }
            link
        })
        .collect())
}

/// Datasets write the year either as a number or a string.
fn year_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(year)) => Some(year),
        Some(Value::Number(year)) => Some(year.to_string()),
        _ => None,
    })
}

/// The loaded dataset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    sections: Vec<Section>,
    #[serde(default)]
    projects: Vec<Project>,
}

impl Catalog {
    #[cfg(test)]
    pub fn new(sections: Vec<Section>, projects: Vec<Project>) -> Self {
        Self { sections, projects }
    }

    /// Read and parse the dataset at `path`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_json_str(&contents).map_err(|source| LoadError::Parse {
            path: display,
            source,
        })
    }

    pub fn from_json_str(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Find a section by exact id or case-insensitive title.
    pub fn find_section(&self, query: &str) -> Option<usize> {
        let lowered = query.to_lowercase();
        self.sections
            .iter()
            .position(|section| section.id == query || section.title.to_lowercase() == lowered)
    }
}
