//! Display-only size and count summaries for the pane footers.
//!
//! The numbers are a rough, deterministic estimate; nothing reads the
//! media files to compute them.

use std::fmt;

use super::{Catalog, Entry, Section};

const PROJECT_BASE_KB: u64 = 300;
const SCREENSHOT_KB: u64 = 600;
const LINK_KB: u64 = 5;
const TEXT_CHARS_PER_KB: u64 = 80;
const KB_PER_MB: u64 = 1024;
const BYTES_PER_KB: u64 = 1024;

/// Size hint shown when a pane has no meaningful size.
pub const EMPTY_SIZE_HINT: &str = "~0 KB";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEstimate {
    kb: u64,
}

impl SizeEstimate {
    /// Round a byte count up to whole kilobytes.
    pub fn from_bytes(bytes: u64) -> Self {
        Self {
            kb: bytes.div_ceil(BYTES_PER_KB),
        }
    }

    #[cfg(test)]
    pub fn kb(self) -> u64 {
        self.kb
    }
}

impl fmt::Display for SizeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kb < KB_PER_MB {
            write!(f, "{} KB", self.kb)
        } else {
            write!(f, "{:.1} MB", self.kb as f64 / KB_PER_MB as f64)
        }
    }
}

pub fn estimate_section_size(section: &Section, catalog: &Catalog) -> SizeEstimate {
    let kb = section
        .entries
        .iter()
        .map(|entry| entry_kb(entry, catalog))
        .sum();
    SizeEstimate { kb }
}

fn entry_kb(entry: &Entry, catalog: &Catalog) -> u64 {
    match entry {
        Entry::Project { project_id, .. } => {
            let shots = catalog
                .project(project_id)
                .map(|project| project.screenshots.len() as u64)
                .unwrap_or(0);
            PROJECT_BASE_KB + shots * SCREENSHOT_KB
        }
        Entry::Link(_) => LINK_KB,
        Entry::Text { content } => {
            let chars = content.chars().count() as u64;
            chars.div_ceil(TEXT_CHARS_PER_KB).max(1)
        }
        Entry::Unknown { .. } => 0,
    }
}

/// Footer line of a pane: item count plus a size hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneStats {
    pub items: usize,
    pub size_hint: Option<String>,
}

impl PaneStats {
    pub fn new(items: usize, size: Option<SizeEstimate>) -> Self {
        Self {
            items,
            size_hint: size.map(|size| size.to_string()),
        }
    }
}

impl fmt::Display for PaneStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items - {}",
            self.items,
            self.size_hint.as_deref().unwrap_or(EMPTY_SIZE_HINT)
        )
    }
}
