//! Modal media carousel for a single project.
//!
//! A `Carousel` exists only while the project modal is open. The owning
//! session keeps it in an `Option`; dropping it is the only way to
//! dismiss the modal, and key routing to the carousel (arrows, Esc) is
//! gated on that option, so no capture outlives the modal.
//!
//! Indices wrap in both directions. Loading an item probes its file under
//! the media root; a failed probe replaces that item with a fallback view
//! without touching the index.

mod media;

pub use media::{FsProbe, MediaKind, MediaProbe, MediaView};

use std::path::{Path, PathBuf};

use crate::catalog::Project;

/// Why the modal went away. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    Background,
    Cancel,
    Replaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    fn delta(self) -> isize {
        match self {
            Step::Previous => -1,
            Step::Next => 1,
        }
    }
}

/// `((current + delta) mod len + len) mod len`; `len` must be non-zero.
pub fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    let len = len as isize;
    ((((current as isize + delta) % len) + len) % len) as usize
}

#[derive(Debug, Clone)]
pub struct Carousel {
    project: Project,
    media_root: PathBuf,
    current_index: usize,
    view: MediaView,
}

impl Carousel {
    pub fn open(project: &Project, media_root: &Path, probe: &dyn MediaProbe) -> Self {
        let mut carousel = Self {
            project: project.clone(),
            media_root: media_root.to_path_buf(),
            current_index: 0,
            view: MediaView::Placeholder,
        };
        carousel.load_current(probe);
        carousel
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn project_id(&self) -> &str {
        &self.project.id
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.project.screenshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.project.screenshots.is_empty()
    }

    pub fn view(&self) -> &MediaView {
        &self.view
    }

    /// `"2 / 5"` style position, absent when there is nothing to show.
    pub fn caption(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(format!("{} / {}", self.current_index + 1, self.len()))
        }
    }

    pub fn step(&mut self, step: Step, probe: &dyn MediaProbe) {
        if self.is_empty() {
            return;
        }
        self.current_index = wrap_index(self.current_index, step.delta(), self.len());
        self.load_current(probe);
    }

    fn load_current(&mut self, probe: &dyn MediaProbe) {
        let Some(filename) = self.project.screenshots.get(self.current_index) else {
            self.view = MediaView::Placeholder;
            return;
        };
        let source = self.media_root.join(filename);
        self.view = match probe.probe(&source) {
            Ok(bytes) => MediaView::Ready {
                kind: MediaKind::classify(filename),
                filename: filename.clone(),
                source,
                bytes,
            },
            Err(err) => {
                log::warn!("media {} failed to load: {err}", source.display());
                MediaView::Failed { source }
            }
        };
    }
}
