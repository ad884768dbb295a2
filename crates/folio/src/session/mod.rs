//! Navigation state machine and the session context that owns it.
//!
//! A `Session` exists once the dataset has loaded. It owns everything the
//! UI mutates: pane focus, section/entry selection, what the right pane
//! displays, the open carousel (if any), and the active skin. Every
//! operation goes through `&mut Session`; there is no ambient state.
//!
//! Invariants:
//! - `selected_section`, when set, indexes the catalog's sections.
//! - `selected_entry`, when set, indexes the selected section's entries and
//!   is cleared whenever the section changes.
//! - out-of-range requests are silent no-ops.

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use crate::carousel::{Carousel, DismissReason, FsProbe, MediaProbe, Step};
use crate::catalog::stats::{estimate_section_size, PaneStats};
use crate::catalog::{Catalog, Entry, Section};
use crate::state::{record_skin, StateError};
use crate::theme::Skin;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Left,
    Right,
}

impl Pane {
    pub fn toggled(self) -> Self {
        match self {
            Pane::Left => Pane::Right,
            Pane::Right => Pane::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub focused_pane: Pane,
    pub selected_section: Option<usize>,
    pub selected_entry: Option<usize>,
}

/// What the right pane currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RightPane {
    /// Entries of the selected section.
    Listing,
    /// Command output lines, replacing the listing until the next section
    /// selection.
    Output(Vec<String>),
}

/// Side effects the session cannot perform itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenUrl { label: String, url: String },
}

/// Startup parameters for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub media_root: PathBuf,
    pub root_label: String,
    /// Where the skin preference is persisted; `None` disables persistence.
    pub state_path: Option<PathBuf>,
    pub skin: Skin,
}

pub struct Session {
    catalog: Catalog,
    nav: NavigationState,
    right: RightPane,
    left_stats: PaneStats,
    right_stats: PaneStats,
    modal: Option<Carousel>,
    skin: Skin,
    media_root: PathBuf,
    root_label: String,
    state_path: Option<PathBuf>,
    probe: Box<dyn MediaProbe>,
}

impl Session {
    pub fn new(catalog: Catalog, options: SessionOptions) -> Self {
        Self::with_probe(catalog, options, Box::new(FsProbe))
    }

    pub fn with_probe(
        catalog: Catalog,
        options: SessionOptions,
        probe: Box<dyn MediaProbe>,
    ) -> Self {
        let left_stats = PaneStats::new(catalog.section_count(), None);
        let mut session = Self {
            catalog,
            nav: NavigationState::default(),
            right: RightPane::Listing,
            left_stats: left_stats.clone(),
            right_stats: PaneStats::new(0, None),
            modal: None,
            skin: options.skin,
            media_root: options.media_root,
            root_label: options.root_label,
            state_path: options.state_path,
            probe,
        };
        session.select_section(0);
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn nav(&self) -> NavigationState {
        self.nav
    }

    pub fn right_pane(&self) -> &RightPane {
        &self.right
    }

    pub fn left_stats(&self) -> &PaneStats {
        &self.left_stats
    }

    pub fn right_stats(&self) -> &PaneStats {
        &self.right_stats
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.nav
            .selected_section
            .and_then(|index| self.catalog.section(index))
    }

    pub fn left_path(&self) -> String {
        self.root_label.clone()
    }

    pub fn right_path(&self) -> String {
        match self.current_section() {
            Some(section) => format!("{}/{}", self.root_label, section.slug()),
            None => self.root_label.clone(),
        }
    }

    /// Select a section and redraw both panes with fresh stats.
    pub fn select_section(&mut self, index: usize) {
        let Some(section) = self.catalog.section(index) else {
            return;
        };
        let size = estimate_section_size(section, &self.catalog);
        self.right_stats = PaneStats::new(section.entries.len(), Some(size));
        self.left_stats = PaneStats::new(self.catalog.section_count(), None);
        self.nav.selected_section = Some(index);
        self.nav.selected_entry = None;
        self.right = RightPane::Listing;
        log::debug!("selected section {index} ({})", section.id);
    }

    /// Mark one entry of the current section as selected.
    pub fn select_entry(&mut self, index: usize) -> bool {
        let Some(section) = self.current_section() else {
            return false;
        };
        if index >= section.entries.len() {
            return false;
        }
        self.nav.selected_entry = Some(index);
        true
    }

    pub fn set_focus(&mut self, pane: Pane) {
        self.nav.focused_pane = pane;
    }

    pub fn toggle_focus(&mut self) {
        self.nav.focused_pane = self.nav.focused_pane.toggled();
    }

    /// Arrow-key navigation inside the focused pane, clamped at the ends.
    pub fn move_selection(&mut self, delta: isize) {
        match self.nav.focused_pane {
            Pane::Left => {
                let count = self.catalog.section_count();
                if count == 0 {
                    return;
                }
                let target = match self.nav.selected_section {
                    Some(current) => clamp_step(current, delta, count),
                    None => 0,
                };
                if Some(target) != self.nav.selected_section {
                    self.select_section(target);
                }
            }
            Pane::Right => {
                if self.right != RightPane::Listing {
                    return;
                }
                let count = self.current_section().map_or(0, |s| s.entries.len());
                if count == 0 {
                    return;
                }
                let target = match self.nav.selected_entry {
                    Some(current) => clamp_step(current, delta, count),
                    None => 0,
                };
                self.select_entry(target);
            }
        }
    }

    /// Act on the selected entry when the right pane has focus.
    ///
    /// Projects open the carousel (nothing happens if the reference does
    /// not resolve); links are handed back as an [`Effect`].
    pub fn activate_selected_entry(&mut self) -> Option<Effect> {
        if self.nav.focused_pane != Pane::Right {
            return None;
        }
        let entry = self
            .current_section()
            .zip(self.nav.selected_entry)
            .and_then(|(section, index)| section.entries.get(index))
            .cloned()?;
        match entry {
            Entry::Project { project_id, .. } => {
                self.open_project(&project_id);
                None
            }
            Entry::Link(link) => Some(Effect::OpenUrl {
                label: link.label,
                url: link.url,
            }),
            Entry::Text { .. } | Entry::Unknown { .. } => None,
        }
    }

    /// Pointer activation on a section row.
    pub fn click_section(&mut self, index: usize) {
        if index >= self.catalog.section_count() {
            return;
        }
        self.select_section(index);
        self.set_focus(Pane::Right);
    }

    /// Pointer activation on an entry row: focus, select, then activate.
    pub fn click_entry(&mut self, index: usize) -> Option<Effect> {
        self.set_focus(Pane::Right);
        if !self.select_entry(index) {
            return None;
        }
        self.activate_selected_entry()
    }

    /// Replace the right pane with command output.
    pub fn show_output(&mut self, lines: Vec<String>) {
        self.right_stats = PaneStats::new(lines.len(), None);
        self.right = RightPane::Output(lines);
    }

    /// Re-render the current section, if any.
    pub fn relist(&mut self) {
        if let Some(index) = self.nav.selected_section {
            self.select_section(index);
        }
    }

    pub fn modal(&self) -> Option<&Carousel> {
        self.modal.as_ref()
    }

    /// Open the carousel for `project_id`. Any open carousel is dropped
    /// first. Returns false when the project does not resolve.
    pub fn open_project(&mut self, project_id: &str) -> bool {
        let Some(project) = self.catalog.project(project_id).cloned() else {
            log::debug!("project {project_id} does not resolve");
            return false;
        };
        if self.modal.is_some() {
            self.close_modal(DismissReason::Replaced);
        }
        self.modal = Some(Carousel::open(
            &project,
            &self.media_root,
            self.probe.as_ref(),
        ));
        log::debug!("opened carousel for {project_id}");
        true
    }

    pub fn step_modal(&mut self, step: Step) {
        if let Some(modal) = self.modal.as_mut() {
            modal.step(step, self.probe.as_ref());
        }
    }

    pub fn close_modal(&mut self, reason: DismissReason) {
        if let Some(modal) = self.modal.take() {
            log::debug!("closed carousel for {} ({reason:?})", modal.project_id());
        }
    }

    /// Apply a skin and persist it. The skin stays applied even if the
    /// preference cannot be written.
    pub fn apply_skin(&mut self, skin: Skin) -> Result<(), StateError> {
        self.skin = skin;
        log::info!("skin set to {}", skin.name());
        match &self.state_path {
            Some(path) => record_skin(path, skin),
            None => Ok(()),
        }
    }

    pub fn cycle_skin(&mut self) -> Result<Skin, StateError> {
        let next = self.skin.next();
        self.apply_skin(next)?;
        Ok(next)
    }
}

fn clamp_step(current: usize, delta: isize, count: usize) -> usize {
    let target = current as isize + delta;
    target.clamp(0, count as isize - 1) as usize
}
