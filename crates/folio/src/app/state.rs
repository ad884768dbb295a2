//! Application state types and core data structures.
//!
//! Defines the App struct which holds everything outside the browsing
//! session itself: load progress, the command bar, the status line,
//! keybindings, and the hit areas recorded by the last render.

use std::io;

use ratatui::layout::{Position, Rect};

use crate::catalog::{Catalog, LoadError};
use crate::config::KeymapConfig;
use crate::keymap::{chord_or_default, KeyChord};
use crate::session::{Effect, Session, SessionOptions};
use crate::theme::Skin;

/// Dataset load progress. A failed load is terminal.
pub enum LoadState {
    Loading,
    Ready(Box<Session>),
    Failed(String),
}

/// Parsed keybindings. A `None` chord is never matched.
#[derive(Debug, Clone)]
pub struct Keybindings {
    pub toggle_focus: Option<KeyChord>,
    pub cycle_skin: Option<KeyChord>,
    pub activate: Option<KeyChord>,
    pub command: Option<KeyChord>,
    pub exit: Option<KeyChord>,
}

impl Keybindings {
    pub fn from_config(keymap: &KeymapConfig) -> Self {
        Self {
            toggle_focus: chord_or_default(&keymap.toggle_focus, "tab"),
            cycle_skin: chord_or_default(&keymap.cycle_skin, "f9"),
            activate: chord_or_default(&keymap.activate, "enter"),
            command: chord_or_default(&keymap.command, ":"),
            exit: chord_or_default(&keymap.exit, "ctrl+c"),
        }
    }
}

/// Clickable regions captured during the last render.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub left_pane: Option<Rect>,
    pub right_pane: Option<Rect>,
    /// Row areas paired with the section index they show.
    pub section_rows: Vec<(Rect, usize)>,
    /// Row areas paired with the entry index they show.
    pub entry_rows: Vec<(Rect, usize)>,
    pub popup: Option<Rect>,
    pub prev_button: Option<Rect>,
    pub next_button: Option<Rect>,
    pub close_button: Option<Rect>,
    /// Popup link rows paired with (label, url).
    pub popup_links: Vec<(Rect, String, String)>,
}

impl HitAreas {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn rect_contains(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|area| area.contains(Position::new(column, row)))
}

pub fn row_at(rows: &[(Rect, usize)], column: u16, row: u16) -> Option<usize> {
    rows.iter()
        .find(|(area, _)| area.contains(Position::new(column, row)))
        .map(|(_, index)| *index)
}

pub type LinkOpener = Box<dyn Fn(&str) -> io::Result<()>>;

/// Main application state container.
///
/// Methods are split across input (event handling) and render
/// (UI drawing).
pub struct App {
    pub load: LoadState,
    pub session_options: SessionOptions,
    pub command_active: bool,
    pub command_input: String,
    pub output: Option<String>,
    pub should_quit: bool,
    pub keys: Keybindings,
    pub hits: HitAreas,
    pub open_link: LinkOpener,
}

pub const OUTPUT_MAX_LINES: usize = 6;
pub const BOTTOM_HORIZONTAL_PADDING: u16 = 1;

impl App {
    pub fn new(keys: Keybindings, session_options: SessionOptions) -> Self {
        Self {
            load: LoadState::Loading,
            session_options,
            command_active: false,
            command_input: String::new(),
            output: None,
            should_quit: false,
            keys,
            hits: HitAreas::default(),
            open_link: Box::new(|url: &str| webbrowser::open(url)),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.load {
            LoadState::Ready(session) => Some(&**session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match &mut self.load {
            LoadState::Ready(session) => Some(&mut **session),
            _ => None,
        }
    }

    /// Active skin, falling back to the startup skin while loading.
    pub fn skin(&self) -> Skin {
        self.session()
            .map(Session::skin)
            .unwrap_or(self.session_options.skin)
    }

    /// Consume the loader result. Later results are ignored.
    pub fn finish_loading(&mut self, result: Result<Catalog, LoadError>) {
        if !matches!(self.load, LoadState::Loading) {
            return;
        }
        self.load = match result {
            Ok(catalog) => {
                log::info!(
                    "loaded {} sections and {} projects",
                    catalog.section_count(),
                    catalog.projects().len()
                );
                LoadState::Ready(Box::new(Session::new(
                    catalog,
                    self.session_options.clone(),
                )))
            }
            Err(err) => {
                log::error!("{err}");
                LoadState::Failed(err.to_string())
            }
        };
    }

    /// Carry out a side effect requested by the session.
    pub fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::OpenUrl { label, url } => match (self.open_link)(&url) {
                Ok(()) => {
                    log::info!("opened {url}");
                    self.set_output(format!("Opened {label} in your browser."));
                }
                Err(err) => {
                    log::warn!("failed to open {url}: {err}");
                    self.set_output(format!("Failed to open {label}: {err} (URL: {url})"));
                }
            },
        }
    }

    /// Set the output message shown above the command bar.
    pub fn set_output(&mut self, message: String) {
        let trimmed = message.trim().to_string();
        if trimmed.is_empty() {
            self.output = None;
        } else {
            self.output = Some(trimmed);
        }
    }
}
