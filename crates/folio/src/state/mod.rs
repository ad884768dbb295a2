//! Persistent user preferences.
//!
//! Stored in `<config dir>/folio/state.toml`. Only the active skin survives
//! across sessions; navigation state is not persisted.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::theme::Skin;


#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub skin: Option<Skin>,
}

#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Deserialize)]
struct RawState {
    skin: Option<String>,
}

pub fn state_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("folio").join("state.toml"))
}

pub fn load_state(path: &Path) -> Option<AppState> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }

    let raw: RawState = match toml::from_str(&contents) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("ignoring unreadable state file {}: {err}", path.display());
            return None;
        }
    };
    let skin = raw.skin.as_deref().and_then(|name| {
        let skin = Skin::from_name(name);
        if skin.is_none() {
            log::warn!("ignoring unknown persisted skin {name:?}");
        }
        skin
    });

    Some(AppState { skin })
}

pub fn save_state(path: &Path, state: &AppState) -> Result<(), StateError> {
    let write_err = |source| StateError::Write {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut contents = String::new();
    if let Some(skin) = state.skin {
        let encoded = toml::Value::String(skin.name().to_string()).to_string();
        contents.push_str(&format!("skin = {encoded}\n"));
    }

    fs::write(path, contents).map_err(write_err)
}

pub fn record_skin(path: &Path, skin: Skin) -> Result<(), StateError> {
    let mut state = load_state(path).unwrap_or_default();
    state.skin = Some(skin);
    save_state(path, &state)
}
