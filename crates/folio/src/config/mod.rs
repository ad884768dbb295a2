//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the dataset-local file taking
//! precedence:
//! 1. User-level: `<config dir>/folio/config.toml`
//! 2. Dataset-level: `<data dir>/.folio/config.toml`
//!
//! Supports keymap customization, browser labels and the media directory,
//! and the log level. Uses TOML format with serde.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_TOGGLE_FOCUS: &str = "tab";
const DEFAULT_CYCLE_SKIN: &str = "f9";
const DEFAULT_ACTIVATE: &str = "enter";
const DEFAULT_COMMAND: &str = ":";
const DEFAULT_EXIT: &str = "ctrl+c";
const DEFAULT_ROOT_LABEL: &str = "/home/.../portfolio";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub keymap: KeymapConfig,
    pub browser: BrowserConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub struct KeymapConfig {
    pub toggle_focus: String,
    pub cycle_skin: String,
    pub activate: String,
    pub command: String,
    pub exit: String,
}

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub root_label: String,
    /// Relative paths resolve against the dataset directory.
    pub media_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    keymap: Option<RawKeymap>,
    browser: Option<RawBrowser>,
    log: Option<RawLog>,
}

#[derive(Debug, Default, Deserialize)]
struct RawKeymap {
    #[serde(alias = "toggleFocus")]
    toggle_focus: Option<String>,
    #[serde(alias = "cycleSkin")]
    cycle_skin: Option<String>,
    activate: Option<String>,
    command: Option<String>,
    exit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBrowser {
    #[serde(alias = "rootLabel")]
    root_label: Option<String>,
    #[serde(alias = "mediaDir")]
    media_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLog {
    level: Option<String>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("ignoring invalid config {}: {err}", path.display());
            None
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Dataset-local value first, then user value.
fn layered(local: Option<&Option<String>>, user: Option<&Option<String>>) -> Option<String> {
    local
        .and_then(non_empty)
        .or_else(|| user.and_then(non_empty))
}

fn merge_config(user: Option<RawConfig>, local: Option<RawConfig>) -> Config {
    let local_keymap = local.as_ref().and_then(|c| c.keymap.as_ref());
    let user_keymap = user.as_ref().and_then(|c| c.keymap.as_ref());
    let toggle_focus = layered(
        local_keymap.map(|k| &k.toggle_focus),
        user_keymap.map(|k| &k.toggle_focus),
    )
    .unwrap_or_else(|| DEFAULT_TOGGLE_FOCUS.to_string());
    let cycle_skin = layered(
        local_keymap.map(|k| &k.cycle_skin),
        user_keymap.map(|k| &k.cycle_skin),
    )
    .unwrap_or_else(|| DEFAULT_CYCLE_SKIN.to_string());
    let activate = layered(
        local_keymap.map(|k| &k.activate),
        user_keymap.map(|k| &k.activate),
    )
    .unwrap_or_else(|| DEFAULT_ACTIVATE.to_string());
    let command = layered(
        local_keymap.map(|k| &k.command),
        user_keymap.map(|k| &k.command),
    )
    .unwrap_or_else(|| DEFAULT_COMMAND.to_string());
    let exit = layered(local_keymap.map(|k| &k.exit), user_keymap.map(|k| &k.exit))
        .unwrap_or_else(|| DEFAULT_EXIT.to_string());

    let local_browser = local.as_ref().and_then(|c| c.browser.as_ref());
    let user_browser = user.as_ref().and_then(|c| c.browser.as_ref());
    let root_label = layered(
        local_browser.map(|b| &b.root_label),
        user_browser.map(|b| &b.root_label),
    )
    .unwrap_or_else(|| DEFAULT_ROOT_LABEL.to_string());
    let media_dir = layered(
        local_browser.map(|b| &b.media_dir),
        user_browser.map(|b| &b.media_dir),
    )
    .map(PathBuf::from);

    let level = layered(
        local.as_ref().and_then(|c| c.log.as_ref()).map(|l| &l.level),
        user.as_ref().and_then(|c| c.log.as_ref()).map(|l| &l.level),
    )
    .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    Config {
        keymap: KeymapConfig {
            toggle_focus,
            cycle_skin,
            activate,
            command,
            exit,
        },
        browser: BrowserConfig {
            root_label,
            media_dir,
        },
        log: LogConfig { level },
    }
}

pub fn local_config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(".folio").join("config.toml")
}

pub fn user_config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("folio").join("config.toml"))
}

/// Load config for a dataset living in `data_dir`.
pub fn load_config(data_dir: &Path) -> Config {
    load_config_from(user_config_path().as_deref(), &local_config_path(data_dir))
}

pub fn load_config_from(user_path: Option<&Path>, local_path: &Path) -> Config {
    let local_config = read_toml(local_path);
    let user_config = user_path.and_then(read_toml);
    merge_config(user_config, local_config)
}

#[cfg(test)]
mod tests;
