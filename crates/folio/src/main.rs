mod app;
mod carousel;
mod catalog;
mod commands;
mod config;
mod events;
mod keymap;
mod logging;
mod session;
mod state;
mod theme;

#[cfg(test)]
mod test_utils;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::app::RunOptions;
use crate::config::load_config;
use crate::session::SessionOptions;
use crate::state::{load_state, state_path};
use crate::theme::Skin;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Two-pane terminal browser for a portfolio dataset"
)]
struct Cli {
    #[arg(default_value = "data.json", help = "Dataset JSON file")]
    data: PathBuf,

    #[arg(long, help = "Media directory (default: media/ next to the dataset)")]
    media_dir: Option<PathBuf>,

    #[arg(long, value_parser = parse_skin, help = "Skin to start with")]
    skin: Option<Skin>,

    #[arg(long, help = "Log level (error, warn, info, debug, trace)")]
    log_level: Option<String>,
}

fn parse_skin(name: &str) -> Result<Skin, String> {
    Skin::from_name(name)
        .ok_or_else(|| format!("unknown skin '{name}' (one of: {})", Skin::names().join(", ")))
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let data_dir = cli
        .data
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let config = load_config(&data_dir);

    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    let _logger = match logging::default_log_dir() {
        Some(dir) => match logging::init_logging(level, &dir) {
            Ok(handle) => Some(handle),
            Err(err) => {
                eprintln!("folio: logging disabled: {err}");
                None
            }
        },
        None => None,
    };

    let state_path = state_path();
    let persisted = state_path
        .as_deref()
        .and_then(load_state)
        .and_then(|state| state.skin);
    let skin = cli.skin.or(persisted).unwrap_or_default();

    // Config paths are relative to the dataset, CLI paths to the cwd.
    let media_root = match cli.media_dir {
        Some(dir) => dir,
        None => config
            .browser
            .media_dir
            .clone()
            .map(|dir| data_dir.join(dir))
            .unwrap_or_else(|| data_dir.join("media")),
    };

    let session = SessionOptions {
        media_root,
        root_label: config.browser.root_label.clone(),
        state_path,
        skin,
    };
    app::run(RunOptions {
        data_path: cli.data,
        config,
        session,
    })
}
