//! File logging setup.
//!
//! The terminal belongs to the UI, so log records go to a rotating file
//! under `<state dir>/folio/logs`. The returned handle must stay alive for
//! the life of the process or buffered records are lost.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "folio";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const FALLBACK_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to start logger: {0}")]
    Start(#[from] flexi_logger::FlexiLoggerError),
}

/// Default log directory, if the platform has a state or data directory.
pub fn default_log_dir() -> Option<PathBuf> {
    let base = dirs::state_dir().or_else(dirs::data_local_dir)?;
    Some(base.join("folio").join("logs"))
}

/// Lowercased level if recognised, otherwise `None`.
pub fn normalize_level(level: &str) -> Option<&'static str> {
    let lowered = level.trim().to_lowercase();
    LEVELS.iter().copied().find(|candidate| *candidate == lowered)
}

pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle, LogInitError> {
    let resolved = normalize_level(level).unwrap_or(FALLBACK_LEVEL);
    std::fs::create_dir_all(log_dir).map_err(|source| LogInitError::CreateDir {
        path: log_dir.display().to_string(),
        source,
    })?;

    let handle = Logger::try_with_str(resolved)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    if resolved != level.trim().to_lowercase() {
        log::warn!("unknown log level {level:?}, using {FALLBACK_LEVEL}");
    }
    log::info!(
        "folio {} starting, level={resolved} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(handle)
}
