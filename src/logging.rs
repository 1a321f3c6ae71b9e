//! File logging for the `ghosty` binary.
//!
//! Logs go to `<data dir>/logs/ghosty_*.log`, rotated at 1 MiB with three
//! files kept. The level comes from `GHOSTY_LOG` (default `info`). Messages
//! are `event=... key=value` lines and never contain task text.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

/// Environment variable holding the log level
pub const LOG_LEVEL_ENV: &str = "GHOSTY_LOG";
const LOG_FILE_BASENAME: &str = "ghosty";
const LOG_DIR_NAME: &str = "logs";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Keeps the logger alive for the rest of the process
static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unsupported log level `{0}`; expected off|trace|debug|info|warn|error")]
    Level(String),
    #[error("failed to create log directory `{path}`: {source}")]
    Dir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to start logger: {0}")]
    Start(#[from] flexi_logger::FlexiLoggerError),
}

/// Directory the log files are written to
pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_DIR_NAME)
}

/// Start file logging under `data_dir`. A second call is a no-op.
pub fn init_logging(data_dir: &Path) -> Result<(), LoggingError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let level = match std::env::var(LOG_LEVEL_ENV) {
        Ok(raw) => normalize_level(&raw)?,
        Err(_) => "info",
    };
    if level == "off" {
        return Ok(());
    }

    let dir = log_dir(data_dir);
    std::fs::create_dir_all(&dir).map_err(|source| LoggingError::Dir {
        path: dir.clone(),
        source,
    })?;

    let logger = Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::Direct)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    log::info!(
        "event=app_start version={} platform={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        level,
        dir.display()
    );

    let _ = LOGGER.set(logger);
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" | "none" => Ok("off"),
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "" | "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::Level(other.to_string())),
    }
}
