//! Logging bootstrap for the contact book.
//!
//! # Responsibility
//! - Initialize rolling file logs once per process.
//! - Keep log events metadata-only: contact field values are never logged.
//!
//! # Invariants
//! - Initialization is idempotent for the same level and directory.
//! - Re-initialization with a different level or directory is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "contactbook";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Failure to configure or start logging.
#[derive(Debug)]
pub enum LoggingError {
    UnsupportedLevel(String),
    InvalidDir(String),
    CreateDir {
        dir: PathBuf,
        source: std::io::Error,
    },
    Backend(flexi_logger::FlexiLoggerError),
    Conflict {
        setting: &'static str,
        active: String,
        requested: String,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidDir(message) => write!(f, "{message}"),
            Self::CreateDir { dir, source } => write!(
                f,
                "failed to create log directory `{}`: {source}",
                dir.display()
            ),
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
            Self::Conflict {
                setting,
                active,
                requested,
            } => write!(
                f,
                "logging already initialized with {setting} `{active}`; refusing to switch to `{requested}`"
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

/// Initializes file logging with `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - `UnsupportedLevel` / `InvalidDir` for bad input.
/// - `CreateDir` / `Backend` when the directory or logger cannot be set up.
/// - `Conflict` when logging is already active with another configuration.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;
    let log_dir = normalize_log_dir(log_dir)?;

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, &log_dir))?;

    if state.log_dir != log_dir {
        return Err(LoggingError::Conflict {
            setting: "directory",
            active: state.log_dir.display().to_string(),
            requested: log_dir.display().to_string(),
        });
    }
    if state.level != level {
        return Err(LoggingError::Conflict {
            setting: "level",
            active: state.level.to_string(),
            requested: level.to_string(),
        });
    }

    Ok(())
}

/// Returns `(level, log_dir)` when logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, log_dir: &Path) -> Result<LoggingState, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        dir: log_dir.to_path_buf(),
        source,
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(LoggingError::Backend)?
        .log_to_file(FileSpec::default().directory(log_dir).basename(LOG_FILE_BASENAME))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(LoggingError::Backend)?;

    install_panic_hook_once();

    info!(
        "event=app_start module=logging status=ok platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "event=logging_init module=logging status=ok level={} log_dir={}",
        level,
        log_dir.display()
    );

    Ok(LoggingState {
        level,
        log_dir: log_dir.to_path_buf(),
        _logger: logger,
    })
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::InvalidDir(
            "log directory cannot be empty".to_string(),
        ));
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::InvalidDir(format!(
            "log directory must be an absolute path, got `{trimmed}`"
        )));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Panic payloads may echo user input; cap and flatten before logging.
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
            message.clone()
        } else {
            "non-string panic payload".to_string()
        };
        error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location,
            sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous_hook(panic_info);
    }));
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut truncated: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}
