//! Core logging bootstrap and safety policy.
//!
//! # Responsibility
//! - Resolve logging settings from explicit values or the environment.
//! - Initialize file-based rolling logs exactly once per process.
//! - Keep model events metadata-only (ids and lengths, never names/titles).
//!
//! # Invariants
//! - Logging init is idempotent for identical settings.
//! - Re-initialization with a different level or directory is rejected.
//! - Logging initialization must not panic.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "MASTHEAD_LOG_LEVEL";
/// Environment variable holding the absolute log directory.
pub const LOG_DIR_ENV: &str = "MASTHEAD_LOG_DIR";

const LOG_FILE_BASENAME: &str = "masthead";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 5;
const PANIC_SUMMARY_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogging {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Supported log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Parses a level name case-insensitively; `warning` is accepted for `warn`.
    pub fn parse(value: &str) -> Result<Self, String> {
        let wanted = value.trim().to_ascii_lowercase();
        if wanted == "warning" {
            return Ok(Self::Warn);
        }
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| {
                format!("unsupported log level `{wanted}`; expected trace|debug|info|warn|error")
            })
    }

    /// Filter spec understood by `flexi_logger`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

/// Validated logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    level: LogLevel,
    log_dir: PathBuf,
}

impl LogSettings {
    /// Builds settings from a level name and an absolute directory.
    ///
    /// # Errors
    /// - Returns an error when `level` is not trace|debug|info|warn|error.
    /// - Returns an error when `log_dir` is blank or relative.
    pub fn new(level: &str, log_dir: &str) -> Result<Self, String> {
        let level = LogLevel::parse(level)?;
        let log_dir = match log_dir.trim() {
            "" => return Err("log_dir cannot be empty".to_string()),
            dir if Path::new(dir).is_absolute() => PathBuf::from(dir),
            dir => return Err(format!("log_dir must be an absolute path, got `{dir}`")),
        };
        Ok(Self { level, log_dir })
    }

    /// Reads `MASTHEAD_LOG_LEVEL` and `MASTHEAD_LOG_DIR`.
    ///
    /// The level falls back to [`default_log_level`]; the directory is required.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let level = lookup(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
        let log_dir = lookup(LOG_DIR_ENV).ok_or_else(|| format!("{LOG_DIR_ENV} is not set"))?;
        Self::new(&level, &log_dir)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    fn conflict_with(&self, requested: &Self) -> Option<String> {
        if self.log_dir != requested.log_dir {
            return Some(format!(
                "logging already initialized at `{}`; refusing to switch to `{}`",
                self.log_dir.display(),
                requested.log_dir.display()
            ));
        }
        (self.level != requested.level).then(|| {
            format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                self.level.as_str(),
                requested.level.as_str()
            )
        })
    }
}

/// Initializes core logging.
///
/// Returns `Ok(())` when logging is active, or a human-readable error string
/// when initialization fails.
///
/// # Errors
/// - Returns an error when logging is already active with other settings.
/// - Returns an error when the directory cannot be created.
/// - Returns an error when logger backend setup fails.
pub fn init_logging(settings: &LogSettings) -> Result<(), String> {
    let active = ACTIVE.get_or_try_init(|| start_logger(settings))?;
    match active.settings.conflict_with(settings) {
        Some(conflict) => Err(conflict),
        None => Ok(()),
    }
}

/// Returns active `(level, log_dir)`, or `None` before initialization.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE.get().map(|active| {
        (
            active.settings.level.as_str(),
            active.settings.log_dir.clone(),
        )
    })
}

/// Returns the default log level: `debug` in debug builds, `info` in release.
pub fn default_log_level() -> &'static str {
    LogLevel::for_build().as_str()
}

fn start_logger(settings: &LogSettings) -> Result<ActiveLogging, String> {
    let dir = settings.log_dir.as_path();
    std::fs::create_dir_all(dir)
        .map_err(|err| format!("failed to create log directory `{}`: {err}", dir.display()))?;

    let handle = Logger::try_with_str(settings.level.as_str())
        .map_err(|err| format!("invalid log level `{}`: {err}", settings.level.as_str()))?
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    PANIC_HOOK.get_or_init(install_panic_hook);

    info!(
        "event=core_init module=core status=ok version={} debug_assertions={} level={} log_dir={}",
        crate::core_version(),
        cfg!(debug_assertions),
        settings.level.as_str(),
        dir.display()
    );

    Ok(ActiveLogging {
        settings: settings.clone(),
        _handle: handle,
    })
}

fn install_panic_hook() {
    let chained = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map_or_else(|| "unknown".to_string(), |loc| format!("{}:{}", loc.file(), loc.line()));
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            summarize_panic(info)
        );
        chained(info);
    }));
}

fn summarize_panic(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    let text: &str = match (payload.downcast_ref::<&str>(), payload.downcast_ref::<String>()) {
        (Some(message), _) => message,
        (None, Some(message)) => message,
        (None, None) => "non-string panic payload",
    };
    single_line_prefix(text, PANIC_SUMMARY_CHARS)
}

// Panic payloads may embed user text such as titles.
fn single_line_prefix(text: &str, limit: usize) -> String {
    let mut chars = text
        .chars()
        .map(|ch| if matches!(ch, '\n' | '\r') { ' ' } else { ch });
    let mut summary: String = chars.by_ref().take(limit).collect();
    if chars.next().is_some() {
        summary.push_str("...");
    }
    summary
}
