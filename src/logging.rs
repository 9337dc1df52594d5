//! Logging module for debug mode
//!
//! Provides logging module that writes to a temp-dir file
//! with timestamps when --debug is specified

use log::{debug, error, info, trace, warn};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;

// stdout belongs to the TUI, so logs only ever go to a file
static INIT: Once = Once::new();

pub const LOG_FILE_NAME: &str = "regexplorer-debug.log";

/// Environment variable that overrides the default filters, in `RUST_LOG` syntax
pub const LOG_FILTER_ENV: &str = "REGEXPLORER_LOG";

/// Where the debug log is written
pub fn debug_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Initializes logging when debug mode is enabled
/// Creates a file in the temp directory and sets up logger with timestamps
pub fn init_debug_logging() -> crate::Result<PathBuf> {
    let log_path = debug_log_path();

    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .map_err(|e| crate::RegexplorerError::FileAccessError {
            path: log_path.to_string_lossy().to_string(),
            reason: format!("Failed to create log file: {}", e),
        })?;

    INIT.call_once(move || {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .filter_module("crossterm", log::LevelFilter::Warn)
            .filter_module("ratatui", log::LevelFilter::Warn)
            .parse_env(LOG_FILTER_ENV)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} {:<5} {} - {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.module_path().unwrap_or("regexplorer"),
                    record.args()
                )
            })
            .init();
    });

    info!("Debug logging initialized to: {}", log_path.display());

    Ok(log_path)
}

/// Log a debug message if debug mode is enabled
pub fn debug_log(msg: &str) {
    debug!("{}", msg);
}

/// Log an info message if debug mode is enabled
pub fn info_log(msg: &str) {
    info!("{}", msg);
}

/// Log a warning message if debug mode is enabled
pub fn warn_log(msg: &str) {
    warn!("{}", msg);
}

/// Log an error message if debug mode is enabled
pub fn error_log(msg: &str) {
    error!("{}", msg);
}

/// Log a trace message if debug mode is enabled
pub fn trace_log(msg: &str) {
    trace!("{}", msg);
}
