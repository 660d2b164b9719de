/// Engine facade: process-wide services shared by every interactor.
///
/// Only the logger lives here: the interaction core itself is stateless
/// and owned by the caller. The logger is stored in a `OnceLock<RwLock<_>>`
/// so it can be swapped at runtime (tests capture entries this way).

use std::panic::Location;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::error::PsyLensError;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (lazily initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

/// Access point for crate-wide services.
///
/// # Example
///
/// ```no_run
/// use psy_lens_interaction::psylens::Engine;
/// use psy_lens_interaction::psylens::log::{DefaultLogger, LogSeverity};
///
/// // Silence per-tick target changes in release builds
/// Engine::set_logger(DefaultLogger::with_min_severity(LogSeverity::Info));
/// ```
pub struct Engine;

impl Engine {
    /// Log an error under `source` and hand it back, so call sites can
    /// write `return Err(Engine::log_and_return_error(..))`.
    ///
    /// The entry carries the file:line of the caller.
    #[track_caller]
    pub(crate) fn log_and_return_error(source: &str, error: PsyLensError) -> PsyLensError {
        let caller = Location::caller();
        Self::log_detailed(LogSeverity::Error, source, error.to_string(), caller.file(), caller.line());
        error
    }

    /// Replace the global logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Restore the default console logger
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Emit an entry without file:line.
    ///
    /// Used by `engine_trace!` .. `engine_warn!`.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Emit an entry with file:line. Used by `engine_error!`.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
