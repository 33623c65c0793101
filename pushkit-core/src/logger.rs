//! Log forwarding into the host application.
//!
//! The crate logs through the [`log`] facade. Hosts that want to see those
//! records register a [`Logger`] implementation once at startup via
//! [`set_logger`]; without one, records are discarded.

use std::sync::{Arc, OnceLock};

/// Receives log records emitted by this crate.
///
/// Implemented by the host (exported via `UniFFI` for foreign languages)
/// and registered once with [`set_logger`].
#[uniffi::export(with_foreign)]
pub trait Logger: Send + Sync {
    /// Handles one log record.
    fn log(&self, level: LogLevel, message: String);
}

/// Severity of a forwarded log record.
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum LogLevel {
    /// Very low priority, extremely detailed messages.
    Trace,
    /// Lower priority debugging information.
    Debug,
    /// Informational messages highlighting normal progress.
    Info,
    /// Potentially harmful situations.
    Warn,
    /// Errors that still allow the application to continue running.
    Error,
}

const fn log_level(level: log::Level) -> LogLevel {
    match level {
        log::Level::Error => LogLevel::Error,
        log::Level::Warn => LogLevel::Warn,
        log::Level::Info => LogLevel::Info,
        log::Level::Debug => LogLevel::Debug,
        log::Level::Trace => LogLevel::Trace,
    }
}

static LOGGER_INSTANCE: OnceLock<Arc<dyn Logger>> = OnceLock::new();

/// Forwards records from the `log` facade to the registered host logger.
struct ForeignLogger;

impl log::Log for ForeignLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        // Debug and trace records from other crates are dropped; hosts
        // only care about this crate's chatter at those levels.
        let from_pushkit = record
            .module_path()
            .is_some_and(|module_path| module_path.starts_with("pushkit"));
        if !from_pushkit && record.level() >= log::Level::Debug {
            return;
        }

        if let Some(logger) = LOGGER_INSTANCE.get() {
            logger.log(log_level(record.level()), format!("{}", record.args()));
        }
    }

    fn flush(&self) {}
}

/// Registers the host logger and installs the forwarding backend.
///
/// Call once at startup, before the adapters are exercised. Later calls
/// are ignored: the first registered logger stays in place for the
/// lifetime of the process.
#[uniffi::export]
pub fn set_logger(logger: Arc<dyn Logger>) {
    static FORWARDER: ForeignLogger = ForeignLogger;

    if LOGGER_INSTANCE.set(logger).is_err() {
        return;
    }

    if log::set_logger(&FORWARDER).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}
