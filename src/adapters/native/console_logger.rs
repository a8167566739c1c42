use crate::ports::LoggerPort;

const TARGET: &str = "admin_notifications";

/// Native logger forwarding to the `log` facade.
///
/// The host decides where records go (`env_logger` in tests and tools).
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log::info!(target: TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: TARGET, "{message}");
    }

    fn time(&self, label: &str) {
        log::debug!(target: TARGET, "[TIME:START] {label}");
    }

    fn time_end(&self, label: &str) {
        log::debug!(target: TARGET, "[TIME:END] {label}");
    }
}
