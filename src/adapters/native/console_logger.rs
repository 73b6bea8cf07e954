use crate::ports::LoggerPort;

/// Native logger forwarding to the `log` crate facade.
///
/// The host application picks the backend (`env_logger`, etc.); with no
/// logger installed the messages are discarded.
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
        log::info!(target: "loggly_track", "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: "loggly_track", "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: "loggly_track", "{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!(target: "loggly_track", "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_creation() {
        let logger = ConsoleLogger::new();
        logger.log("test");
    }

    #[test]
    fn test_logger_all_methods() {
        let logger = ConsoleLogger::new();
        logger.log("test log");
        logger.warn("test warn");
        logger.error("test error");
        logger.debug("test debug");
    }
}
