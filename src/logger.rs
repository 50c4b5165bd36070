//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! into a bounded buffer the log pane renders from.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Oldest entries are dropped beyond this many.
///
pub const LOG_CAPACITY: usize = 500;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Shared, bounded store of formatted log lines.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= LOG_CAPACITY {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Returns the captured entries, oldest first.
    ///
    pub fn snapshot(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Custom logger that captures logs to the log buffer
///
pub struct CustomLogger {
    level: LevelFilter,
    buffer: LogBuffer,
}

impl CustomLogger {
    pub fn new(level: LevelFilter, buffer: LogBuffer) -> Self {
        CustomLogger { level, buffer }
    }

    /// Install as the global logger.
    ///
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Dependency chatter (hyper, reqwest) stays out of the pane
        metadata.level() <= self.level && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format_log(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at<'a>(level: Level, target: &'a str, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).target(target).args(args).build()
    }

    #[test]
    fn format_log_includes_level_and_message() {
        let formatted = format_log(&record_at(
            Level::Warn,
            "jobbank_tui",
            format_args!("API unreachable"),
        ));
        assert!(formatted.contains("WARN"));
        assert!(formatted.ends_with("API unreachable"));
    }

    #[test]
    fn buffer_drops_oldest_beyond_capacity() {
        let buffer = LogBuffer::default();
        for i in 0..(LOG_CAPACITY + 5) {
            buffer.push(format!("entry {}", i));
        }
        let entries = buffer.snapshot();
        assert_eq!(entries.len(), LOG_CAPACITY);
        assert_eq!(entries[0], "entry 5");
        assert_eq!(entries[LOG_CAPACITY - 1], format!("entry {}", LOG_CAPACITY + 4));
    }

    #[test]
    fn logger_filters_by_level_and_target() {
        let buffer = LogBuffer::default();
        let logger = CustomLogger::new(LevelFilter::Info, buffer.clone());

        logger.log(&record_at(Level::Info, "jobbank_tui::app", format_args!("kept")));
        logger.log(&record_at(Level::Debug, "jobbank_tui::app", format_args!("too verbose")));
        logger.log(&record_at(Level::Error, "hyper::client", format_args!("foreign")));

        let entries = buffer.snapshot();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].ends_with("kept"));
    }
}
