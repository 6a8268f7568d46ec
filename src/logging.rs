use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use crate::app_config::LogLevel;

// @module: stderr logger for binaries embedding the library

// @struct: Timestamped plain-text logger
#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
}

impl Logger {
    // @creates: New logger with specified level
    pub fn new(level: LevelFilter) -> Self {
        Logger { level }
    }

    // @returns: Fixed-width tag for log level
    pub fn tag_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    // @formats: One log line without the trailing newline
    pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
        format!("{} {} [{}] {}", timestamp, Self::tag_for_level(level), target, message)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
            let line = Self::format_line(
                &now,
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            let _ = writeln!(std::io::stderr(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

// @initializes: Global logger, fails if one is already installed
pub fn init(level: LogLevel) -> Result<(), SetLoggerError> {
    let filter = level.to_level_filter();
    log::set_boxed_logger(Box::new(Logger::new(filter)))?;
    log::set_max_level(filter);
    Ok(())
}
