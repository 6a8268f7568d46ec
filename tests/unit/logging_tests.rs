/*!
 * Tests for the stderr logger
 */

use log::{Level, LevelFilter, Log, Metadata};
use subshelf::logging::Logger;

#[test]
fn test_logger_enabled_withLevelFilter_shouldRespectThreshold() {
    let logger = Logger::new(LevelFilter::Warn);

    let error = Metadata::builder().level(Level::Error).target("subshelf").build();
    let warn = Metadata::builder().level(Level::Warn).target("subshelf").build();
    let debug = Metadata::builder().level(Level::Debug).target("subshelf").build();

    assert!(logger.enabled(&error));
    assert!(logger.enabled(&warn));
    assert!(!logger.enabled(&debug));
}

#[test]
fn test_logger_formatLine_shouldIncludeTimestampLevelTargetAndMessage() {
    let line = Logger::format_line("12:00:00.000", Level::Info, "subshelf::cdn", "hello");
    assert_eq!(line, "12:00:00.000 INFO  [subshelf::cdn] hello");
}

#[test]
fn test_logger_tagForLevel_shouldBeFixedWidth() {
    for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
        assert_eq!(Logger::tag_for_level(level).len(), 5);
    }
}

#[test]
fn test_init_calledTwice_shouldRejectSecondLogger() {
    // Another test may already have installed a logger; the second call fails either way
    let _ = subshelf::logging::init(subshelf::app_config::LogLevel::Warn);
    assert!(subshelf::logging::init(subshelf::app_config::LogLevel::Warn).is_err());
}
