//! Integration tests for the logging crate's public surface.

use logging::{LogLevel, Logger, MemorySink};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_level_from_config_string_drives_filtering() {
    let sink = MemorySink::new();
    let logger = Logger::with_sink(Box::new(sink.clone()), LogLevel::parse_or_default("error"));

    logger.warn("suppressed");
    logger.error("kept");
    logger.flush().unwrap();

    assert_eq!(sink.lines().len(), 1);
    assert!(sink.contains("kept"));
}

#[test]
fn test_file_logger_appends_across_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");

    let first = Logger::new(path.clone(), LogLevel::Info).unwrap();
    first.info("one");
    first.flush().unwrap();
    drop(first);

    let second = Logger::new(path.clone(), LogLevel::Info).unwrap();
    second.info("two");
    second.flush().unwrap();

    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("one"));
    assert!(lines[1].ends_with("two"));
}

#[test]
fn test_missing_directory_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("app.log");

    assert!(Logger::new(path, LogLevel::Info).is_err());
}
