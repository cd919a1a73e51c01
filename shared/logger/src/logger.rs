//! Thread-safe asynchronous logger implementation.
//!
//! This module provides the main [`Logger`] interface for logging messages
//! without blocking the caller.

use crate::error::{LoggingError, Result};
use crate::level::LogLevel;
use crate::record::LogRecord;
use crate::sink::{FileSink, LogSink};
use crate::writer::{WriterMessage, spawn_writer};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{Sender, channel};

/// Thread-safe, non-blocking logger.
///
/// Cloneable instances share the same channel to a dedicated writer thread.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LogLevel, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::with_sink(Box::new(sink.clone()), LogLevel::Info);
/// let room = logger.for_component("Room");
/// room.info("joined");
/// logger.flush().unwrap();
/// assert!(sink.contains("[Room]: joined"));
/// ```
#[derive(Clone)]
pub struct Logger {
    sender: Sender<WriterMessage>,
    level: LogLevel,
    component: Option<Arc<str>>,
    console_output: bool,
}

impl Logger {
    /// Creates a logger writing to `log_path` (created if it doesn't exist).
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn new(log_path: PathBuf, level: LogLevel) -> Result<Self> {
        let sink = FileSink::open(&log_path)?;
        Ok(Self::with_sink(Box::new(sink), level))
    }

    /// Creates a file logger tagged with a component name, optionally echoing
    /// every line to stdout.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn with_component(
        log_path: PathBuf,
        level: LogLevel,
        component: &str,
        console_output: bool,
    ) -> Result<Self> {
        let mut logger = Self::new(log_path, level)?;
        logger.component = Some(Arc::from(component));
        logger.console_output = console_output;
        Ok(logger)
    }

    /// Creates a logger on top of an arbitrary sink.
    pub fn with_sink(sink: Box<dyn LogSink>, level: LogLevel) -> Self {
        Self {
            sender: spawn_writer(sink),
            level,
            component: None,
            console_output: false,
        }
    }

    /// Derives a logger for another component. The new logger shares the
    /// writer thread, level and console setting of `self`.
    pub fn for_component(&self, component: &str) -> Self {
        Self {
            sender: self.sender.clone(),
            level: self.level,
            component: Some(Arc::from(component)),
            console_output: self.console_output,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// True if a message at `level` would be recorded.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message (always recorded).
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Blocks until every record sent before this call has been written.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingError::Disconnected`] if the writer thread is gone.
    pub fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = channel();
        self.sender
            .send(WriterMessage::Flush(ack_tx))
            .map_err(|_| LoggingError::Disconnected)?;
        ack_rx.recv().map_err(|_| LoggingError::Disconnected)
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let record = LogRecord::new(level, self.component.clone(), message.to_string());
        if self.console_output {
            println!("{}", record.format());
        }

        let _ = self.sender.send(WriterMessage::Record(record));
    }
}
