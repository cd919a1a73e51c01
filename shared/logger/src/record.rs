//! Internal log record structure.

use crate::level::LogLevel;
use chrono::{DateTime, Local};
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// A single log entry, captured on the calling thread.
#[derive(Debug, Clone)]
pub(crate) struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub component: Option<Arc<str>>,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, component: Option<Arc<str>>, message: String) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            component,
            message,
        }
    }

    /// Formats the record as one line: `[timestamp] LEVEL [component]: message`
    pub fn format(&self) -> String {
        let ts = self.timestamp.format(TIMESTAMP_FORMAT);
        match &self.component {
            Some(component) => format!(
                "[{}] {} [{}]: {}",
                ts,
                self.level.as_str(),
                component,
                self.message
            ),
            None => format!("[{}] {}: {}", ts, self.level.as_str(), self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_component() {
        let record = LogRecord::new(
            LogLevel::Warn,
            Some(Arc::from("Room")),
            "selection reset".to_string(),
        );
        let line = record.format();

        assert!(line.contains("WARN [Room]: selection reset"));
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn test_format_without_component() {
        let record = LogRecord::new(LogLevel::Error, None, "boom".to_string());
        assert!(record.format().ends_with("ERROR: boom"));
    }

    #[test]
    fn test_timestamp_format() {
        let record = LogRecord::new(LogLevel::Info, None, "x".to_string());
        let line = record.format();
        let ts = &line[1..line.find(']').unwrap()];

        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[19..20], ".");
    }
}
