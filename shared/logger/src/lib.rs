//! Thread-safe asynchronous logging library.
//!
//! All loggers created from the same root share one writer thread. Records
//! are filtered by level on the caller side and formatted on the writer side.

pub mod error;
mod level;
mod logger;
mod record;
mod sink;
mod writer;

pub use error::{LoggingError, Result};
pub use level::LogLevel;
pub use logger::Logger;
pub use sink::{FileSink, LogSink, MemorySink};
