//! Dedicated writer thread.

use crate::record::LogRecord;
use crate::sink::LogSink;
use std::sync::mpsc::{Receiver, Sender, channel};

pub(crate) enum WriterMessage {
    Record(LogRecord),
    /// Acknowledged once every record queued before it has been written.
    Flush(Sender<()>),
}

/// Spawns the writer thread and returns the channel feeding it.
///
/// The thread exits when every sender has been dropped.
pub(crate) fn spawn_writer(sink: Box<dyn LogSink>) -> Sender<WriterMessage> {
    let (sender, receiver) = channel();
    std::thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || run(sink, receiver))
        .map(|_| ())
        .unwrap_or_else(|e| eprintln!("Failed to spawn log writer: {}", e));
    sender
}

fn run(mut sink: Box<dyn LogSink>, receiver: Receiver<WriterMessage>) {
    for message in receiver {
        match message {
            WriterMessage::Record(record) => {
                if let Err(e) = sink.write_line(&record.format()) {
                    eprintln!("Error writing log: {}", e);
                }
            }
            WriterMessage::Flush(ack) => {
                if let Err(e) = sink.flush() {
                    eprintln!("Error flushing log: {}", e);
                }
                let _ = ack.send(());
            }
        }
    }
    let _ = sink.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LogLevel;
    use crate::sink::MemorySink;

    #[test]
    fn test_flush_waits_for_queued_records() {
        let sink = MemorySink::new();
        let sender = spawn_writer(Box::new(sink.clone()));

        for i in 0..10 {
            let record = LogRecord::new(LogLevel::Info, None, format!("line {}", i));
            sender.send(WriterMessage::Record(record)).unwrap();
        }
        let (ack_tx, ack_rx) = channel();
        sender.send(WriterMessage::Flush(ack_tx)).unwrap();
        ack_rx.recv().unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 10);
        assert!(lines[9].ends_with("line 9"));
    }
}
