use crate::infrastructure::{ClipboardError, LiveLookupError, RoomError};
use crate::models::StreamId;
use crate::playback::PlaybackError;

/// Events sent from the logic thread back to the UI thread.
#[derive(Debug)]
pub enum LogicEvent {
    /// Share start (`sharing: true`) or stop finished.
    ShareChanged {
        sharing: bool,
        result: Result<(), RoomError>,
    },

    LiveLookupFinished {
        generation: u64,
        result: Result<Vec<String>, LiveLookupError>,
    },

    LinkCopied(Result<(), ClipboardError>),

    AudioPlayFinished {
        stream: StreamId,
        result: Result<(), PlaybackError>,
    },

    Error(String),
}
