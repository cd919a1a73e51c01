//! Playback errors.

use thiserror::Error;

/// Why an audio play attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("no stream is bound to the audio output")]
    NotBound,
    #[error("the stream has no live audio track")]
    TrackEnded,
    #[error("audio output unavailable: {0}")]
    NoOutput(String),
}
