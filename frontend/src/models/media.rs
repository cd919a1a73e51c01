//! Media Handles
//!
//! A [`MediaHandle`] is the client-side reference to one media stream: a slot
//! holding the latest decoded video frame plus the stream's audio tracks.
//! Handles are cheap to clone; clones refer to the same stream.

use egui::ColorImage;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Identifier of a stream within a room.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamId(String);

impl StreamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StreamId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StreamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One audio track of a stream. A track can be ended by its producer.
#[derive(Debug)]
pub struct AudioTrack {
    label: String,
    ended: AtomicBool,
}

impl AudioTrack {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ended: AtomicBool::new(false),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_live(&self) -> bool {
        !self.ended.load(Ordering::Acquire)
    }

    pub fn stop(&self) {
        self.ended.store(true, Ordering::Release);
    }
}

/// A decoded frame with a per-stream sequence number.
#[derive(Clone)]
pub struct VideoFrame {
    pub seq: u64,
    pub image: Arc<ColorImage>,
}

struct MediaStream {
    id: StreamId,
    frame: Mutex<Option<VideoFrame>>,
    next_seq: AtomicU64,
    audio_tracks: Vec<Arc<AudioTrack>>,
}

/// Shared handle to a media stream. Equality is by stream id.
#[derive(Clone)]
pub struct MediaHandle {
    inner: Arc<MediaStream>,
}

impl MediaHandle {
    /// Creates a video-only stream.
    pub fn new(id: impl Into<StreamId>) -> Self {
        Self::with_audio_tracks(id, Vec::new())
    }

    pub fn with_audio_tracks(id: impl Into<StreamId>, audio_tracks: Vec<AudioTrack>) -> Self {
        Self {
            inner: Arc::new(MediaStream {
                id: id.into(),
                frame: Mutex::new(None),
                next_seq: AtomicU64::new(0),
                audio_tracks: audio_tracks.into_iter().map(Arc::new).collect(),
            }),
        }
    }

    pub fn id(&self) -> &StreamId {
        &self.inner.id
    }

    pub fn audio_tracks(&self) -> &[Arc<AudioTrack>] {
        &self.inner.audio_tracks
    }

    /// True if the stream carries at least one audio track.
    pub fn has_audio(&self) -> bool {
        !self.inner.audio_tracks.is_empty()
    }

    /// Publishes a new frame, replacing the previous one.
    pub fn push_frame(&self, image: ColorImage) {
        let seq = self.inner.next_seq.fetch_add(1, Ordering::AcqRel);
        let frame = VideoFrame {
            seq,
            image: Arc::new(image),
        };
        match self.inner.frame.lock() {
            Ok(mut slot) => *slot = Some(frame),
            Err(poisoned) => *poisoned.into_inner() = Some(frame),
        }
    }

    /// The most recent frame, if any has been produced yet.
    pub fn latest_frame(&self) -> Option<VideoFrame> {
        match self.inner.frame.lock() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// True if both handles point at the same stream object. A stream that
    /// was torn down and republished under the same id is a different
    /// stream.
    pub fn same_stream(&self, other: &MediaHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Ends every audio track of this stream.
    pub fn stop_audio(&self) {
        for track in &self.inner.audio_tracks {
            track.stop();
        }
    }
}

impl PartialEq for MediaHandle {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for MediaHandle {}

impl fmt::Debug for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaHandle")
            .field("id", &self.inner.id)
            .field("audio_tracks", &self.inner.audio_tracks.len())
            .finish()
    }
}
