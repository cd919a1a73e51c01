//! Local audio output.
//!
//! There is no decoder behind the room's audio tracks, so the sink only
//! tracks what it is bound to and whether it is "playing". Play attempts
//! fail the way a real output would when the bound track has ended.

use crate::models::MediaHandle;
use crate::playback::{AudioSink, MediaSurface, PlaybackError};
use logging::Logger;

pub struct LocalAudioSink {
    media: Option<MediaHandle>,
    playing: bool,
    logger: Logger,
}

impl LocalAudioSink {
    pub fn new(logger: Logger) -> Self {
        Self {
            media: None,
            playing: false,
            logger,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl MediaSurface for LocalAudioSink {
    fn attach(&mut self, media: &MediaHandle) {
        self.logger
            .debug(&format!("[AUDIO] Sink attached to {}", media.id()));
        self.media = Some(media.clone());
    }

    fn detach(&mut self) {
        if let Some(media) = self.media.take() {
            self.logger
                .debug(&format!("[AUDIO] Sink detached from {}", media.id()));
        }
        self.playing = false;
    }
}

impl AudioSink for LocalAudioSink {
    fn play(&mut self) -> Result<(), PlaybackError> {
        let media = self.media.as_ref().ok_or(PlaybackError::NotBound)?;

        let track = media
            .audio_tracks()
            .iter()
            .find(|track| track.is_live())
            .ok_or(PlaybackError::TrackEnded)?;

        self.logger.info(&format!(
            "[AUDIO] Playing '{}' from {}",
            track.label(),
            media.id()
        ));
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AudioTrack;
    use logging::{LogLevel, MemorySink};

    fn sink() -> LocalAudioSink {
        LocalAudioSink::new(Logger::with_sink(
            Box::new(MemorySink::new()),
            LogLevel::Debug,
        ))
    }

    #[test]
    fn test_play_requires_binding() {
        let mut sink = sink();
        assert_eq!(sink.play(), Err(PlaybackError::NotBound));
    }

    #[test]
    fn test_play_and_pause() {
        let media = MediaHandle::with_audio_tracks("a", vec![AudioTrack::new("mic")]);
        let mut sink = sink();
        sink.attach(&media);

        assert_eq!(sink.play(), Ok(()));
        assert!(sink.is_playing());
        sink.pause();
        assert!(!sink.is_playing());
    }

    #[test]
    fn test_ended_track_fails() {
        let media = MediaHandle::with_audio_tracks("a", vec![AudioTrack::new("mic")]);
        media.stop_audio();
        let mut sink = sink();
        sink.attach(&media);

        assert_eq!(sink.play(), Err(PlaybackError::TrackEnded));
        assert!(!sink.is_playing());
    }

    #[test]
    fn test_detach_stops_playback() {
        let media = MediaHandle::with_audio_tracks("a", vec![AudioTrack::new("mic")]);
        let mut sink = sink();
        sink.attach(&media);
        sink.play().unwrap();

        sink.detach();
        assert!(!sink.is_playing());
    }
}
