//! Companion audio routing.
//!
//! The [`AudioRouter`] lives on the UI thread and decides what the single
//! audio output should be bound to and whether it should play. It never
//! touches the output itself: every transition yields [`AudioCommand`]s that
//! the logic thread applies to an [`AudioOutput`], and play attempts report
//! back through [`AudioRouter::on_play_result`].

use super::error::PlaybackError;
use super::selection::Selection;
use super::surface::{MediaSurface, SurfaceBinder, same_binding};
use crate::models::{MediaHandle, RoomState, StreamId};

/// Instruction for the audio output.
#[derive(Clone, Debug, PartialEq)]
pub enum AudioCommand {
    Bind(MediaHandle),
    Unbind,
    Play(StreamId),
    Pause,
}

/// Result of feeding a play completion back into the router.
#[derive(Debug, PartialEq)]
pub enum PlayOutcome {
    Started,
    Failed(PlaybackError),
    /// The attempt was superseded (rebound or toggled off) before it finished.
    Stale,
}

#[derive(Debug, Default)]
pub struct AudioRouter {
    binding: Option<MediaHandle>,
    playing: bool,
    attempt: Option<StreamId>,
}

impl AudioRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stream whose audio should be routed: only a selected client
    /// stream that carries an audio track. Never the host share.
    pub fn candidate<'a>(selection: &Selection, state: &'a RoomState) -> Option<&'a MediaHandle> {
        let id = selection.client_id()?;
        state
            .find_client(id)
            .map(|stream| &stream.media)
            .filter(|media| media.has_audio())
    }

    /// Rebinds the output after a selection or roster change.
    ///
    /// If audio was playing (or about to) a fresh play attempt is issued
    /// for the new binding; if no candidate remains playback stops.
    pub fn update_candidate(
        &mut self,
        selection: &Selection,
        state: &RoomState,
    ) -> Vec<AudioCommand> {
        let candidate = Self::candidate(selection, state).cloned();
        if same_binding(self.binding.as_ref(), candidate.as_ref()) {
            return Vec::new();
        }

        let resume = self.playing || self.attempt.is_some();
        self.playing = false;
        self.attempt = None;

        let mut commands = Vec::new();
        if self.binding.take().is_some() {
            commands.push(AudioCommand::Unbind);
        }
        if let Some(media) = candidate {
            commands.push(AudioCommand::Bind(media.clone()));
            if resume {
                self.attempt = Some(media.id().clone());
                commands.push(AudioCommand::Play(media.id().clone()));
            }
            self.binding = Some(media);
        }
        commands
    }

    /// Stops playback if playing (or pending), otherwise starts a play
    /// attempt. Without a binding this does nothing.
    pub fn toggle(&mut self) -> Vec<AudioCommand> {
        if self.playing || self.attempt.is_some() {
            self.playing = false;
            self.attempt = None;
            return vec![AudioCommand::Pause];
        }

        match &self.binding {
            Some(media) => {
                self.attempt = Some(media.id().clone());
                vec![AudioCommand::Play(media.id().clone())]
            }
            None => Vec::new(),
        }
    }

    /// Applies the completion of a play attempt for `stream`.
    pub fn on_play_result(
        &mut self,
        stream: &StreamId,
        result: Result<(), PlaybackError>,
    ) -> PlayOutcome {
        if self.attempt.as_ref() != Some(stream) {
            return PlayOutcome::Stale;
        }
        self.attempt = None;

        match result {
            Ok(()) => {
                self.playing = true;
                PlayOutcome::Started
            }
            Err(e) => {
                self.playing = false;
                PlayOutcome::Failed(e)
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_pending(&self) -> bool {
        self.attempt.is_some()
    }

    pub fn bound(&self) -> Option<&MediaHandle> {
        self.binding.as_ref()
    }

    /// The audio toggle is offered only while something is bound.
    pub fn button_visible(&self) -> bool {
        self.binding.is_some()
    }
}

/// The audio surface that actually produces sound.
pub trait AudioSink: MediaSurface + Send {
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
}

/// Owns the single audio output and applies router commands to it.
pub struct AudioOutput {
    binder: SurfaceBinder<Box<dyn AudioSink>>,
}

impl AudioOutput {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            binder: SurfaceBinder::new(sink),
        }
    }

    /// Applies one command. Play commands return the attempt's result.
    pub fn apply(&mut self, command: AudioCommand) -> Option<(StreamId, Result<(), PlaybackError>)> {
        match command {
            AudioCommand::Bind(media) => {
                self.binder.bind(Some(&media));
                None
            }
            AudioCommand::Unbind => {
                self.binder.surface_mut().pause();
                self.binder.unbind();
                None
            }
            AudioCommand::Play(id) => {
                let result = match self.binder.bound() {
                    Some(media) if media.id() == &id => self.binder.surface_mut().play(),
                    _ => Err(PlaybackError::NotBound),
                };
                Some((id, result))
            }
            AudioCommand::Pause => {
                self.binder.surface_mut().pause();
                None
            }
        }
    }

    pub fn bound(&self) -> Option<&MediaHandle> {
        self.binder.bound()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AudioTrack, ClientStream};

    fn stream(id: &str, audio: bool) -> ClientStream {
        let tracks = if audio {
            vec![AudioTrack::new("mic")]
        } else {
            Vec::new()
        };
        ClientStream::new(
            format!("peer-{}", id),
            MediaHandle::with_audio_tracks(id, tracks),
        )
    }

    fn room() -> RoomState {
        let mut state = RoomState::new("room");
        state.client_streams = vec![stream("a", true), stream("b", true), stream("mute", false)];
        state.host_media = Some(MediaHandle::with_audio_tracks(
            "host",
            vec![AudioTrack::new("system")],
        ));
        state
    }

    fn client(id: &str) -> Selection {
        Selection::Client(StreamId::new(id))
    }

    fn id(id: &str) -> StreamId {
        StreamId::new(id)
    }

    #[test]
    fn test_candidate_requires_client_with_audio() {
        let state = room();

        assert_eq!(
            AudioRouter::candidate(&client("a"), &state).map(|m| m.id().as_str()),
            Some("a")
        );
        assert!(AudioRouter::candidate(&client("mute"), &state).is_none());
        assert!(AudioRouter::candidate(&Selection::Host, &state).is_none());
        assert!(AudioRouter::candidate(&Selection::Unset, &state).is_none());
    }

    #[test]
    fn test_host_selection_never_binds() {
        let state = room();
        let mut router = AudioRouter::new();
        router.update_candidate(&client("a"), &state);
        assert!(router.bound().is_some());

        let commands = router.update_candidate(&Selection::Host, &state);

        assert_eq!(commands, vec![AudioCommand::Unbind]);
        assert!(router.bound().is_none());
        assert!(!router.button_visible());
        assert!(router.toggle().is_empty());
    }

    #[test]
    fn test_toggle_play_success() {
        let state = room();
        let mut router = AudioRouter::new();
        router.update_candidate(&client("a"), &state);

        assert_eq!(router.toggle(), vec![AudioCommand::Play(id("a"))]);
        assert!(!router.is_playing());
        assert!(router.is_pending());

        assert_eq!(router.on_play_result(&id("a"), Ok(())), PlayOutcome::Started);
        assert!(router.is_playing());

        assert_eq!(router.toggle(), vec![AudioCommand::Pause]);
        assert!(!router.is_playing());
    }

    #[test]
    fn test_play_failure_leaves_flag_false() {
        let state = room();
        let mut router = AudioRouter::new();
        router.update_candidate(&client("a"), &state);
        router.toggle();

        let outcome = router.on_play_result(&id("a"), Err(PlaybackError::TrackEnded));

        assert_eq!(outcome, PlayOutcome::Failed(PlaybackError::TrackEnded));
        assert!(!router.is_playing());
        assert!(!router.is_pending());
    }

    #[test]
    fn test_rebind_while_playing_unbinds_then_replays() {
        let state = room();
        let mut router = AudioRouter::new();
        router.update_candidate(&client("a"), &state);
        router.toggle();
        router.on_play_result(&id("a"), Ok(()));

        let commands = router.update_candidate(&client("b"), &state);

        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], AudioCommand::Unbind);
        assert!(matches!(&commands[1], AudioCommand::Bind(m) if m.id() == &id("b")));
        assert_eq!(commands[2], AudioCommand::Play(id("b")));
        assert!(!router.is_playing());
    }

    #[test]
    fn test_late_result_for_previous_binding_is_stale() {
        let state = room();
        let mut router = AudioRouter::new();
        router.update_candidate(&client("a"), &state);
        router.toggle();
        router.update_candidate(&client("mute"), &state);

        assert_eq!(router.on_play_result(&id("a"), Ok(())), PlayOutcome::Stale);
        assert!(!router.is_playing());
    }

    #[test]
    fn test_toggle_off_while_pending_discards_result() {
        let state = room();
        let mut router = AudioRouter::new();
        router.update_candidate(&client("a"), &state);
        router.toggle();

        assert_eq!(router.toggle(), vec![AudioCommand::Pause]);
        assert_eq!(router.on_play_result(&id("a"), Ok(())), PlayOutcome::Stale);
        assert!(!router.is_playing());
    }

    #[test]
    fn test_unchanged_candidate_emits_nothing() {
        let state = room();
        let mut router = AudioRouter::new();
        router.update_candidate(&client("a"), &state);

        assert!(router.update_candidate(&client("a"), &state).is_empty());
    }

    #[test]
    fn test_republished_stream_rebinds_and_resumes() {
        let mut state = room();
        let mut router = AudioRouter::new();
        router.update_candidate(&client("a"), &state);
        router.toggle();
        router.on_play_result(&id("a"), Ok(()));

        state.client_streams[0] = stream("a", true);
        let commands = router.update_candidate(&client("a"), &state);

        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], AudioCommand::Unbind);
        assert!(matches!(&commands[1], AudioCommand::Bind(m)
            if m.same_stream(&state.client_streams[0].media)));
        assert_eq!(commands[2], AudioCommand::Play(id("a")));
    }

    #[derive(Default)]
    struct FakeSink {
        attached: Option<MediaHandle>,
        playing: bool,
        fail_with: Option<PlaybackError>,
    }

    impl MediaSurface for FakeSink {
        fn attach(&mut self, media: &MediaHandle) {
            self.attached = Some(media.clone());
        }

        fn detach(&mut self) {
            self.attached = None;
            self.playing = false;
        }
    }

    impl AudioSink for FakeSink {
        fn play(&mut self) -> Result<(), PlaybackError> {
            if let Some(err) = self.fail_with.clone() {
                return Err(err);
            }
            self.playing = true;
            Ok(())
        }

        fn pause(&mut self) {
            self.playing = false;
        }
    }

    #[test]
    fn test_output_applies_router_commands() {
        let state = room();
        let mut router = AudioRouter::new();
        let mut output = AudioOutput::new(Box::new(FakeSink::default()));

        let mut results = Vec::new();
        let mut commands = router.update_candidate(&client("a"), &state);
        commands.extend(router.toggle());
        for command in commands {
            results.extend(output.apply(command));
        }

        assert_eq!(results, vec![(id("a"), Ok(()))]);
        assert_eq!(output.bound().map(|m| m.id().as_str()), Some("a"));
    }

    #[test]
    fn test_output_rejects_play_for_unbound_stream() {
        let mut output = AudioOutput::new(Box::new(FakeSink::default()));
        output.apply(AudioCommand::Bind(MediaHandle::new("a")));

        let result = output.apply(AudioCommand::Play(id("b")));
        assert_eq!(result, Some((id("b"), Err(PlaybackError::NotBound))));
    }

    #[test]
    fn test_output_reports_sink_failure() {
        let sink = FakeSink {
            fail_with: Some(PlaybackError::NoOutput("no device".to_string())),
            ..FakeSink::default()
        };
        let mut output = AudioOutput::new(Box::new(sink));
        output.apply(AudioCommand::Bind(MediaHandle::new("a")));

        let (_, result) = output.apply(AudioCommand::Play(id("a"))).unwrap();
        assert!(matches!(result, Err(PlaybackError::NoOutput(_))));
    }
}
