//! Room View State
//!
//! Composes selection, surface bindings, audio routing, control visibility
//! and the live fallback into the one object the room page talks to.
//!
//! Every transition that can move the selection ends in [`sync_surfaces`],
//! which rebinds the video surface and returns the audio commands the logic
//! thread must apply.
//!
//! [`sync_surfaces`]: RoomViewState::sync_surfaces

use crate::config::Settings;
use crate::infrastructure::{LiveLookupError, RoomConnection};
use crate::models::{RoomState, StreamId};
use crate::playback::{
    AudioCommand, AudioRouter, HotkeyContext, LiveFallback, LiveLookupRequest, LiveOutcome,
    PlayOutcome, PlaybackError, Selection, StreamSelector, SurfaceBinder, ThumbnailSurfaces,
    VideoSurface, VisibilityTimer,
};
use logging::Logger;
use rand::Rng;
use std::time::{Duration, Instant};

pub struct RoomViewState {
    room: RoomState,
    revision: Option<u64>,
    selector: StreamSelector,
    video: SurfaceBinder<VideoSurface>,
    thumbnails: ThumbnailSurfaces,
    audio: AudioRouter,
    visibility: VisibilityTimer,
    live: LiveFallback,
    pub settings: Settings,
    pub settings_open: bool,
    pub participants_open: bool,
    /// Pointer is over the floating controls; keeps them on screen.
    pub hovering_controls: bool,
    pub fullscreen: bool,
    logger: Logger,
}

impl RoomViewState {
    pub fn new(settings: Settings, hide_delay: Duration, now: Instant, logger: Logger) -> Self {
        Self {
            room: RoomState::default(),
            revision: None,
            selector: StreamSelector::new(),
            video: SurfaceBinder::new(VideoSurface::new("main-video")),
            thumbnails: ThumbnailSurfaces::default(),
            audio: AudioRouter::new(),
            visibility: VisibilityTimer::new(now, hide_delay),
            live: LiveFallback::new(),
            settings,
            settings_open: false,
            participants_open: false,
            hovering_controls: false,
            fullscreen: false,
            logger,
        }
    }

    // --- Room updates ---

    /// Pulls a new snapshot if the connection changed since the last call.
    /// Returns `None` when nothing changed.
    pub fn refresh(&mut self, connection: &dyn RoomConnection) -> Option<Vec<AudioCommand>> {
        let revision = connection.revision();
        if self.revision == Some(revision) {
            return None;
        }
        self.revision = Some(revision);
        Some(self.apply_room_state(connection.snapshot()))
    }

    /// Replaces the snapshot and revalidates the selection against it.
    pub fn apply_room_state(&mut self, room: RoomState) -> Vec<AudioCommand> {
        self.room = room;

        let before = self.selector.current().clone();
        if self.selector.on_room_state_changed(&self.room) {
            self.logger.info(&format!(
                "[SELECT] Selection corrected from {:?} to {:?}",
                before,
                self.selector.current()
            ));
        }

        let live: Vec<&StreamId> = self.room.client_streams.iter().map(|s| &s.id).collect();
        self.thumbnails.retain(&live);

        self.sync_surfaces()
    }

    /// Binds the video surface to the current selection and realigns audio.
    pub fn sync_surfaces(&mut self) -> Vec<AudioCommand> {
        if self.video.bind(self.selector.resolve(&self.room)) {
            self.logger.debug(&format!(
                "[SELECT] Video surface now shows {:?}",
                self.video.bound().map(|media| media.id().as_str())
            ));
        }
        self.audio.update_candidate(self.selector.current(), &self.room)
    }

    // --- Selection ---

    pub fn select_next(&mut self) -> Vec<AudioCommand> {
        if self.selector.select_next(&self.room.client_streams) {
            self.sync_surfaces()
        } else {
            Vec::new()
        }
    }

    pub fn select_previous(&mut self) -> Vec<AudioCommand> {
        if self.selector.select_previous(&self.room.client_streams) {
            self.sync_surfaces()
        } else {
            Vec::new()
        }
    }

    /// Explicit pick. An id that is not in the room is kept until the next
    /// snapshot corrects it.
    pub fn select(&mut self, selection: Selection) -> Vec<AudioCommand> {
        if self.selector.select(selection) {
            self.sync_surfaces()
        } else {
            Vec::new()
        }
    }

    pub fn selection(&self) -> &Selection {
        self.selector.current()
    }

    pub fn has_selection(&self) -> bool {
        self.video.bound().is_some()
    }

    // --- Audio ---

    pub fn toggle_audio(&mut self) -> Vec<AudioCommand> {
        self.audio.toggle()
    }

    pub fn on_play_result(
        &mut self,
        stream: &StreamId,
        result: Result<(), PlaybackError>,
    ) -> PlayOutcome {
        self.audio.on_play_result(stream, result)
    }

    pub fn audio(&self) -> &AudioRouter {
        &self.audio
    }

    // --- Live ---

    pub fn toggle_live(&mut self, enable: bool) -> Option<LiveLookupRequest> {
        self.live.toggle_live(enable, &self.settings.code)
    }

    pub fn on_live_result<R: Rng + ?Sized>(
        &mut self,
        generation: u64,
        result: Result<Vec<String>, LiveLookupError>,
        rng: &mut R,
    ) -> LiveOutcome {
        self.live.on_lookup_result(generation, result, rng)
    }

    pub fn live(&self) -> &LiveFallback {
        &self.live
    }

    /// Live mode is on or being turned on.
    pub fn live_requested(&self) -> bool {
        self.live.is_active() || self.live.is_pending()
    }

    /// The live panel replaces the video surface. Only true once a lookup
    /// succeeded; a pending lookup keeps the video on screen.
    pub fn video_suspended(&self) -> bool {
        self.live.is_active()
    }

    // --- Controls visibility ---

    pub fn on_activity(&mut self, now: Instant) {
        self.visibility.on_activity(now);
    }

    /// Advances the hide countdown; true if visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.visibility.tick(now)
    }

    pub fn controls_visible(&self) -> bool {
        self.visibility.is_visible() || self.settings_open || self.hovering_controls
    }

    pub fn time_until_hide(&self, now: Instant) -> Option<Duration> {
        self.visibility.time_until_hide(now)
    }

    // --- Rendering access ---

    pub fn room(&self) -> &RoomState {
        &self.room
    }

    pub fn hotkey_context(&self) -> HotkeyContext {
        HotkeyContext {
            sharing: self.room.is_sharing(),
            has_selection: self.has_selection(),
        }
    }

    pub(super) fn video_mut(&mut self) -> &mut VideoSurface {
        self.video.surface_mut()
    }

    /// Room snapshot and thumbnail surfaces, borrowed together for the
    /// thumbnail strip.
    pub(super) fn thumbnail_parts(&mut self) -> (&RoomState, &Selection, &mut ThumbnailSurfaces) {
        (&self.room, self.selector.current(), &mut self.thumbnails)
    }
}
