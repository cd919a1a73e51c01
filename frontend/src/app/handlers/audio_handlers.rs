//! Companion Audio Handlers

use crate::app::state::App;
use crate::models::StreamId;
use crate::playback::{PlayOutcome, PlaybackError};

impl App {
    /// Pauses if playing, otherwise starts a play attempt on the logic thread
    pub(in crate::app) fn handle_toggle_audio(&mut self) {
        let commands = self.room_view.toggle_audio();
        if commands.is_empty() {
            self.logger.debug("[AUDIO] Toggle ignored - no audio for this stream");
            return;
        }
        self.send_audio(commands);
    }

    pub(in crate::app) fn handle_audio_play_finished(
        &mut self,
        stream: StreamId,
        result: Result<(), PlaybackError>,
    ) {
        match self.room_view.on_play_result(&stream, result) {
            PlayOutcome::Started => {
                self.logger.info(&format!("[AUDIO] Playing audio of {}", stream));
            }
            PlayOutcome::Failed(e) => {
                self.logger
                    .warn(&format!("[AUDIO] Could not play audio of {}: {}", stream, e));
                self.show_error(format!("Audio playback failed: {}", e));
            }
            PlayOutcome::Stale => {
                self.logger
                    .debug(&format!("[AUDIO] Ignoring stale play result for {}", stream));
            }
        }
    }
}
