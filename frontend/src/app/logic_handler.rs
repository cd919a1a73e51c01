//! Handles events from the background logic thread.

use super::state::App;
use crate::events::LogicEvent;

impl App {
    /// Processes events from the logic thread
    /// Updates application state based on background operations
    pub(super) fn handle_logic_event(&mut self, event: LogicEvent) {
        match event {
            LogicEvent::ShareChanged { sharing, result } => {
                self.handle_share_changed(sharing, result);
            }

            LogicEvent::LiveLookupFinished { generation, result } => {
                self.handle_live_lookup_finished(generation, result);
            }

            LogicEvent::LinkCopied(result) => {
                self.handle_link_copied(result);
            }

            LogicEvent::AudioPlayFinished { stream, result } => {
                self.handle_audio_play_finished(stream, result);
            }

            LogicEvent::Error(message) => {
                self.logger.error(&format!("[LOGIC] {}", message));
                self.show_error(message);
            }
        }
    }
}
