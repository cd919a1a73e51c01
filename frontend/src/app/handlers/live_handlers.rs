//! Live Broadcast Handlers

use crate::app::state::App;
use crate::events::LogicCommand;
use crate::infrastructure::LiveLookupError;
use crate::playback::LiveOutcome;

impl App {
    pub(in crate::app) fn handle_toggle_live(&mut self, enable: bool) {
        match self.room_view.toggle_live(enable) {
            Some(request) => {
                self.logger.info(&format!(
                    "[LIVE] Enabling live mode for code '{}'",
                    request.code
                ));
                self.send_logic(LogicCommand::LookupLive {
                    generation: request.generation,
                    code: request.code,
                });
            }
            None => self.logger.info("[LIVE] Live mode disabled"),
        }
    }

    pub(in crate::app) fn handle_live_lookup_finished(
        &mut self,
        generation: u64,
        result: Result<Vec<String>, LiveLookupError>,
    ) {
        match self
            .room_view
            .on_live_result(generation, result, &mut self.rng)
        {
            LiveOutcome::Started(url) => {
                self.logger.info(&format!("[LIVE] Playing {}", url));
            }
            LiveOutcome::Failed(e) => {
                self.logger.warn(&format!("[LIVE] Lookup failed: {}", e));
                self.show_error(format!("Live broadcast unavailable: {}", e));
            }
            LiveOutcome::Stale => {
                self.logger.debug(&format!(
                    "[LIVE] Discarding stale lookup result (generation {})",
                    generation
                ));
            }
        }
    }
}
