//! Screen Share Handlers
//!
//! Share start/stop is performed by the logic thread; the room snapshot
//! picks up the new host media on the next frame.

use crate::app::state::App;
use crate::events::LogicCommand;
use crate::infrastructure::RoomError;

impl App {
    pub(in crate::app) fn handle_start_share(&mut self) {
        self.logger.info("[ROOM] Starting screen share");
        self.send_logic(LogicCommand::StartShare);
    }

    pub(in crate::app) fn handle_stop_share(&mut self) {
        self.logger.info("[ROOM] Stopping screen share");
        self.send_logic(LogicCommand::StopShare);
    }

    /// Reports the outcome of a share start/stop
    pub(in crate::app) fn handle_share_changed(
        &mut self,
        sharing: bool,
        result: Result<(), RoomError>,
    ) {
        match result {
            Ok(()) if sharing => self.show_success("Screen sharing started".to_string()),
            Ok(()) => self.show_info("Screen sharing stopped".to_string()),
            Err(e) => {
                self.logger.warn(&format!("[ROOM] Share change failed: {}", e));
                self.show_warning(format!("Could not change screen sharing: {}", e));
            }
        }
    }
}
