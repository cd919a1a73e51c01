//! Join Link Handlers

use crate::app::state::App;
use crate::events::LogicCommand;
use crate::infrastructure::ClipboardError;

impl App {
    pub(in crate::app) fn handle_copy_link(&mut self) {
        let text = self.config.join_link();
        self.logger.info(&format!("[ROOM] Copying join link {}", text));
        self.send_logic(LogicCommand::CopyToClipboard { text });
    }

    pub(in crate::app) fn handle_link_copied(&mut self, result: Result<(), ClipboardError>) {
        match result {
            Ok(()) => self.show_success("Join link copied to clipboard".to_string()),
            Err(e) => {
                self.logger.warn(&format!("[ROOM] Copy link failed: {}", e));
                self.show_error(format!("Could not copy link: {}", e));
            }
        }
    }
}
