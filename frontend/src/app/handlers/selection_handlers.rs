//! Stream Selection Handlers

use crate::app::state::App;
use crate::playback::Selection;

impl App {
    pub(in crate::app) fn handle_select_next(&mut self) {
        let commands = self.room_view.select_next();
        self.log_selection("next");
        self.send_audio(commands);
    }

    pub(in crate::app) fn handle_select_previous(&mut self) {
        let commands = self.room_view.select_previous();
        self.log_selection("previous");
        self.send_audio(commands);
    }

    pub(in crate::app) fn handle_select(&mut self, selection: Selection) {
        let commands = self.room_view.select(selection);
        self.log_selection("pick");
        self.send_audio(commands);
    }

    fn log_selection(&self, how: &str) {
        self.logger.debug(&format!(
            "[SELECT] {} -> {:?}",
            how,
            self.room_view.selection()
        ));
    }
}
