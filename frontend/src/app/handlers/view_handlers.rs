//! Fullscreen, Participants and Settings Handlers

use crate::app::state::App;
use crate::config::Settings;

impl App {
    /// Fullscreen only makes sense with something on the main surface
    pub(in crate::app) fn handle_request_fullscreen(&mut self, ctx: &egui::Context) {
        if !self.room_view.has_selection() {
            self.logger.debug("[APP] Fullscreen ignored - nothing selected");
            return;
        }
        self.room_view.fullscreen = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
    }

    pub(in crate::app) fn handle_exit_fullscreen(&mut self, ctx: &egui::Context) {
        self.room_view.fullscreen = false;
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
    }

    pub(in crate::app) fn handle_toggle_participants(&mut self) {
        self.room_view.participants_open = !self.room_view.participants_open;
    }

    pub(in crate::app) fn handle_open_settings(&mut self) {
        self.room_view.settings_open = true;
    }

    pub(in crate::app) fn handle_close_settings(&mut self) {
        self.room_view.settings_open = false;
    }

    /// Applies edited settings; name and frame rate also go to the room
    pub(in crate::app) fn handle_save_settings(&mut self, settings: Settings) {
        let previous = std::mem::replace(&mut self.room_view.settings, settings);
        let current = self.room_view.settings.clone();

        if current.framerate != previous.framerate {
            self.room.set_framerate(current.framerate);
        }

        if current.name != previous.name
            && let Err(e) = self.room.set_name(&current.name)
        {
            self.logger.warn(&format!("[APP] Rename rejected: {}", e));
            self.room_view.settings.name = previous.name;
            self.show_warning(format!("Name not changed: {}", e));
            return;
        }

        self.logger.info(&format!(
            "[APP] Settings saved - name: {}, mode: {}, fps: {}, codec: {}, code: {}",
            current.name,
            current.display_mode.label(),
            current.framerate,
            current.prefer_codec,
            current.code
        ));
        self.room_view.settings_open = false;
        self.show_success("Settings saved".to_string());
    }
}
