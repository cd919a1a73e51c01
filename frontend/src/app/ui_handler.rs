//! UI Command Handler
//!
//! This module dispatches UI commands to specialized handlers.
//! Implementation details are split into domain-specific modules under
//! `handlers/`.

use super::state::App;
use crate::events::UiCommand;

impl App {
    /// Dispatches UI commands to appropriate handlers
    /// This is the main entry point for all UI actions
    pub(super) fn handle_ui_command(&mut self, ctx: &egui::Context, command: UiCommand) {
        self.logger
            .debug(&format!("[UI] Handling command: {:?}", command));
        match command {
            // Share
            UiCommand::StartShare => self.handle_start_share(),
            UiCommand::StopShare => self.handle_stop_share(),

            // Surface
            UiCommand::RequestFullscreen => self.handle_request_fullscreen(ctx),
            UiCommand::ExitFullscreen => self.handle_exit_fullscreen(ctx),
            UiCommand::CopyLink => self.handle_copy_link(),

            // Selection
            UiCommand::SelectNext => self.handle_select_next(),
            UiCommand::SelectPrevious => self.handle_select_previous(),
            UiCommand::Select(selection) => self.handle_select(selection),

            // Audio / Live
            UiCommand::ToggleAudio => self.handle_toggle_audio(),
            UiCommand::ToggleLive(enable) => self.handle_toggle_live(enable),

            // Panels
            UiCommand::ToggleParticipants => self.handle_toggle_participants(),
            UiCommand::OpenSettings => self.handle_open_settings(),
            UiCommand::CloseSettings => self.handle_close_settings(),
            UiCommand::SaveSettings(settings) => self.handle_save_settings(settings),
        }
    }
}
