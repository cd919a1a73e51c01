//! Room Page

mod components;
mod state;

pub use state::RoomViewState;

use crate::events::UiCommand;
use components::ControlsState;

pub struct Room;

impl Room {
    /// Renders the room view and returns the command the user issued, if any.
    pub fn show(ctx: &egui::Context, view: &mut RoomViewState) -> Option<UiCommand> {
        let mut command = None;

        Self::render_sidebar(ctx, view, &mut command);
        Self::render_header(ctx, view, &mut command);
        if !view.video_suspended() {
            Self::render_thumbnails(ctx, view, &mut command);
        }
        Self::render_central_panel(ctx, view, &mut command);
        Self::render_controls(ctx, view, &mut command);

        let mut participants_open = view.participants_open;
        components::render_participants(ctx, &view.room().users, &mut participants_open);
        view.participants_open = participants_open;

        command
    }

    /// Renders the settings sidebar
    fn render_sidebar(ctx: &egui::Context, view: &RoomViewState, command: &mut Option<UiCommand>) {
        egui::SidePanel::right("settings_sidebar")
            .resizable(false)
            .exact_width(components::SIDEBAR_CONSTANT)
            .show_animated(ctx, view.settings_open, |ui| {
                if let Some(settings_cmd) = components::render_settings_sidebar(ui, &view.settings) {
                    *command = Some(settings_cmd);
                }
            });
    }

    fn render_header(ctx: &egui::Context, view: &RoomViewState, command: &mut Option<UiCommand>) {
        egui::TopBottomPanel::top("room_header").show(ctx, |ui| {
            ui.add_space(10.0);
            let room = view.room();
            if let Some(header_cmd) = components::render_header(ui, &room.id, room.users.len()) {
                *command = Some(header_cmd);
            }
            ui.add_space(10.0);
        });
    }

    fn render_thumbnails(
        ctx: &egui::Context,
        view: &mut RoomViewState,
        command: &mut Option<UiCommand>,
    ) {
        egui::TopBottomPanel::bottom("thumbnail_strip").show(ctx, |ui| {
            ui.add_space(8.0);
            let (room, selection, surfaces) = view.thumbnail_parts();
            if let Some(thumb_cmd) = components::render_thumbnails(ui, room, selection, surfaces) {
                *command = Some(thumb_cmd);
            }
            ui.add_space(8.0);
        });
    }

    /// Renders the live panel while a live broadcast plays, the main video
    /// otherwise
    fn render_central_panel(
        ctx: &egui::Context,
        view: &mut RoomViewState,
        command: &mut Option<UiCommand>,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if view.video_suspended() {
                components::render_live_panel(ui, view.live());
                return;
            }
            if view.live().is_pending() {
                components::render_lookup_overlay(ctx);
            }

            let has_selection = view.has_selection();
            let display_mode = view.settings.display_mode;
            let texture = view.video_mut().refresh(ctx).cloned();
            if let Some(video_cmd) =
                components::render_main_video(ui, texture.as_ref(), has_selection, display_mode)
            {
                *command = Some(video_cmd);
            }
        });
    }

    /// Renders the floating control bar while it is visible
    fn render_controls(
        ctx: &egui::Context,
        view: &mut RoomViewState,
        command: &mut Option<UiCommand>,
    ) {
        if !view.controls_visible() {
            view.hovering_controls = false;
            return;
        }

        let state = ControlsState {
            sharing: view.room().is_sharing(),
            has_selection: view.has_selection(),
            audio_available: view.audio().button_visible(),
            audio_on: view.audio().is_playing() || view.audio().is_pending(),
            live_on: view.live_requested(),
            settings_open: view.settings_open,
            participants_open: view.participants_open,
        };

        let response = egui::Area::new(egui::Id::new("room_controls"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -140.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .inner_margin(10.0)
                    .show(ui, |ui| components::render_controls(ui, state))
                    .inner
            });

        view.hovering_controls = response.response.contains_pointer();
        if let Some(control_cmd) = response.inner {
            *command = Some(control_cmd);
        }
    }
}
