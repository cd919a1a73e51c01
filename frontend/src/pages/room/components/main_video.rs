//! Main Video Component
//!
//! Draws the selected stream sized by the display mode, or a placeholder.

use super::video_placeholder::render_placeholder;
use crate::components::EmptyState;
use crate::config::DisplayMode;
use crate::events::UiCommand;
use egui::{Sense, TextureHandle};

/// Renders the main video surface. Double-clicking it requests fullscreen.
pub fn render_main_video(
    ui: &mut egui::Ui,
    texture: Option<&TextureHandle>,
    has_selection: bool,
    display_mode: DisplayMode,
) -> Option<UiCommand> {
    let available = ui.available_size();

    if !has_selection {
        EmptyState::new("🖥", "No stream available")
            .description("Share your screen or wait for someone to start sharing")
            .show(ui);
        return None;
    }

    let Some(texture) = texture else {
        render_placeholder(ui, available, "Waiting for video...");
        return None;
    };

    let size = display_mode.fit(texture.size_vec2(), available);
    let response = egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.centered_and_justified(|ui| {
                ui.add(egui::Image::new((texture.id(), size)).sense(Sense::click()))
            })
            .inner
        })
        .inner;

    if response.double_clicked() {
        Some(UiCommand::RequestFullscreen)
    } else {
        None
    }
}
