//! Room Header Component
//!
//! Displays the room title (click to copy the join link) and the
//! participant count.

use crate::events::UiCommand;
use egui::{Color32, FontId, RichText, Sense};

/// Renders the room header with title and participant count
pub fn render_header(ui: &mut egui::Ui, room_id: &str, user_count: usize) -> Option<UiCommand> {
    let mut command = None;

    ui.horizontal(|ui| {
        ui.add_space(20.0);
        if render_room_title(ui, room_id) {
            command = Some(UiCommand::CopyLink);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new(format!("👥 {}", user_count))
                    .font(FontId::proportional(18.0))
                    .color(Color32::LIGHT_GRAY),
            );
        });
    });

    command
}

/// Renders the room title; returns true when clicked
fn render_room_title(ui: &mut egui::Ui, room_id: &str) -> bool {
    ui.add(
        egui::Label::new(
            RichText::new(format!("Room: {}", room_id))
                .font(FontId::proportional(28.0))
                .color(Color32::WHITE),
        )
        .sense(Sense::click()),
    )
    .on_hover_text("Copy join link")
    .clicked()
}
