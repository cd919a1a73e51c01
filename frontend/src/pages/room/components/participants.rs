//! Participants Window
//!
//! Lists the roster with each user's flags.

use crate::models::RoomUser;
use egui::{Color32, RichText};

/// Renders the participant list while `open`; closing the window clears it.
pub fn render_participants(ctx: &egui::Context, users: &[RoomUser], open: &mut bool) {
    egui::Window::new("Participants")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 80.0))
        .show(ctx, |ui| {
            if users.is_empty() {
                ui.label(RichText::new("Nobody here yet").color(Color32::GRAY));
                return;
            }
            for user in users {
                let color = if user.you {
                    Color32::from_rgb(96, 165, 250)
                } else {
                    Color32::WHITE
                };
                ui.label(RichText::new(user.label()).size(15.0).color(color));
            }
        });
}
