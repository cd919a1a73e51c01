//! Live Broadcast Panel
//!
//! Replaces the video surface once a live broadcast was found. While the
//! lookup runs the video stays up under a small overlay.

use crate::playback::LiveFallback;
use egui::{Color32, FontId, RichText};

pub fn render_live_panel(ui: &mut egui::Ui, live: &LiveFallback) {
    let Some(url) = live.url() else {
        return;
    };

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.label(
            RichText::new("📡 Live broadcast")
                .font(FontId::proportional(26.0))
                .color(Color32::WHITE),
        );
        ui.add_space(12.0);
        ui.hyperlink_to(RichText::new(url).size(16.0), url);
    });
}

/// Spinner shown over the video while a lookup is in flight
pub fn render_lookup_overlay(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("live_lookup_overlay"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 80.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).inner_margin(10.0).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(
                        RichText::new("Looking up live broadcast...")
                            .font(FontId::proportional(16.0))
                            .color(Color32::GRAY),
                    );
                });
            });
        });
}
