//! Stand-in for a surface whose stream has not produced a frame yet.

use egui::{Color32, CornerRadius, FontId, Response, Sense, Vec2};

const FILL: Color32 = Color32::from_rgb(45, 55, 72);

/// Paints a rounded box of `size` with `text` centered in it. The text
/// scales with the box so the same placeholder serves thumbnails and the
/// main surface. The returned response senses clicks.
pub(super) fn render_placeholder(ui: &mut egui::Ui, size: Vec2, text: &str) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, CornerRadius::same(8), FILL);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            FontId::proportional((size.y / 5.0).clamp(12.0, 20.0)),
            Color32::GRAY,
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_takes_requested_size_and_senses_clicks() {
        let ctx = egui::Context::default();
        let mut rendered = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rendered = Some(render_placeholder(ui, Vec2::new(160.0, 90.0), "Connecting"));
            });
        });

        let response = rendered.unwrap();
        assert_eq!(response.rect.size(), Vec2::new(160.0, 90.0));
        assert!(response.sense.senses_click());
    }
}
