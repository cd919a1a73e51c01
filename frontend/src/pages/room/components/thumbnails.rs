//! Thumbnail Strip
//!
//! Small previews of every stream except the one on the main surface.
//! Clicking a preview selects it.

use super::video_placeholder::render_placeholder;
use crate::events::UiCommand;
use crate::models::{MediaHandle, RoomState};
use crate::playback::{Selection, ThumbnailSurfaces};
use egui::{Color32, FontId, RichText, Sense, Vec2};

const THUMB_SIZE: Vec2 = Vec2::new(160.0, 90.0);

/// Renders the strip; returns the selection picked, if any
pub fn render_thumbnails(
    ui: &mut egui::Ui,
    room: &RoomState,
    selection: &Selection,
    surfaces: &mut ThumbnailSurfaces,
) -> Option<UiCommand> {
    let mut command = None;

    egui::ScrollArea::horizontal().show(ui, |ui| {
        ui.horizontal(|ui| {
            if let Some(host) = room.host_media.as_ref()
                && *selection != Selection::Host
                && render_thumbnail(ui, surfaces, host, "You")
            {
                command = Some(UiCommand::Select(Selection::Host));
            }

            for stream in &room.client_streams {
                if selection.client_id() == Some(&stream.id) {
                    continue;
                }
                let name = room.publisher_name(stream);
                if render_thumbnail(ui, surfaces, &stream.media, name) {
                    command = Some(UiCommand::Select(Selection::Client(stream.id.clone())));
                }
            }
        });
    });

    command
}

/// Renders one preview with its label; returns true when clicked
fn render_thumbnail(
    ui: &mut egui::Ui,
    surfaces: &mut ThumbnailSurfaces,
    media: &MediaHandle,
    label: &str,
) -> bool {
    ui.vertical(|ui| {
        let clicked = match surfaces.texture(ui.ctx(), media) {
            Some(texture) => ui
                .add(egui::Image::new((texture.id(), THUMB_SIZE)).sense(Sense::click()))
                .on_hover_text(format!("Show {}", label))
                .clicked(),
            None => render_placeholder(ui, THUMB_SIZE, "Connecting")
                .on_hover_text(format!("Show {}", label))
                .clicked(),
        };

        ui.label(
            RichText::new(label)
                .font(FontId::proportional(14.0))
                .color(Color32::WHITE),
        );
        clicked
    })
    .inner
}
