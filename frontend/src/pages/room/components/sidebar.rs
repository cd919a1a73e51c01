//! Settings Sidebar
//!
//! Edits the in-memory settings: display name, display mode, frame rate,
//! preferred codec and the room code used for live lookups. Edits are kept
//! in a draft until "Save".

use crate::components::{Button, ButtonVariant};
use crate::config::{CODECS, DisplayMode, Settings};
use crate::events::UiCommand;
use egui::{Color32, ComboBox, FontId, RichText};

const SIDEBAR_WIDTH: f32 = 320.0;

pub const SIDEBAR_CONSTANT: f32 = SIDEBAR_WIDTH;

const FRAMERATES: [u32; 4] = [15, 24, 30, 60];

fn draft_id() -> egui::Id {
    egui::Id::new("settings_draft")
}

/// Renders the settings sidebar
pub fn render_settings_sidebar(ui: &mut egui::Ui, current: &Settings) -> Option<UiCommand> {
    let mut command = None;

    egui::Frame::new()
        .fill(Color32::from_rgb(31, 41, 55))
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                render_header(ui);

                let mut draft = load_draft(ui, current);

                render_name_field(ui, &mut draft.name);
                ui.add_space(15.0);
                render_display_mode(ui, &mut draft.display_mode);
                ui.add_space(15.0);
                render_framerate(ui, &mut draft.framerate);
                ui.add_space(15.0);
                render_codec(ui, &mut draft.prefer_codec);
                ui.add_space(15.0);
                render_code_field(ui, &mut draft.code);
                ui.add_space(20.0);

                command = render_actions(ui, &draft, current);
                if command.is_some() {
                    clear_draft(ui);
                } else {
                    save_draft(ui, draft);
                }
            });
        });

    command
}

/// Renders the header section
fn render_header(ui: &mut egui::Ui) {
    ui.label(
        RichText::new("⚙ Settings")
            .font(FontId::proportional(24.0))
            .color(Color32::WHITE),
    );
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Loads the draft from UI storage, starting from the current settings
fn load_draft(ui: &egui::Ui, current: &Settings) -> Settings {
    ui.data(|data| data.get_temp::<Settings>(draft_id()))
        .unwrap_or_else(|| current.clone())
}

fn save_draft(ui: &egui::Ui, draft: Settings) {
    ui.data_mut(|data| data.insert_temp(draft_id(), draft));
}

fn clear_draft(ui: &egui::Ui) {
    ui.data_mut(|data| data.remove::<Settings>(draft_id()));
}

fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .font(FontId::proportional(16.0))
            .color(Color32::LIGHT_GRAY),
    );
    ui.add_space(5.0);
}

fn render_name_field(ui: &mut egui::Ui, name: &mut String) {
    section_label(ui, "Display Name");
    ui.add(egui::TextEdit::singleline(name).desired_width(f32::INFINITY));
}

fn render_display_mode(ui: &mut egui::Ui, mode: &mut DisplayMode) {
    section_label(ui, "Display Mode");
    ComboBox::from_id_salt("display_mode_selector")
        .selected_text(mode.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in DisplayMode::ALL {
                ui.selectable_value(mode, option, option.label());
            }
        });
}

fn render_framerate(ui: &mut egui::Ui, framerate: &mut u32) {
    section_label(ui, "Frames Per Second (FPS)");
    ComboBox::from_id_salt("fps_selector")
        .selected_text(format!("{} FPS", framerate))
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for fps in FRAMERATES {
                ui.selectable_value(framerate, fps, format!("{} FPS", fps));
            }
        });
}

fn render_codec(ui: &mut egui::Ui, codec: &mut String) {
    section_label(ui, "Preferred Codec");
    ComboBox::from_id_salt("codec_selector")
        .selected_text(codec.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in CODECS {
                ui.selectable_value(codec, option.to_string(), option);
            }
        });
}

fn render_code_field(ui: &mut egui::Ui, code: &mut String) {
    section_label(ui, "Room Code");
    ui.add(
        egui::TextEdit::singleline(code)
            .hint_text("code for live lookup")
            .desired_width(f32::INFINITY),
    );
}

/// Renders Save / Close; Save is only offered when the draft differs
fn render_actions(ui: &mut egui::Ui, draft: &Settings, current: &Settings) -> Option<UiCommand> {
    let mut command = None;

    ui.horizontal(|ui| {
        if draft != current
            && Button::new("Save")
                .variant(ButtonVariant::Primary)
                .show(ui)
                .clicked()
        {
            command = Some(UiCommand::SaveSettings(draft.clone()));
        }

        if Button::new("Close")
            .variant(ButtonVariant::Secondary)
            .show(ui)
            .clicked()
        {
            command = Some(UiCommand::CloseSettings);
        }
    });

    command
}
