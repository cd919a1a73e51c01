//! Room Control Buttons
//!
//! Share, fullscreen, participants, audio, live and settings buttons.

use crate::components::{Button, ButtonVariant};
use crate::events::UiCommand;
use egui::Vec2;

const BUTTON_SIZE: Vec2 = Vec2::new(130.0, 44.0);

/// What the control bar needs to know to label its buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlsState {
    pub sharing: bool,
    pub has_selection: bool,
    /// An audio candidate exists.
    pub audio_available: bool,
    /// Audio is playing or a play attempt is in flight.
    pub audio_on: bool,
    pub live_on: bool,
    pub settings_open: bool,
    pub participants_open: bool,
}

/// Renders the control bar and returns the clicked command
pub fn render_controls(ui: &mut egui::Ui, state: ControlsState) -> Option<UiCommand> {
    let mut command = None;

    ui.horizontal(|ui| {
        let (label, variant, cmd) = share_button_config(state.sharing);
        if control_button(ui, label, variant) {
            command = Some(cmd);
        }

        let fullscreen = Button::new("⛶ Fullscreen")
            .variant(ButtonVariant::Secondary)
            .text_size(14.0)
            .min_size(BUTTON_SIZE)
            .enabled(state.has_selection)
            .hover_text("Fullscreen (f)")
            .show(ui);
        ui.add_space(8.0);
        if fullscreen.clicked() {
            command = Some(UiCommand::RequestFullscreen);
        }

        let participants_variant = toggled_variant(state.participants_open);
        if control_button(ui, "👥 Participants", participants_variant) {
            command = Some(UiCommand::ToggleParticipants);
        }

        if state.audio_available {
            let label = if state.audio_on { "🔊 Audio On" } else { "🔇 Audio Off" };
            if control_button(ui, label, toggled_variant(state.audio_on)) {
                command = Some(UiCommand::ToggleAudio);
            }
        }

        if control_button(ui, "📡 Live", toggled_variant(state.live_on)) {
            command = Some(UiCommand::ToggleLive(!state.live_on));
        }

        let settings_cmd = if state.settings_open {
            UiCommand::CloseSettings
        } else {
            UiCommand::OpenSettings
        };
        if control_button(ui, "⚙ Settings", toggled_variant(state.settings_open)) {
            command = Some(settings_cmd);
        }
    });

    command
}

/// Gets the label, variant and command of the share button
fn share_button_config(sharing: bool) -> (&'static str, ButtonVariant, UiCommand) {
    if sharing {
        ("⏹ Stop Share", ButtonVariant::Danger, UiCommand::StopShare)
    } else {
        ("🖥 Share", ButtonVariant::Primary, UiCommand::StartShare)
    }
}

fn toggled_variant(on: bool) -> ButtonVariant {
    if on {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    }
}

fn control_button(ui: &mut egui::Ui, label: &str, variant: ButtonVariant) -> bool {
    let clicked = Button::new(label)
        .variant(variant)
        .text_size(14.0)
        .min_size(BUTTON_SIZE)
        .show(ui)
        .clicked();
    ui.add_space(8.0);
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_button_follows_state() {
        assert_eq!(share_button_config(false).2, UiCommand::StartShare);
        assert_eq!(share_button_config(true).2, UiCommand::StopShare);
        assert_eq!(share_button_config(true).1, ButtonVariant::Danger);
    }
}
