//! Single-key shortcuts for the room view.

use crate::events::UiCommand;
use egui::{Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    ToggleShare,
    Fullscreen,
    CopyLink,
    SelectNext,
    SelectPrevious,
    ToggleAudio,
}

impl HotkeyAction {
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::S => Some(Self::ToggleShare),
            Key::F => Some(Self::Fullscreen),
            Key::C => Some(Self::CopyLink),
            Key::H => Some(Self::SelectNext),
            Key::L => Some(Self::SelectPrevious),
            Key::A => Some(Self::ToggleAudio),
            _ => None,
        }
    }
}

/// View facts a hotkey depends on.
#[derive(Debug, Clone, Copy, Default)]
pub struct HotkeyContext {
    pub sharing: bool,
    pub has_selection: bool,
}

/// Stateless mapping from key presses to UI commands.
pub struct HotkeyDispatcher;

impl HotkeyDispatcher {
    /// Translates an action into a command, or nothing if its precondition
    /// is not met.
    pub fn dispatch(action: HotkeyAction, context: HotkeyContext) -> Option<UiCommand> {
        match action {
            HotkeyAction::ToggleShare if context.sharing => Some(UiCommand::StopShare),
            HotkeyAction::ToggleShare => Some(UiCommand::StartShare),
            HotkeyAction::Fullscreen if context.has_selection => {
                Some(UiCommand::RequestFullscreen)
            }
            HotkeyAction::Fullscreen => None,
            HotkeyAction::CopyLink => Some(UiCommand::CopyLink),
            HotkeyAction::SelectNext => Some(UiCommand::SelectNext),
            HotkeyAction::SelectPrevious => Some(UiCommand::SelectPrevious),
            HotkeyAction::ToggleAudio => Some(UiCommand::ToggleAudio),
        }
    }

    /// Maps a raw key press. Presses with Ctrl/Alt/Cmd held are ignored.
    pub fn on_key(key: Key, modifiers: Modifiers, context: HotkeyContext) -> Option<UiCommand> {
        if modifiers.ctrl || modifiers.alt || modifiers.command || modifiers.mac_cmd {
            return None;
        }
        HotkeyAction::for_key(key).and_then(|action| Self::dispatch(action, context))
    }

    /// Collects this frame's hotkey commands. Nothing is dispatched while a
    /// text field has keyboard focus.
    pub fn collect(ctx: &egui::Context, context: HotkeyContext) -> Vec<UiCommand> {
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }
        ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } => Self::on_key(*key, *modifiers, context),
                    _ => None,
                })
                .collect()
        })
    }
}
