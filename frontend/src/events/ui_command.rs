use crate::config::Settings;
use crate::playback::Selection;

/// Commands initiated by the UI (View -> Controller)
/// These are "requests" to perform actions.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    // --- Share ---
    StartShare,
    StopShare,

    // --- Surface ---
    RequestFullscreen,
    ExitFullscreen,
    CopyLink,

    // --- Selection ---
    SelectNext,
    SelectPrevious,
    Select(Selection),

    // --- Audio / Live ---
    ToggleAudio,
    ToggleLive(bool),

    // --- Panels ---
    ToggleParticipants,
    OpenSettings,
    CloseSettings,
    SaveSettings(Settings),
}
