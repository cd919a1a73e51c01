use crate::playback::AudioCommand;

/// Commands sent from the UI thread to the logic thread.
/// Anything that may block or fail out of band goes through here.
#[derive(Debug)]
pub enum LogicCommand {
    // --- Room ---
    StartShare,
    StopShare,

    // --- Live ---
    /// Look up live URLs for `code`; the result carries `generation` back.
    LookupLive {
        generation: u64,
        code: String,
    },

    // --- Clipboard ---
    CopyToClipboard {
        text: String,
    },

    // --- Audio ---
    Audio(AudioCommand),

    Shutdown,
}
