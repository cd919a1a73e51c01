//! Playback Coordination
//!
//! The state machines behind the room view: which stream is selected,
//! what the single video and audio surfaces are bound to, when the floating
//! controls hide, and whether the live-broadcast fallback replaces it all.
//!
//! Everything here is driven by the UI thread. Nothing blocks; work that
//! must happen elsewhere (audio play attempts, live lookups) is described
//! as a command and its completion is fed back in.

mod audio;
mod error;
mod hotkeys;
mod live;
mod scheduler;
mod selection;
mod surface;
mod video;
mod visibility;

pub use audio::{AudioCommand, AudioOutput, AudioRouter, AudioSink, PlayOutcome};
pub use error::PlaybackError;
pub use hotkeys::{HotkeyAction, HotkeyContext, HotkeyDispatcher};
pub use live::{LiveFallback, LiveLookupRequest, LiveOutcome};
pub use scheduler::{TaskId, TaskScheduler};
pub use selection::{Selection, StreamSelector};
pub use surface::{MediaSurface, SurfaceBinder};
pub use video::{ThumbnailSurfaces, VideoSurface};
pub use visibility::{DEFAULT_HIDE_DELAY, VisibilityTimer};
