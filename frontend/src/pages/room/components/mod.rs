//! Room UI Components
//!
//! This module contains reusable UI components for the Room page.
//! Each component is in its own file for better organization.

mod controls;
mod header;
mod live_panel;
mod main_video;
mod participants;
mod sidebar;
mod thumbnails;
mod video_placeholder;

pub use controls::{ControlsState, render_controls};
pub use header::render_header;
pub use live_panel::{render_live_panel, render_lookup_overlay};
pub use main_video::render_main_video;
pub use participants::render_participants;
pub use sidebar::{SIDEBAR_CONSTANT, render_settings_sidebar};
pub use thumbnails::render_thumbnails;
