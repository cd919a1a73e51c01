//! Screenroom desktop client.
//!
//! A room view for multi-party screen sharing: pick which participant's
//! stream is shown full-size, route its companion audio, and fall back to a
//! live broadcast when asked.
//!
//! The core lives in [`playback`]; [`pages`] and [`app`] put it on screen
//! with egui.

pub mod app;
pub mod components;
pub mod config;
pub mod events;
pub mod infrastructure;
pub mod logic;
pub mod models;
pub mod pages;
pub mod playback;

pub use app::App;
