//! Application Module - MVU Controller
//!
//! This module implements the Controller layer of the MVU architecture.
//! It coordinates between the view layer (pages) and the background logic thread.
//!
//! # Structure
//!
//! - `state.rs`: Application state definition and MVU loop
//! - `ui_handler.rs`: Command dispatcher for UI actions
//! - `handlers/`: Domain-specific UI command handlers
//!   - `share_handlers.rs`: Screen share start/stop
//!   - `selection_handlers.rs`: Stream selection and cycling
//!   - `audio_handlers.rs`: Companion audio toggle and play results
//!   - `live_handlers.rs`: Live-broadcast fallback
//!   - `clipboard_handlers.rs`: Join link copy
//!   - `view_handlers.rs`: Fullscreen, participants and settings panels
//! - `logic_handler.rs`: Processes events from background thread
//!
//! # Communication Flow
//!
//! ```text
//! View (pages) --> UiCommand --> ui_handler --> handlers/* --> State mutation
//!                                                          \--> LogicCommand --> Logic thread
//!
//! Logic thread --> LogicEvent --> logic_handler --> State update (share, live, audio)
//! ```

mod handlers;
mod logic_handler;
mod state;
mod ui_handler;

pub use state::App;
