//! UI Command Handlers
//!
//! This module organizes UI command handlers by domain.
//! Each submodule implements handlers for App via `impl` blocks.

mod audio_handlers;
mod clipboard_handlers;
mod live_handlers;
mod selection_handlers;
mod share_handlers;
mod view_handlers;
