//! Room connection seam.
//!
//! The room view only ever reads snapshots; everything that changes the
//! room goes through this trait so the view never touches transport code.

use crate::models::RoomState;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("already sharing the screen")]
    AlreadySharing,

    #[error("not sharing the screen")]
    NotSharing,

    #[error("name cannot be empty")]
    EmptyName,
}

pub trait RoomConnection: Send + Sync {
    /// Current roster and streams.
    fn snapshot(&self) -> RoomState;

    /// Bumped every time the snapshot changes.
    fn revision(&self) -> u64;

    fn share(&self) -> Result<(), RoomError>;

    fn stop_share(&self) -> Result<(), RoomError>;

    fn set_name(&self, name: &str) -> Result<(), RoomError>;

    /// Target frame rate for locally produced streams.
    fn set_framerate(&self, _fps: u32) {}
}
