//! Data models for the application
//!
//! Room snapshots are produced by the room connection and consumed
//! read-only by the room view.

mod media;
mod room;
mod user;

pub use media::{AudioTrack, MediaHandle, StreamId, VideoFrame};
pub use room::{ClientStream, RoomState};
pub use user::RoomUser;
