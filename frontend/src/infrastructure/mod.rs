//! Infrastructure Layer
//!
//! Adapters between the room view and the outside world.
//!
//! # Components
//!
//! - `room_connection`: the room seam and its errors
//! - `local_room`: in-process room with generated peer video
//! - `live_lookup`: HTTP lookup of live-broadcast URLs
//! - `clipboard`: system clipboard for the join link
//! - `audio_sink`: local audio output

mod audio_sink;
mod clipboard;
mod live_lookup;
mod local_room;
mod room_connection;

pub use audio_sink::LocalAudioSink;
pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use live_lookup::{
    HttpLiveLookup, LiveLookup, LiveLookupError, UnavailableLookup, parse_lookup_response,
};
pub use local_room::LocalRoom;
pub use room_connection::{RoomConnection, RoomError};
