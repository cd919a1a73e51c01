//! Room Snapshot Model
//!
//! A [`RoomState`] is an immutable snapshot of the room roster and the
//! streams currently visible to this client.

use super::media::{MediaHandle, StreamId};
use super::user::RoomUser;

const UNKNOWN_USER: &str = "unknown";

/// A remote participant's stream as seen by this client.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientStream {
    pub id: StreamId,
    /// Id of the [`RoomUser`] publishing the stream.
    pub peer_id: String,
    pub media: MediaHandle,
}

impl ClientStream {
    pub fn new(peer_id: impl Into<String>, media: MediaHandle) -> Self {
        Self {
            id: media.id().clone(),
            peer_id: peer_id.into(),
            media,
        }
    }
}

/// Read-only snapshot of a room.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomState {
    pub id: String,
    /// Remote streams, in the order the room announced them.
    pub client_streams: Vec<ClientStream>,
    /// Our own screen share, if we are sharing.
    pub host_media: Option<MediaHandle>,
    pub users: Vec<RoomUser>,
}

impl RoomState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn find_client(&self, id: &StreamId) -> Option<&ClientStream> {
        self.client_streams.iter().find(|stream| &stream.id == id)
    }

    pub fn has_client(&self, id: &StreamId) -> bool {
        self.find_client(id).is_some()
    }

    pub fn is_sharing(&self) -> bool {
        self.host_media.is_some()
    }

    /// Name of the user publishing `stream`, or `"unknown"`.
    pub fn publisher_name(&self, stream: &ClientStream) -> &str {
        self.users
            .iter()
            .find(|user| user.id == stream.peer_id)
            .map(|user| user.name.as_str())
            .unwrap_or(UNKNOWN_USER)
    }
}
