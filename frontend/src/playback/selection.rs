//! Stream selection.
//!
//! Decides which stream is shown full-size and keeps that choice valid as
//! the roster changes. Explicit picks are accepted as-is and only corrected
//! on the next room update.

use crate::models::{ClientStream, MediaHandle, RoomState, StreamId};

/// The stream rendered full-size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unset,
    /// Our own screen share.
    Host,
    Client(StreamId),
}

impl Selection {
    pub fn is_set(&self) -> bool {
        !matches!(self, Selection::Unset)
    }

    pub fn client_id(&self) -> Option<&StreamId> {
        match self {
            Selection::Client(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct StreamSelector {
    selection: Selection,
}

impl StreamSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Selection {
        &self.selection
    }

    /// Re-validates the selection against a new snapshot.
    ///
    /// Keeps `Host` while we are sharing and `Client(id)` while `id` is
    /// still listed; otherwise falls back to the first client stream, or
    /// `Unset` when there is none. Returns true if the selection changed.
    pub fn on_room_state_changed(&mut self, state: &RoomState) -> bool {
        let still_valid = match &self.selection {
            Selection::Host => state.host_media.is_some(),
            Selection::Client(id) => state.has_client(id),
            Selection::Unset => false,
        };
        if still_valid {
            return false;
        }

        let fallback = state
            .client_streams
            .first()
            .map(|stream| Selection::Client(stream.id.clone()))
            .unwrap_or_default();
        self.replace(fallback)
    }

    /// Steps forward through the client streams, wrapping at the end.
    /// From `Host` or `Unset` this lands on the first stream.
    pub fn select_next(&mut self, streams: &[ClientStream]) -> bool {
        let Some(target) = self.step(streams, Step::Next) else {
            return false;
        };
        self.replace(Selection::Client(target))
    }

    /// Steps backward through the client streams, wrapping at the start.
    /// From `Host` or `Unset` this lands on the last stream.
    pub fn select_previous(&mut self, streams: &[ClientStream]) -> bool {
        let Some(target) = self.step(streams, Step::Previous) else {
            return false;
        };
        self.replace(Selection::Client(target))
    }

    /// Sets the selection without validating it.
    pub fn select(&mut self, selection: Selection) -> bool {
        self.replace(selection)
    }

    /// The media the current selection points at, if it resolves.
    pub fn resolve<'a>(&self, state: &'a RoomState) -> Option<&'a MediaHandle> {
        match &self.selection {
            Selection::Unset => None,
            Selection::Host => state.host_media.as_ref(),
            Selection::Client(id) => state.find_client(id).map(|stream| &stream.media),
        }
    }

    fn step(&self, streams: &[ClientStream], step: Step) -> Option<StreamId> {
        if streams.is_empty() {
            return None;
        }
        let len = streams.len();
        let current = self
            .selection
            .client_id()
            .and_then(|id| streams.iter().position(|stream| &stream.id == id));

        let index = match (step, current) {
            (Step::Next, Some(i)) => (i + 1) % len,
            (Step::Next, None) => 0,
            (Step::Previous, Some(i)) => (i + len - 1) % len,
            (Step::Previous, None) => len - 1,
        };
        Some(streams[index].id.clone())
    }

    fn replace(&mut self, selection: Selection) -> bool {
        if self.selection == selection {
            return false;
        }
        self.selection = selection;
        true
    }
}

#[derive(Clone, Copy)]
enum Step {
    Next,
    Previous,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str) -> Selection {
        Selection::Client(StreamId::new(id))
    }

    fn room(ids: &[&str]) -> RoomState {
        let mut state = RoomState::new("room");
        state.client_streams = ids
            .iter()
            .map(|id| ClientStream::new(format!("peer-{}", id), MediaHandle::new(*id)))
            .collect();
        state
    }

    #[test]
    fn test_initial_update_picks_first_stream() {
        let mut selector = StreamSelector::new();

        assert!(selector.on_room_state_changed(&room(&["a", "b"])));
        assert_eq!(selector.current(), &client("a"));
    }

    #[test]
    fn test_empty_roster_stays_unset() {
        let mut selector = StreamSelector::new();

        assert!(!selector.on_room_state_changed(&room(&[])));
        assert_eq!(selector.current(), &Selection::Unset);
    }

    #[test]
    fn test_present_client_is_kept() {
        let mut selector = StreamSelector::new();
        selector.select(client("b"));

        assert!(!selector.on_room_state_changed(&room(&["a", "b", "c"])));
        assert_eq!(selector.current(), &client("b"));
    }

    #[test]
    fn test_removed_client_falls_back_to_first_remaining() {
        let mut selector = StreamSelector::new();
        selector.select(client("b"));

        selector.on_room_state_changed(&room(&["c", "a"]));
        assert_eq!(selector.current(), &client("c"));
    }

    #[test]
    fn test_removed_last_client_resets_to_unset() {
        let mut selector = StreamSelector::new();
        selector.on_room_state_changed(&room(&["a"]));

        assert!(selector.on_room_state_changed(&room(&[])));
        assert_eq!(selector.current(), &Selection::Unset);
    }

    #[test]
    fn test_host_kept_while_sharing() {
        let mut state = room(&["a"]);
        state.host_media = Some(MediaHandle::new("me"));
        let mut selector = StreamSelector::new();
        selector.select(Selection::Host);

        assert!(!selector.on_room_state_changed(&state));
        assert_eq!(selector.resolve(&state), state.host_media.as_ref());

        state.host_media = None;
        selector.on_room_state_changed(&state);
        assert_eq!(selector.current(), &client("a"));
    }

    #[test]
    fn test_invalid_explicit_pick_is_corrected_on_next_update() {
        let state = room(&["a", "b"]);
        let mut selector = StreamSelector::new();
        selector.on_room_state_changed(&state);

        selector.select(client("ghost"));
        assert_eq!(selector.current(), &client("ghost"));
        assert!(selector.resolve(&state).is_none());

        selector.on_room_state_changed(&state);
        assert_eq!(selector.current(), &client("a"));
    }

    #[test]
    fn test_next_cycles_and_wraps() {
        let state = room(&["a", "b", "c"]);
        let mut selector = StreamSelector::new();
        selector.on_room_state_changed(&state);

        let mut visited = Vec::new();
        for _ in 0..3 {
            selector.select_next(&state.client_streams);
            visited.push(selector.current().clone());
        }
        assert_eq!(visited, vec![client("b"), client("c"), client("a")]);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let state = room(&["a", "b", "c"]);
        let mut selector = StreamSelector::new();
        selector.on_room_state_changed(&state);

        selector.select_previous(&state.client_streams);
        assert_eq!(selector.current(), &client("c"));
    }

    #[test]
    fn test_next_then_previous_round_trips() {
        let state = room(&["a", "b", "c", "d"]);
        for start in ["a", "b", "c", "d"] {
            let mut selector = StreamSelector::new();
            selector.select(client(start));

            selector.select_next(&state.client_streams);
            selector.select_previous(&state.client_streams);
            assert_eq!(selector.current(), &client(start));
        }
    }

    #[test]
    fn test_stepping_from_host_lands_on_clients() {
        let state = room(&["a", "b", "c"]);
        let mut selector = StreamSelector::new();

        selector.select(Selection::Host);
        selector.select_next(&state.client_streams);
        assert_eq!(selector.current(), &client("a"));

        selector.select(Selection::Host);
        selector.select_previous(&state.client_streams);
        assert_eq!(selector.current(), &client("c"));
    }

    #[test]
    fn test_stepping_with_no_streams_is_noop() {
        let mut selector = StreamSelector::new();
        selector.select(Selection::Host);

        assert!(!selector.select_next(&[]));
        assert!(!selector.select_previous(&[]));
        assert_eq!(selector.current(), &Selection::Host);
    }

    #[test]
    fn test_single_stream_cycles_onto_itself() {
        let state = room(&["only"]);
        let mut selector = StreamSelector::new();
        selector.on_room_state_changed(&state);

        assert!(!selector.select_next(&state.client_streams));
        assert_eq!(selector.current(), &client("only"));
    }
}
