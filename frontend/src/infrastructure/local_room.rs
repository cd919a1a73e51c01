//! In-process Room
//!
//! A room that lives entirely inside this process. Peers come from the
//! configuration and publish generated video through a feed thread, which
//! is enough to drive the whole room view without a signaling server.

use super::room_connection::{RoomConnection, RoomError};
use crate::logic::utils::test_pattern;
use crate::models::{AudioTrack, ClientStream, MediaHandle, RoomState, RoomUser};
use logging::Logger;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

const FRAME_WIDTH: usize = 320;
const FRAME_HEIGHT: usize = 180;
const SELF_ID: &str = "self";

struct Shared {
    state: Mutex<RoomState>,
    revision: AtomicU64,
    framerate: AtomicU32,
    running: AtomicBool,
    next_peer: AtomicU64,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, RoomState> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn bump(&self) {
        self.revision.fetch_add(1, Ordering::AcqRel);
    }

    /// Every stream this process produces frames for.
    fn media_handles(&self) -> Vec<MediaHandle> {
        let state = self.lock();
        state
            .client_streams
            .iter()
            .map(|stream| stream.media.clone())
            .chain(state.host_media.clone())
            .collect()
    }
}

pub struct LocalRoom {
    shared: Arc<Shared>,
    feed: Option<JoinHandle<()>>,
    logger: Logger,
}

impl LocalRoom {
    /// Creates the room with the local user as owner and one streaming peer
    /// per name in `peers`. No frames are produced until [`start_feed`].
    ///
    /// [`start_feed`]: LocalRoom::start_feed
    pub fn new(room_id: &str, user_name: &str, peers: &[String], logger: Logger) -> Self {
        let mut state = RoomState::new(room_id);
        state.users.push(RoomUser {
            you: true,
            owner: true,
            ..RoomUser::new(SELF_ID, user_name)
        });

        let room = Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                revision: AtomicU64::new(0),
                framerate: AtomicU32::new(30),
                running: AtomicBool::new(false),
                next_peer: AtomicU64::new(0),
            }),
            feed: None,
            logger,
        };

        for name in peers {
            room.add_peer(name);
        }
        room
    }

    /// Spawns the thread that pushes generated frames into every stream.
    pub fn start_feed(&mut self) {
        if self.feed.is_some() {
            return;
        }
        self.shared.running.store(true, Ordering::Release);

        let shared = Arc::clone(&self.shared);
        let spawned = std::thread::Builder::new()
            .name("room-feed".to_string())
            .spawn(move || run_feed(shared));

        match spawned {
            Ok(handle) => {
                self.logger.info("[ROOM] Frame feed started");
                self.feed = Some(handle);
            }
            Err(e) => {
                self.shared.running.store(false, Ordering::Release);
                self.logger
                    .error(&format!("[ROOM] Failed to start frame feed: {}", e));
            }
        }
    }

    /// Adds a streaming peer and returns its user id.
    pub fn add_peer(&self, name: &str) -> String {
        let n = self.shared.next_peer.fetch_add(1, Ordering::AcqRel);
        let peer_id = format!("peer-{}", n);
        let media = MediaHandle::with_audio_tracks(
            format!("stream-{}", n),
            vec![AudioTrack::new(format!("{} audio", name))],
        );

        {
            let mut state = self.shared.lock();
            state.users.push(RoomUser {
                streaming: true,
                ..RoomUser::new(peer_id.clone(), name)
            });
            state.client_streams.push(ClientStream::new(peer_id.clone(), media));
        }
        self.shared.bump();

        self.logger
            .info(&format!("[ROOM] Peer '{}' joined as {}", name, peer_id));
        peer_id
    }

    /// Removes a peer and its stream. Returns false for an unknown id.
    pub fn remove_peer(&self, peer_id: &str) -> bool {
        let removed = {
            let mut state = self.shared.lock();
            let before = state.users.len();
            state.users.retain(|user| user.id != peer_id);
            for stream in state.client_streams.iter().filter(|s| s.peer_id == peer_id) {
                stream.media.stop_audio();
            }
            state.client_streams.retain(|stream| stream.peer_id != peer_id);
            state.users.len() != before
        };

        if removed {
            self.shared.bump();
            self.logger.info(&format!("[ROOM] Peer {} left", peer_id));
        }
        removed
    }

    pub fn framerate(&self) -> u32 {
        self.shared.framerate.load(Ordering::Acquire)
    }

    fn update_self(&self, f: impl FnOnce(&mut RoomUser)) {
        let mut state = self.shared.lock();
        if let Some(user) = state.users.iter_mut().find(|user| user.you) {
            f(user);
        }
    }
}

impl RoomConnection for LocalRoom {
    fn snapshot(&self) -> RoomState {
        self.shared.lock().clone()
    }

    fn revision(&self) -> u64 {
        self.shared.revision.load(Ordering::Acquire)
    }

    fn share(&self) -> Result<(), RoomError> {
        {
            let mut state = self.shared.lock();
            if state.host_media.is_some() {
                return Err(RoomError::AlreadySharing);
            }
            state.host_media = Some(MediaHandle::new(format!("host-{}", state.id)));
        }
        self.update_self(|user| user.streaming = true);
        self.shared.bump();

        self.logger.info("[ROOM] Screen share started");
        Ok(())
    }

    fn stop_share(&self) -> Result<(), RoomError> {
        {
            let mut state = self.shared.lock();
            if state.host_media.take().is_none() {
                return Err(RoomError::NotSharing);
            }
        }
        self.update_self(|user| user.streaming = false);
        self.shared.bump();

        self.logger.info("[ROOM] Screen share stopped");
        Ok(())
    }

    fn set_name(&self, name: &str) -> Result<(), RoomError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RoomError::EmptyName);
        }
        self.update_self(|user| user.name = name.to_string());
        self.shared.bump();

        self.logger.info(&format!("[ROOM] Display name set to '{}'", name));
        Ok(())
    }

    fn set_framerate(&self, fps: u32) {
        self.shared.framerate.store(fps.clamp(1, 60), Ordering::Release);
    }
}

impl Drop for LocalRoom {
    fn drop(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        if let Some(handle) = self.feed.take() {
            let _ = handle.join();
        }
    }
}

/// Produces one frame per stream per tick, holding the configured rate by
/// compensating for the time spent rendering.
fn run_feed(shared: Arc<Shared>) {
    let mut tick: u64 = 0;

    while shared.running.load(Ordering::Acquire) {
        let frame_start = Instant::now();

        for media in shared.media_handles() {
            let seed = media.id().as_str().bytes().map(u64::from).sum::<u64>();
            media.push_frame(test_pattern(FRAME_WIDTH, FRAME_HEIGHT, seed, tick));
        }
        tick = tick.wrapping_add(1);

        let fps = shared.framerate.load(Ordering::Acquire).max(1);
        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(fps));
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }
}
