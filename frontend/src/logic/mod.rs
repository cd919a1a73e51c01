// Main logic thread coordinator

pub mod utils;

use crate::events::{LogicCommand, LogicEvent};
use crate::infrastructure::{Clipboard, LiveLookup, RoomConnection};
use crate::playback::AudioOutput;
use logging::Logger;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

/// Everything the logic thread acts on.
pub struct LogicServices {
    pub room: Arc<dyn RoomConnection>,
    pub lookup: Arc<dyn LiveLookup>,
    pub clipboard: Box<dyn Clipboard>,
    pub audio: AudioOutput,
}

/// Main function of the logic thread.
/// Receives `LogicCommand`s and sends `LogicEvent`s back to the UI thread.
/// Returns on `Shutdown` or when the UI side hangs up.
pub fn run_logic_thread(
    cmd_rx: Receiver<LogicCommand>,
    evt_tx: Sender<LogicEvent>,
    mut services: LogicServices,
    logger: Logger,
) {
    logger.info("[LOGIC] Logic thread started");

    // Main loop: blocking wait for commands
    for command in cmd_rx {
        match command {
            LogicCommand::StartShare => {
                let result = services.room.share();
                if let Err(e) = &result {
                    logger.warn(&format!("[LOGIC] Share failed: {}", e));
                }
                let _ = evt_tx.send(LogicEvent::ShareChanged {
                    sharing: true,
                    result,
                });
            }

            LogicCommand::StopShare => {
                let result = services.room.stop_share();
                if let Err(e) = &result {
                    logger.warn(&format!("[LOGIC] Stop share failed: {}", e));
                }
                let _ = evt_tx.send(LogicEvent::ShareChanged {
                    sharing: false,
                    result,
                });
            }

            LogicCommand::LookupLive { generation, code } => {
                spawn_live_lookup(&services.lookup, generation, code, &evt_tx, &logger);
            }

            LogicCommand::CopyToClipboard { text } => {
                let result = services.clipboard.set_text(&text);
                match &result {
                    Ok(()) => logger.debug(&format!("[LOGIC] Copied '{}' to clipboard", text)),
                    Err(e) => logger.warn(&format!("[LOGIC] Clipboard write failed: {}", e)),
                }
                let _ = evt_tx.send(LogicEvent::LinkCopied(result));
            }

            LogicCommand::Audio(audio_command) => {
                logger.debug(&format!("[LOGIC] Audio command: {:?}", audio_command));
                if let Some((stream, result)) = services.audio.apply(audio_command) {
                    let _ = evt_tx.send(LogicEvent::AudioPlayFinished { stream, result });
                }
            }

            LogicCommand::Shutdown => {
                logger.info("[LOGIC] Shutdown requested");
                break;
            }
        }
    }

    logger.info("[LOGIC] Logic thread stopped");
}

/// Runs the lookup on its own thread so a slow service never delays other
/// commands. The result is tagged with `generation` for the UI to check.
fn spawn_live_lookup(
    lookup: &Arc<dyn LiveLookup>,
    generation: u64,
    code: String,
    evt_tx: &Sender<LogicEvent>,
    logger: &Logger,
) {
    logger.info(&format!(
        "[LOGIC] Looking up live streams for '{}' (generation {})",
        code, generation
    ));

    let lookup = Arc::clone(lookup);
    let thread_tx = evt_tx.clone();
    let spawned = std::thread::Builder::new()
        .name("live-lookup".to_string())
        .spawn(move || {
            let result = lookup.lookup(&code);
            let _ = thread_tx.send(LogicEvent::LiveLookupFinished { generation, result });
        });

    if let Err(e) = spawned {
        logger.error(&format!("[LOGIC] Failed to spawn live lookup: {}", e));
        let _ = evt_tx.send(LogicEvent::Error(format!("Live lookup failed to start: {}", e)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{ClipboardError, LiveLookupError, LocalRoom, RoomError};
    use crate::models::{AudioTrack, MediaHandle, StreamId};
    use crate::playback::{AudioCommand, AudioSink, MediaSurface, PlaybackError};
    use logging::{LogLevel, MemorySink};
    use std::sync::Mutex;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    struct FixedLookup(Result<Vec<String>, LiveLookupError>);

    impl LiveLookup for FixedLookup {
        fn lookup(&self, _code: &str) -> Result<Vec<String>, LiveLookupError> {
            self.0.clone()
        }
    }

    #[derive(Clone, Default)]
    struct FakeClipboard {
        text: Arc<Mutex<Option<String>>>,
        fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".to_string()));
            }
            *self.text.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct SilentSink {
        bound: bool,
    }

    impl MediaSurface for SilentSink {
        fn attach(&mut self, _media: &MediaHandle) {
            self.bound = true;
        }
        fn detach(&mut self) {
            self.bound = false;
        }
    }

    impl AudioSink for SilentSink {
        fn play(&mut self) -> Result<(), PlaybackError> {
            if self.bound {
                Ok(())
            } else {
                Err(PlaybackError::NotBound)
            }
        }
        fn pause(&mut self) {}
    }

    fn logger() -> Logger {
        Logger::with_sink(Box::new(MemorySink::new()), LogLevel::Debug)
    }

    /// Runs `commands` through a logic thread and collects every event.
    fn run(
        commands: Vec<LogicCommand>,
        lookup: FixedLookup,
        clipboard: FakeClipboard,
    ) -> (Vec<LogicEvent>, Arc<LocalRoom>) {
        let room = Arc::new(LocalRoom::new("r1", "me", &[], logger()));
        let services = LogicServices {
            room: room.clone(),
            lookup: Arc::new(lookup),
            clipboard: Box::new(clipboard),
            audio: AudioOutput::new(Box::new(SilentSink::default())),
        };

        let (cmd_tx, cmd_rx) = channel();
        let (evt_tx, evt_rx) = channel();
        for command in commands {
            cmd_tx.send(command).unwrap();
        }
        cmd_tx.send(LogicCommand::Shutdown).unwrap();

        run_logic_thread(cmd_rx, evt_tx, services, logger());

        let mut events = Vec::new();
        while let Ok(event) = evt_rx.recv_timeout(Duration::from_millis(500)) {
            events.push(event);
        }
        (events, room)
    }

    #[test]
    fn test_share_round_trip() {
        let (events, room) = run(
            vec![
                LogicCommand::StartShare,
                LogicCommand::StartShare,
                LogicCommand::StopShare,
            ],
            FixedLookup(Ok(vec![])),
            FakeClipboard::default(),
        );

        assert!(!room.snapshot().is_sharing());
        assert!(matches!(
            events[0],
            LogicEvent::ShareChanged { sharing: true, result: Ok(()) }
        ));
        assert!(matches!(
            events[1],
            LogicEvent::ShareChanged {
                sharing: true,
                result: Err(RoomError::AlreadySharing)
            }
        ));
        assert!(matches!(
            events[2],
            LogicEvent::ShareChanged { sharing: false, result: Ok(()) }
        ));
    }

    #[test]
    fn test_live_lookup_carries_generation() {
        let (events, _) = run(
            vec![LogicCommand::LookupLive {
                generation: 7,
                code: "abc".to_string(),
            }],
            FixedLookup(Ok(vec!["urlA".to_string()])),
            FakeClipboard::default(),
        );

        match &events[..] {
            [LogicEvent::LiveLookupFinished { generation, result }] => {
                assert_eq!(*generation, 7);
                assert_eq!(result, &Ok(vec!["urlA".to_string()]));
            }
            other => panic!("unexpected events: {:?}", other),
        }
    }

    #[test]
    fn test_spawned_lookups_keep_caller_sender() {
        let lookup: Arc<dyn LiveLookup> = Arc::new(FixedLookup(Ok(vec!["u".to_string()])));
        let (evt_tx, evt_rx) = channel();

        spawn_live_lookup(&lookup, 1, "a".to_string(), &evt_tx, &logger());
        spawn_live_lookup(&lookup, 2, "a".to_string(), &evt_tx, &logger());
        evt_tx.send(LogicEvent::Error("marker".to_string())).unwrap();
        drop(evt_tx);

        let mut generations = Vec::new();
        let mut markers = 0;
        while let Ok(event) = evt_rx.recv_timeout(Duration::from_millis(500)) {
            match event {
                LogicEvent::LiveLookupFinished { generation, .. } => generations.push(generation),
                LogicEvent::Error(_) => markers += 1,
                other => panic!("unexpected event: {:?}", other),
            }
        }
        generations.sort();
        assert_eq!(generations, vec![1, 2]);
        assert_eq!(markers, 1);
    }

    #[test]
    fn test_clipboard_results() {
        let clipboard = FakeClipboard::default();
        let (events, _) = run(
            vec![LogicCommand::CopyToClipboard {
                text: "http://x/room/r1".to_string(),
            }],
            FixedLookup(Ok(vec![])),
            clipboard.clone(),
        );
        assert!(matches!(events[0], LogicEvent::LinkCopied(Ok(()))));
        assert_eq!(
            clipboard.text.lock().unwrap().as_deref(),
            Some("http://x/room/r1")
        );

        let failing = FakeClipboard {
            fail: true,
            ..FakeClipboard::default()
        };
        let (events, _) = run(
            vec![LogicCommand::CopyToClipboard {
                text: "x".to_string(),
            }],
            FixedLookup(Ok(vec![])),
            failing,
        );
        assert!(matches!(events[0], LogicEvent::LinkCopied(Err(_))));
    }

    #[test]
    fn test_audio_play_reports_result() {
        let media = MediaHandle::with_audio_tracks("a", vec![AudioTrack::new("mic")]);
        let (events, _) = run(
            vec![
                LogicCommand::Audio(AudioCommand::Play(StreamId::new("a"))),
                LogicCommand::Audio(AudioCommand::Bind(media)),
                LogicCommand::Audio(AudioCommand::Play(StreamId::new("a"))),
                LogicCommand::Audio(AudioCommand::Pause),
            ],
            FixedLookup(Ok(vec![])),
            FakeClipboard::default(),
        );

        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            LogicEvent::AudioPlayFinished { result: Err(PlaybackError::NotBound), .. }
        ));
        assert!(matches!(
            &events[1],
            LogicEvent::AudioPlayFinished { result: Ok(()), .. }
        ));
    }
}
