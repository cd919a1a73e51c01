//! Application State
//!
//! This module defines the main application state and initialization logic.
//! It implements the MVU (Model-View-Update) pattern's Controller component.
//!
//! # Architecture
//!
//! The `App` struct contains:
//! - **Room**: the room connection and the room view composed over it
//! - **Communication**: mpsc channels for logic thread coordination
//! - **Notifications**: toast system for user feedback
//!
//! # MVU Loop
//!
//! The `eframe::App::update()` implementation follows this flow:
//! 1. Process events from logic thread (non-blocking)
//! 2. Pull a new room snapshot if the room changed
//! 3. Track pointer activity and hotkeys
//! 4. Render the room view (collecting UI commands)
//! 5. Handle UI commands (state mutations)
//! 6. Render the toast and schedule the next repaint

use crate::components::Toast;
use crate::config::{AppConfig, Settings};
use crate::events::{LogicCommand, LogicEvent, UiCommand};
use crate::infrastructure::{
    HttpLiveLookup, LiveLookup, LocalAudioSink, LocalRoom, RoomConnection, SystemClipboard,
    UnavailableLookup,
};
use crate::logic::{LogicServices, run_logic_thread};
use crate::pages::{Room, RoomViewState};
use crate::playback::{AudioCommand, AudioOutput, HotkeyDispatcher};
use logging::Logger;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

const FRAME_REPAINT: Duration = Duration::from_millis(33);

/// Main application state - MVU Controller
pub struct App {
    // Config
    pub(super) config: AppConfig,

    // Logger
    pub(super) logger: Logger,

    // Room
    pub(super) room: Arc<dyn RoomConnection>,
    pub(super) room_view: RoomViewState,

    // UI State
    pub(super) current_toast: Option<Toast>,
    pub(super) rng: StdRng,

    // Logic Thread Communication
    pub(super) logic_cmd_tx: Sender<LogicCommand>,
    pub(super) logic_evt_rx: Receiver<LogicEvent>,
    logic_thread: Option<JoinHandle<()>>,
}

impl App {
    /// Create a new App instance with configuration and logger
    pub fn new() -> Self {
        // Load application configuration
        let config = AppConfig::load();

        // Initialize logger from configuration
        let logger = match Logger::with_component(
            config.log_path.clone(),
            config.log_level,
            "Frontend",
            config.log_console,
        ) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("Failed to initialize logger: {}", e);
                std::process::exit(1);
            }
        };

        logger.info("[APP] Initializing application...");
        logger.info(&format!(
            "[APP] Configuration loaded - room: {}, peers: {}, log_level: {}",
            config.room_id,
            config.peers.len(),
            config.log_level
        ));

        let mut room = LocalRoom::new(
            &config.room_id,
            &config.user_name,
            &config.peers,
            logger.for_component("Room"),
        );
        room.set_framerate(config.framerate);
        room.start_feed();
        let room: Arc<dyn RoomConnection> = Arc::new(room);

        let lookup: Arc<dyn LiveLookup> = match HttpLiveLookup::new(config.live_lookup_url.clone())
        {
            Ok(lookup) => Arc::new(lookup),
            Err(e) => {
                logger.error(&format!("[APP] Live lookup unavailable: {}", e));
                Arc::new(UnavailableLookup::new(e))
            }
        };

        let services = LogicServices {
            room: Arc::clone(&room),
            lookup,
            clipboard: Box::new(SystemClipboard::new()),
            audio: AudioOutput::new(Box::new(LocalAudioSink::new(logger.for_component("Audio")))),
        };

        let (logic_cmd_tx, logic_cmd_rx) = channel();
        let (logic_evt_tx, logic_evt_rx) = channel();

        logger.info("[APP] Starting logic thread...");
        let logic_logger = logger.for_component("Logic");
        let logic_thread = std::thread::Builder::new()
            .name("logic".to_string())
            .spawn(move || run_logic_thread(logic_cmd_rx, logic_evt_tx, services, logic_logger));
        let logic_thread = match logic_thread {
            Ok(handle) => Some(handle),
            Err(e) => {
                logger.error(&format!("[APP] Failed to start logic thread: {}", e));
                None
            }
        };

        let room_view = RoomViewState::new(
            Settings::from_config(&config),
            config.hide_delay,
            Instant::now(),
            logger.for_component("RoomView"),
        );

        let app = Self {
            config,
            logger: logger.clone(),
            room,
            room_view,
            current_toast: None,
            rng: StdRng::from_entropy(),
            logic_cmd_tx,
            logic_evt_rx,
            logic_thread,
        };

        logger.info("[APP] Application initialized successfully");
        app
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- MVU UPDATE LOOP ---
        let now = Instant::now();

        // 1. Process all pending logic events (from background threads)
        while let Ok(event) = self.logic_evt_rx.try_recv() {
            self.handle_logic_event(event);
        }

        // 2. Pick up roster and stream changes
        if let Some(commands) = self.room_view.refresh(self.room.as_ref()) {
            self.send_audio(commands);
        }

        // 3. Pointer activity keeps the controls up; expiry hides them
        if ctx.input(|i| i.pointer.is_moving()) {
            self.room_view.on_activity(now);
        }
        self.room_view.tick(now);

        let mut commands = HotkeyDispatcher::collect(ctx, self.room_view.hotkey_context());
        for command in &commands {
            self.logger.debug(&format!("[HOTKEY] {:?}", command));
        }
        if self.room_view.fullscreen && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            commands.push(UiCommand::ExitFullscreen);
        }

        // 4. Render the view and collect UI commands
        if let Some(command) = Room::show(ctx, &mut self.room_view) {
            commands.push(command);
        }

        // 5. Process UI commands
        for command in commands {
            self.handle_ui_command(ctx, command);
        }

        // 6. Render toast notification (if any)
        self.render_toast(ctx);

        // New frames arrive continuously; the hide deadline may come sooner.
        let next = self
            .room_view
            .time_until_hide(now)
            .map_or(FRAME_REPAINT, |remaining| remaining.min(FRAME_REPAINT));
        ctx.request_repaint_after(next);
    }

    /// Called when the app is about to close
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.logger.info("[APP] Application shutting down...");

        self.send_logic(LogicCommand::Audio(AudioCommand::Unbind));
        self.send_logic(LogicCommand::Shutdown);
        if let Some(handle) = self.logic_thread.take() {
            let _ = handle.join();
        }

        self.logger.info("[APP] Cleanup complete, goodbye!");
        if let Err(e) = self.logger.flush() {
            eprintln!("Failed to flush log: {}", e);
        }
    }
}

impl App {
    /// Renders a toast notification if one exists
    fn render_toast(&mut self, ctx: &egui::Context) {
        // Check if we have a toast to display
        if let Some(toast) = &self.current_toast {
            // show() returns true if user clicked dismiss OR toast expired
            if toast.show(ctx) {
                self.current_toast = None;
            }
        }
    }

    /// Sends a command to the logic thread, logging if it is gone
    pub(super) fn send_logic(&self, command: LogicCommand) {
        if let Err(e) = self.logic_cmd_tx.send(command) {
            self.logger
                .error(&format!("[APP] Logic thread disconnected: {:?}", e.0));
        }
    }

    /// Forwards audio router output to the logic thread
    pub(super) fn send_audio(&self, commands: Vec<AudioCommand>) {
        for command in commands {
            self.send_logic(LogicCommand::Audio(command));
        }
    }

    /// Shows an error toast notification to the user
    pub(super) fn show_error(&mut self, message: String) {
        self.current_toast = Some(Toast::error(message));
    }

    /// Shows a warning toast notification to the user
    pub(super) fn show_warning(&mut self, message: String) {
        self.current_toast = Some(Toast::warning(message));
    }

    /// Shows a success toast notification to the user
    pub(super) fn show_success(&mut self, message: String) {
        self.current_toast = Some(Toast::success(message));
    }

    /// Shows an info toast notification to the user
    pub(super) fn show_info(&mut self, message: String) {
        self.current_toast = Some(Toast::info(message));
    }
}
