/// Toast notification component for transient messages: copy-link results,
/// playback and live lookup failures, share changes.
use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Toast notification type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Error,
    Warning,
    Success,
    Info,
}

impl ToastType {
    fn icon(&self) -> &str {
        match self {
            ToastType::Error => "❌",
            ToastType::Warning => "!",
            ToastType::Success => "✅",
            ToastType::Info => "ℹ",
        }
    }

    fn icon_color(&self) -> egui::Color32 {
        match self {
            ToastType::Error => egui::Color32::from_rgb(255, 100, 100),
            ToastType::Warning => egui::Color32::from_rgb(255, 200, 100),
            ToastType::Success => egui::Color32::from_rgb(100, 255, 100),
            ToastType::Info => egui::Color32::from_rgb(100, 150, 255),
        }
    }

    fn background_color(&self) -> egui::Color32 {
        match self {
            ToastType::Error => egui::Color32::from_rgba_premultiplied(80, 30, 30, 230),
            ToastType::Warning => egui::Color32::from_rgba_premultiplied(80, 70, 30, 230),
            ToastType::Success => egui::Color32::from_rgba_premultiplied(30, 80, 30, 230),
            ToastType::Info => egui::Color32::from_rgba_premultiplied(30, 50, 80, 230),
        }
    }
}

/// A single on-screen notification. Expires on its own after its duration
/// or when dismissed.
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    /// Creates a new toast with the default 5-second duration
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            message: message.into(),
            toast_type,
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Warning)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Info)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Time left before the toast expires at `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        (self.created_at + self.duration).saturating_duration_since(now)
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Renders the toast notification and returns true if it should be dismissed
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let now = Instant::now();
        if self.is_expired_at(now) {
            return true;
        }

        let mut should_dismiss = false;

        egui::Window::new("notification")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 80.0))
            .fixed_size(egui::vec2(350.0, 80.0))
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(self.toast_type.background_color())
                    .stroke(egui::Stroke::new(
                        1.5,
                        self.toast_type.icon_color().linear_multiply(0.7),
                    ))
                    .corner_radius(8.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(self.toast_type.icon())
                            .size(28.0)
                            .color(self.toast_type.icon_color()),
                    );

                    ui.add_space(10.0);

                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&self.message)
                                .size(14.0)
                                .color(egui::Color32::WHITE),
                        );

                        ui.add_space(5.0);

                        // Close button - manual dismiss
                        let button_color = self.toast_type.icon_color().linear_multiply(0.8);
                        if ui
                            .add(
                                egui::Button::new(
                                    egui::RichText::new("Dismiss").color(egui::Color32::WHITE),
                                )
                                .fill(button_color)
                                .stroke(egui::Stroke::NONE)
                                .corner_radius(4.0),
                            )
                            .clicked()
                        {
                            should_dismiss = true;
                        }
                    });
                });
            });

        // Wake up again when the toast is due to expire
        ctx.request_repaint_after(self.remaining(now));

        should_dismiss
    }
}
