//! In-memory room settings edited from the settings sidebar.

use super::AppConfig;
use egui::Vec2;

pub const CODECS: [&str; 4] = ["vp8", "vp9", "h264", "av1"];

/// How the main video is sized inside the available area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    FitToWindow,
    OriginalSize,
    FitWidth,
    FitHeight,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] = [
        DisplayMode::FitToWindow,
        DisplayMode::OriginalSize,
        DisplayMode::FitWidth,
        DisplayMode::FitHeight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::FitToWindow => "Fit to window",
            DisplayMode::OriginalSize => "Original size",
            DisplayMode::FitWidth => "Fit width",
            DisplayMode::FitHeight => "Fit height",
        }
    }

    /// Size to draw a frame of `image` pixels inside `available`.
    /// Every mode except `OriginalSize` keeps the aspect ratio.
    pub fn fit(self, image: Vec2, available: Vec2) -> Vec2 {
        if image.x <= 0.0 || image.y <= 0.0 {
            return Vec2::ZERO;
        }

        let scale = match self {
            DisplayMode::OriginalSize => return image,
            DisplayMode::FitToWindow => (available.x / image.x).min(available.y / image.y),
            DisplayMode::FitWidth => available.x / image.x,
            DisplayMode::FitHeight => available.y / image.y,
        };
        image * scale.max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub name: String,
    pub prefer_codec: String,
    pub display_mode: DisplayMode,
    pub framerate: u32,
    /// Room code used for live lookups.
    pub code: String,
}

impl Settings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            name: config.user_name.clone(),
            prefer_codec: CODECS[0].to_string(),
            display_mode: DisplayMode::default(),
            framerate: config.framerate,
            code: config.room_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_to_window_keeps_aspect() {
        let size = DisplayMode::FitToWindow.fit(Vec2::new(1600.0, 900.0), Vec2::new(800.0, 800.0));
        assert_eq!(size, Vec2::new(800.0, 450.0));

        let size = DisplayMode::FitToWindow.fit(Vec2::new(900.0, 1600.0), Vec2::new(800.0, 800.0));
        assert_eq!(size, Vec2::new(450.0, 800.0));
    }

    #[test]
    fn test_fit_width_and_height() {
        let image = Vec2::new(400.0, 200.0);
        let available = Vec2::new(800.0, 300.0);

        assert_eq!(DisplayMode::FitWidth.fit(image, available), Vec2::new(800.0, 400.0));
        assert_eq!(DisplayMode::FitHeight.fit(image, available), Vec2::new(600.0, 300.0));
    }

    #[test]
    fn test_original_size_ignores_available() {
        let image = Vec2::new(1920.0, 1080.0);
        assert_eq!(DisplayMode::OriginalSize.fit(image, Vec2::new(10.0, 10.0)), image);
    }

    #[test]
    fn test_empty_image() {
        assert_eq!(DisplayMode::FitToWindow.fit(Vec2::ZERO, Vec2::new(10.0, 10.0)), Vec2::ZERO);
    }

    #[test]
    fn test_settings_from_config() {
        let config = AppConfig {
            user_name: "dana".to_string(),
            room_code: "abc".to_string(),
            framerate: 24,
            ..AppConfig::default()
        };
        let settings = Settings::from_config(&config);

        assert_eq!(settings.name, "dana");
        assert_eq!(settings.code, "abc");
        assert_eq!(settings.framerate, 24);
        assert_eq!(settings.display_mode, DisplayMode::FitToWindow);
    }
}
