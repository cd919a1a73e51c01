//! Configuration Module
//!
//! Handles application configuration loading and the in-memory settings
//! derived from it.

mod app_config;
mod settings;

pub use app_config::{AppConfig, ConfigError};
pub use settings::{CODECS, DisplayMode, Settings};
