//! Application Configuration
//!
//! Manages client configuration: the room to show, where its join link and
//! live broadcasts live, the local peers and logging settings.

use logging::LogLevel;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_FILE: &str = "screenroom.conf";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub room_id: String,
    /// Prefix of the join link; the room id is appended.
    pub join_url: String,
    /// Base URL of the live lookup service, ending in `/`.
    pub live_lookup_url: String,
    pub log_path: PathBuf,
    pub log_level: LogLevel,
    /// Also echo log lines to stdout.
    pub log_console: bool,
    pub user_name: String,
    /// Code used for live lookups.
    pub room_code: String,
    /// Names of the peers seeded into the local room.
    pub peers: Vec<String>,
    pub framerate: u32,
    pub hide_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            room_id: "lobby".to_string(),
            join_url: "http://127.0.0.1:8080/room/".to_string(),
            live_lookup_url: "http://127.0.0.1:8080/".to_string(),
            log_path: PathBuf::from("screenroom.log"),
            log_level: LogLevel::Info,
            log_console: false,
            user_name: "guest".to_string(),
            room_code: "lobby".to_string(),
            peers: vec!["alice".to_string(), "bob".to_string(), "carol".to_string()],
            framerate: 30,
            hide_delay: Duration::from_millis(1000),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a .conf file
    ///
    /// Format:
    /// ```text
    /// room_id=lobby
    /// join_url=http://127.0.0.1:8080/room/
    /// live_lookup_url=http://127.0.0.1:8080/
    /// peers=alice,bob
    /// log_level=Info
    /// ```
    ///
    /// Unknown keys and unparsable values are reported and skipped.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::default();
        for warning in config.apply(&content) {
            eprintln!("Warning: {}", warning);
        }
        Ok(config)
    }

    /// Applies every `key=value` line of `content` and returns the problems
    /// found along the way.
    pub fn apply(&mut self, content: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                warnings.push(format!("Malformed configuration line '{}' ignored", line));
                continue;
            };

            if let Err(e) = self.set(key.trim(), value.trim()) {
                warnings.push(e);
            }
        }

        warnings
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "room_id" => self.room_id = value.to_string(),
            "join_url" => self.join_url = value.to_string(),
            "live_lookup_url" => self.live_lookup_url = with_trailing_slash(value),
            "log_path" => self.log_path = PathBuf::from(value),
            "log_level" => self.log_level = parse_value(key, value)?,
            "log_console" => self.log_console = parse_value(key, value)?,
            "user_name" => self.user_name = value.to_string(),
            "room_code" => self.room_code = value.to_string(),
            "peers" => {
                self.peers = value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "framerate" => self.framerate = parse_value::<u32>(key, value)?.clamp(1, 60),
            "hide_delay_ms" => {
                self.hide_delay = Duration::from_millis(parse_value(key, value)?);
            }
            _ => {
                // Ignore unknown keys for forward compatibility
                return Err(format!("Unknown configuration key '{}' ignored", key));
            }
        }
        Ok(())
    }

    /// Link other people use to join this room.
    pub fn join_link(&self) -> String {
        format!("{}{}", self.join_url, self.room_id)
    }

    /// Candidate configuration files, in lookup order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(CONFIG_FILE),
            PathBuf::from("frontend").join(CONFIG_FILE),
            PathBuf::from("..").join(CONFIG_FILE),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("screenroom").join(CONFIG_FILE));
        }
        paths
    }

    /// Loads configuration from the first readable file in
    /// [`search_paths`](Self::search_paths), falling back to defaults.
    pub fn load() -> Self {
        for path in Self::search_paths() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    println!("Loaded configuration from: {}", path.display());
                    return config;
                }
                Err(_) => continue,
            }
        }

        println!("No configuration file found, using defaults");
        Self::default()
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, String> {
    value.parse().map_err(|_| {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
        .to_string()
    })
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
