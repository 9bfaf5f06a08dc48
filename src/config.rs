//! Configuration file support for podcast-player.
//!
//! This module provides functionality for loading and saving user preferences
//! from a TOML configuration file.

use crossterm::event::{KeyCode, KeyEvent};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::Result;

/// User configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file to load when none is given on the command line
    #[serde(default)]
    pub catalog: Option<String>,

    /// Milliseconds between UI ticks; this is also the time-update rate
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Seconds to jump per seek key press
    #[serde(default = "default_seek_step")]
    pub seek_step: u64,

    /// Custom keybindings
    #[serde(default)]
    pub keybindings: Keybindings,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn default_tick_ms() -> u64 {
    250
}

fn default_seek_step() -> u64 {
    10
}

impl Config {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self {
            catalog: None,
            tick_ms: default_tick_ms(),
            seek_step: default_seek_step(),
            keybindings: Keybindings::default(),
        }
    }

    /// Get the path to the config file.
    ///
    /// Returns ~/.config/podcast-player/config.toml on Linux,
    /// or a platform-appropriate location on other systems.
    pub fn get_config_path() -> std::result::Result<PathBuf, io::Error> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Could not find config directory")
            })?
            .join("podcast-player");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::get_config_path()?;

        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = Self::get_config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Create a default config file if one doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn create_default_if_missing() -> Result<PathBuf> {
        let path = Self::get_config_path()?;

        if !path.exists() {
            Self::new().save()?;
        }

        Ok(path)
    }
}

/// Key names bound to each command.
///
/// A name is a single character (`"n"`, `"?"`) or one of `Enter`, `Esc`,
/// `Space`, `Tab`, `Backspace`, `Up`, `Down`, `Left`, `Right`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Keybindings {
    pub quit: Vec<String>,
    pub up: Vec<String>,
    pub down: Vec<String>,
    /// Play the selected episode on its own
    pub play: Vec<String>,
    /// Queue the whole catalog starting at the selected episode
    pub play_all: Vec<String>,
    pub toggle_play: Vec<String>,
    pub next: Vec<String>,
    pub previous: Vec<String>,
    pub shuffle: Vec<String>,
    pub repeat: Vec<String>,
    pub seek_forward: Vec<String>,
    pub seek_backward: Vec<String>,
    pub help: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for Keybindings {
    fn default() -> Self {
        Self {
            quit: keys(&["q"]),
            up: keys(&["k", "Up"]),
            down: keys(&["j", "Down"]),
            play: keys(&["Enter"]),
            play_all: keys(&["a"]),
            toggle_play: keys(&["Space"]),
            next: keys(&["n"]),
            previous: keys(&["p"]),
            shuffle: keys(&["s"]),
            repeat: keys(&["r"]),
            seek_forward: keys(&["l", "Right"]),
            seek_backward: keys(&["h", "Left"]),
            help: keys(&["?"]),
        }
    }
}

impl Keybindings {
    /// Check whether `key` is one of the keys in `binding`.
    pub fn matches(&self, binding: &[String], key: &KeyEvent) -> bool {
        binding
            .iter()
            .any(|name| parse_key(name) == Some(key.code))
    }
}

/// Parse a key name into a key code.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    match name {
        "Enter" => Some(KeyCode::Enter),
        "Esc" => Some(KeyCode::Esc),
        "Space" => Some(KeyCode::Char(' ')),
        "Tab" => Some(KeyCode::Tab),
        "Backspace" => Some(KeyCode::Backspace),
        "Up" => Some(KeyCode::Up),
        "Down" => Some(KeyCode::Down),
        "Left" => Some(KeyCode::Left),
        "Right" => Some(KeyCode::Right),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}
