//! Launcher settings
//!
//! Read-only: settings come from defaults or an optional JSON file given on
//! the command line. Nothing is ever written back.

use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::consts::{FAST_FPS, MEDIUM_FPS, SLOW_FPS};
use crate::error::ConfigError;

/// Snake speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnakeSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl SnakeSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnakeSpeed::Slow => "Slow",
            SnakeSpeed::Medium => "Medium",
            SnakeSpeed::Fast => "Fast",
        }
    }

    /// Ticks per second; the snake moves one cell per tick
    pub fn frame_rate(&self) -> u32 {
        match self {
            SnakeSpeed::Slow => SLOW_FPS,
            SnakeSpeed::Medium => MEDIUM_FPS,
            SnakeSpeed::Fast => FAST_FPS,
        }
    }

    /// Next preset in the menu selector, wrapping around
    pub fn next(&self) -> Self {
        match self {
            SnakeSpeed::Slow => SnakeSpeed::Medium,
            SnakeSpeed::Medium => SnakeSpeed::Fast,
            SnakeSpeed::Fast => SnakeSpeed::Slow,
        }
    }
}

/// Launcher settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,

    // === Simulation ===
    /// Seed for ball serves and food spawns (None = from system entropy)
    pub seed: Option<u64>,

    // === Rules ===
    /// Points needed to win a Pong match
    pub pong_win_score: u32,
    /// Rounds needed to win a versus Snake match
    pub snake_win_rounds: u32,
    /// Frames each countdown line stays on screen
    pub countdown_frames_per_line: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1300,
            window_height: 800,
            title: "Darkade".to_string(),

            seed: None,

            pong_win_score: 10,
            snake_win_rounds: 3,
            countdown_frames_per_line: 30,
        }
    }
}

impl Settings {
    /// Display size in pixels
    pub fn display_size(&self) -> Vec2 {
        Vec2::new(self.window_width as f32, self.window_height as f32)
    }

    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
