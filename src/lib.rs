//! Darkade - a two-game arcade launcher (Pong and Snake)
//!
//! Core modules:
//! - `sim`: Game entities (ball, paddles, snakes, food) and the replay ring buffer
//! - `renderer`: Drawing contract and the in-memory display list
//! - `platform`: Input and frame pacing abstraction, headless backend
//! - `ui`: Buttons and text widgets
//! - `scene`: Scene trait, transitions and the scene manager
//! - `scenes`: Menus, matches, countdown, replay, end screens
//! - `settings`: Launch configuration

pub mod error;
pub mod geometry;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{ConfigError, QuitRequested, SceneError};
pub use scene::{Scene, SceneContext, SceneManager, Transition};
pub use settings::{Settings, SnakeSpeed};

/// Frame rate constants
pub mod consts {
    /// Menus, Pong, countdowns
    pub const NORMAL_FPS: u32 = 60;

    /// Snake speed presets
    pub const SLOW_FPS: u32 = 15;
    pub const MEDIUM_FPS: u32 = 30;
    pub const FAST_FPS: u32 = 70;
}
