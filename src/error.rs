//! Error and control-flow signal types
//!
//! `QuitRequested` is not a failure: it is the clean-shutdown signal a scene
//! raises from `tick` when the window asks to close. Only the host loop
//! consumes it.

use std::path::PathBuf;

/// Clean shutdown requested by the player (window close / quit event)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("quit requested")]
pub struct QuitRequested;

/// Fatal scene wiring errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// Target is not registered (or is removed by the transition itself)
    /// and the transition carries nothing to construct it from.
    #[error("invalid transition to `{target}`: scene is not registered and no constructor was given")]
    InvalidTransition { target: String },
}

/// Errors loading the settings file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}
