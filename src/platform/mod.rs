//! Platform abstraction layer
//!
//! Handles the pieces the game core only sees through traits:
//! - Input events and held keys (`InputSource`, sampled into `FrameInput`)
//! - Frame pacing (`FrameClock`)
//! - A headless scripted input backend for the native binary and tests

pub mod headless;
pub mod input;
pub mod time;

pub use headless::{ScriptStep, ScriptedInput};
pub use input::{FrameInput, InputEvent, InputSource, Key};
pub use time::FrameClock;
