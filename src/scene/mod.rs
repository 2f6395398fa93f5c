//! Scene system
//!
//! A scene is one interactive mode: a menu, a match, a countdown, a replay or
//! an end screen. The `SceneManager` keeps the registry of live scenes and
//! ticks exactly one of them per frame.
//!
//! Flow per frame:
//!   host → `SceneManager::tick` → `Scene::tick` → `Option<Transition>`
//!   host → `SceneManager::apply` (if a transition came back)
//!   host → `SceneManager::render` → `Scene::draw`

pub mod manager;
pub mod transition;

pub use manager::{SceneContext, SceneFactory, SceneManager};
pub use transition::{
    CountdownSpec, EntryPolicy, ReplaySpec, SceneKind, SceneName, SceneSpec, Transition, names,
};

use glam::Vec2;

use crate::consts::NORMAL_FPS;
use crate::error::QuitRequested;
use crate::platform::FrameInput;
use crate::renderer::{Frame, Image, RenderTarget};

/// Outcome of one tick: keep going (`None`), switch scene, or quit
pub type TickResult = Result<Option<Transition>, QuitRequested>;

/// One discrete interactive mode.
///
/// Constructors build every entity up front, so a scene is complete before
/// its first tick. Scenes never see the manager; they only hand back
/// transitions.
pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Consume one frame of input and advance by one step.
    ///
    /// Implementations return `Err(QuitRequested)` when the input carries a
    /// quit event (`input.check_quit()?`).
    fn tick(&mut self, input: &FrameInput) -> TickResult;

    /// Draw background, then entities, then text overlays
    fn draw(&self, target: &mut dyn RenderTarget);

    /// Target ticks per second while this scene is active
    fn frame_rate(&self) -> u32 {
        NORMAL_FPS
    }
}

/// Render a scene off-screen and keep the result
pub fn capture(scene: &dyn Scene, size: Vec2) -> Image {
    let mut frame = Frame::new(size);
    scene.draw(&mut frame);
    frame.into_image()
}
