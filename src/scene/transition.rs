//! Transition descriptors
//!
//! A scene asks for a change of scene by returning a `Transition` from its
//! tick. The descriptor names the target, optionally carries a typed
//! `SceneSpec` to construct it from, and says what happens to the scenes
//! left behind.

use crate::renderer::Image;
use crate::settings::SnakeSpeed;
use crate::sim::ReplayBuffer;

/// Registry key of a scene
pub type SceneName = &'static str;

/// Registry names used by the catalog
pub mod names {
    use super::SceneName;

    pub const MAIN_MENU: SceneName = "main_menu";
    pub const PONG_MENU: SceneName = "pong_main";
    pub const PONG_MATCH: SceneName = "pong_double";
    pub const PONG_END: SceneName = "pong_end";
    pub const SNAKE_MENU: SceneName = "snake_main";
    pub const SNAKE_SINGLE: SceneName = "snake_single";
    pub const SNAKE_END: SceneName = "snake_end";
    pub const SNAKE_DOUBLE: SceneName = "snake_double";
    pub const SNAKE_DOUBLE_END: SceneName = "snake_double_end";
    pub const COUNTDOWN: SceneName = "countdown";
    pub const REPLAY: SceneName = "replay";
}

/// Every kind of scene in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    MainMenu,
    PongMenu,
    SnakeMenu,
    PongMatch,
    PongEnd,
    SnakeSingle,
    SnakeEnd,
    SnakeDouble,
    SnakeDoubleEnd,
    Countdown,
    Replay,
}

/// Timed text over a frozen background, then `next`
#[derive(Debug, Clone)]
pub struct CountdownSpec {
    pub background: Image,
    pub lines: Vec<String>,
    pub frames_per_line: u32,
    pub next: Box<Transition>,
}

/// Playback of a recorded buffer, then `next`
#[derive(Debug, Clone)]
pub struct ReplaySpec {
    /// Moved in from the recording scene
    pub buffer: ReplayBuffer,
    /// Cadence the frames were recorded at
    pub frame_rate: u32,
    pub next: Box<Transition>,
}

/// Constructor selector plus its typed payload
#[derive(Debug, Clone)]
pub enum SceneSpec {
    MainMenu,
    PongMenu,
    SnakeMenu,
    PongMatch,
    PongEnd { left: u32, right: u32 },
    SnakeSingle { speed: SnakeSpeed },
    SnakeEnd { score: u32 },
    SnakeDouble { speed: SnakeSpeed },
    SnakeDoubleEnd { wins: [u32; 2] },
    Countdown(CountdownSpec),
    Replay(ReplaySpec),
}

impl SceneSpec {
    pub fn kind(&self) -> SceneKind {
        match self {
            SceneSpec::MainMenu => SceneKind::MainMenu,
            SceneSpec::PongMenu => SceneKind::PongMenu,
            SceneSpec::SnakeMenu => SceneKind::SnakeMenu,
            SceneSpec::PongMatch => SceneKind::PongMatch,
            SceneSpec::PongEnd { .. } => SceneKind::PongEnd,
            SceneSpec::SnakeSingle { .. } => SceneKind::SnakeSingle,
            SceneSpec::SnakeEnd { .. } => SceneKind::SnakeEnd,
            SceneSpec::SnakeDouble { .. } => SceneKind::SnakeDouble,
            SceneSpec::SnakeDoubleEnd { .. } => SceneKind::SnakeDoubleEnd,
            SceneSpec::Countdown(_) => SceneKind::Countdown,
            SceneSpec::Replay(_) => SceneKind::Replay,
        }
    }
}

/// What to do when the target name is already registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryPolicy {
    /// Re-enter the registered instance with its state intact; construct
    /// only if the name is absent
    #[default]
    ResumeExisting,
    /// Always construct, replacing any registered instance
    ConstructFresh,
}

/// Request to change the active scene
#[derive(Debug, Clone)]
pub struct Transition {
    pub target: SceneName,
    pub spawn: Option<SceneSpec>,
    pub policy: EntryPolicy,
    /// Drop the scene being left
    pub delete_current: bool,
    /// Drop every registered scene before activating the target
    pub clear_all: bool,
}

impl Transition {
    /// Resume `target` if registered, otherwise build it from `spec`
    pub fn to(target: SceneName, spec: SceneSpec) -> Self {
        Self {
            target,
            spawn: Some(spec),
            policy: EntryPolicy::ResumeExisting,
            delete_current: false,
            clear_all: false,
        }
    }

    /// Build `target` from `spec` even if an instance is registered
    pub fn fresh(target: SceneName, spec: SceneSpec) -> Self {
        Self {
            policy: EntryPolicy::ConstructFresh,
            ..Self::to(target, spec)
        }
    }

    /// Resume a registered scene; fails if `target` is not registered
    pub fn resume(target: SceneName) -> Self {
        Self {
            target,
            spawn: None,
            policy: EntryPolicy::ResumeExisting,
            delete_current: false,
            clear_all: false,
        }
    }

    pub fn deleting_current(mut self) -> Self {
        self.delete_current = true;
        self
    }

    pub fn clearing_all(mut self) -> Self {
        self.clear_all = true;
        self
    }

    /// Kind of scene this transition would construct, if any
    pub fn spawn_kind(&self) -> Option<SceneKind> {
        self.spawn.as_ref().map(SceneSpec::kind)
    }
}
