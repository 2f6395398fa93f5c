//! Scene manager
//!
//! Owns every live scene. The active scene is held apart from the parked
//! ones, so "the active name always resolves" holds by construction: the
//! registry is `parked ∪ {active}`.

use std::collections::HashMap;

use glam::Vec2;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::transition::{EntryPolicy, SceneKind, SceneName, SceneSpec, Transition};
use super::{Scene, TickResult};
use crate::error::SceneError;
use crate::platform::FrameInput;
use crate::renderer::{Renderer, palette};
use crate::settings::Settings;

/// Shared construction inputs for scenes
#[derive(Debug, Clone)]
pub struct SceneContext {
    pub viewport: Vec2,
    pub settings: Settings,
    rng: Pcg32,
}

impl SceneContext {
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        debug!("Scene RNG seed: {}", seed);
        Self {
            viewport: settings.display_size(),
            settings,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed for a newly constructed scene's own RNG
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}

/// Constructor dispatch: builds a scene from its spec
pub type SceneFactory = fn(SceneSpec, &mut SceneContext) -> Box<dyn Scene>;

/// Registry of live scenes plus the one being run
pub struct SceneManager {
    active_name: SceneName,
    active: Box<dyn Scene>,
    /// Registered but inactive scenes, resumable by name
    parked: HashMap<SceneName, Box<dyn Scene>>,
    frame_rate: u32,
    context: SceneContext,
    factory: SceneFactory,
}

impl SceneManager {
    /// Start with `scene` registered as `name` and active
    pub fn activate(scene: Box<dyn Scene>, name: SceneName, context: SceneContext) -> Self {
        let frame_rate = scene.frame_rate();
        info!("Activated initial scene '{}' at {} fps", name, frame_rate);
        Self {
            active_name: name,
            active: scene,
            parked: HashMap::new(),
            frame_rate,
            context,
            factory: crate::scenes::build,
        }
    }

    /// Replace the constructor dispatch table
    pub fn with_factory(mut self, factory: SceneFactory) -> Self {
        self.factory = factory;
        self
    }

    pub fn active_name(&self) -> SceneName {
        self.active_name
    }

    pub fn active_kind(&self) -> SceneKind {
        self.active.kind()
    }

    /// Target ticks per second of the active scene
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn context(&self) -> &SceneContext {
        &self.context
    }

    /// True if `name` is registered (active or parked)
    pub fn contains(&self, name: &str) -> bool {
        self.active_name == name || self.parked.contains_key(name)
    }

    /// Number of registered scenes
    pub fn len(&self) -> usize {
        self.parked.len() + 1
    }

    /// Never true: one scene is always active
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<SceneName> {
        let mut names: Vec<_> = self
            .parked
            .keys()
            .copied()
            .chain(std::iter::once(self.active_name))
            .collect();
        names.sort_unstable();
        names
    }

    /// Run one tick of the active scene, returning its result unchanged
    pub fn tick(&mut self, input: &FrameInput) -> TickResult {
        self.active.tick(input)
    }

    /// Switch scenes as described by `transition`.
    ///
    /// The next scene is resolved (looked up or constructed) before the
    /// registry changes, so a rejected transition leaves everything as it
    /// was.
    pub fn apply(&mut self, transition: Transition) -> Result<(), SceneError> {
        let Transition {
            target,
            spawn,
            policy,
            delete_current,
            clear_all,
        } = transition;

        let survives = if target == self.active_name {
            !delete_current
        } else {
            self.parked.contains_key(target)
        };
        let resume = policy == EntryPolicy::ResumeExisting && !clear_all && survives;

        if resume && target == self.active_name {
            debug!("Transition to already active scene '{}'", target);
            self.frame_rate = self.active.frame_rate();
            return Ok(());
        }

        let next = if resume {
            self.parked.remove(target)
        } else {
            spawn.map(|spec| (self.factory)(spec, &mut self.context))
        };
        let Some(next) = next else {
            return Err(SceneError::InvalidTransition {
                target: target.to_string(),
            });
        };

        let previous_name = self.active_name;
        let previous = std::mem::replace(&mut self.active, next);
        if clear_all {
            debug!("Dropping {} registered scenes", self.parked.len() + 1);
            self.parked.clear();
            drop(previous);
        } else if delete_current {
            drop(previous);
        } else {
            self.parked.insert(previous_name, previous);
        }

        // A fresh construction replaces any instance still registered under
        // the same name
        if self.parked.remove(target).is_some() {
            warn!("Replaced registered scene '{}' with a fresh instance", target);
        }

        self.active_name = target;
        self.frame_rate = self.active.frame_rate();
        info!(
            "Scene '{}' -> '{}' ({}; delete_current={}, clear_all={}) at {} fps",
            previous_name,
            target,
            if resume { "resumed" } else { "constructed" },
            delete_current,
            clear_all,
            self.frame_rate
        );
        Ok(())
    }

    /// Clear the display, draw the active scene, present
    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        renderer.clear(palette::BLACK);
        self.active.draw(renderer);
        renderer.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuitRequested;
    use crate::platform::InputEvent;
    use crate::renderer::{Frame, RenderTarget};
    use crate::scene::names;
    use crate::settings::SnakeSpeed;

    /// Counts its own ticks and draws the count
    struct Probe {
        kind: SceneKind,
        ticks: u32,
        fps: u32,
    }

    impl Scene for Probe {
        fn kind(&self) -> SceneKind {
            self.kind
        }

        fn tick(&mut self, input: &FrameInput) -> TickResult {
            input.check_quit()?;
            self.ticks += 1;
            Ok(None)
        }

        fn draw(&self, target: &mut dyn RenderTarget) {
            target.draw_text(&self.ticks.to_string(), Vec2::ZERO, palette::WHITE, 10.0);
        }

        fn frame_rate(&self) -> u32 {
            self.fps
        }
    }

    fn probe_factory(spec: SceneSpec, _ctx: &mut SceneContext) -> Box<dyn Scene> {
        let fps = match &spec {
            SceneSpec::SnakeSingle { speed } => speed.frame_rate(),
            _ => 60,
        };
        Box::new(Probe {
            kind: spec.kind(),
            ticks: 0,
            fps,
        })
    }

    fn manager() -> SceneManager {
        let settings = Settings {
            seed: Some(1),
            ..Default::default()
        };
        let menu = Box::new(Probe {
            kind: SceneKind::MainMenu,
            ticks: 0,
            fps: 60,
        });
        SceneManager::activate(menu, names::MAIN_MENU, SceneContext::new(settings))
            .with_factory(probe_factory)
    }

    fn drawn_ticks(manager: &SceneManager) -> String {
        let mut frame = Frame::new(Vec2::new(100.0, 100.0));
        manager.render(&mut frame);
        assert_eq!(frame.presented(), 1);
        frame
            .commands()
            .iter()
            .find_map(|c| match c {
                crate::renderer::DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_activate() {
        let m = manager();
        assert_eq!(m.active_name(), names::MAIN_MENU);
        assert_eq!(m.active_kind(), SceneKind::MainMenu);
        assert_eq!(m.len(), 1);
        assert_eq!(m.frame_rate(), 60);
    }

    #[test]
    fn test_construct_and_park() {
        let mut m = manager();
        m.apply(Transition::to(names::PONG_MENU, SceneSpec::PongMenu)).unwrap();
        assert_eq!(m.active_name(), names::PONG_MENU);
        assert_eq!(m.active_kind(), SceneKind::PongMenu);
        assert_eq!(m.names(), vec![names::MAIN_MENU, names::PONG_MENU]);
    }

    #[test]
    fn test_resume_keeps_state() {
        let mut m = manager();
        m.tick(&FrameInput::default()).unwrap();
        m.tick(&FrameInput::default()).unwrap();
        m.apply(Transition::to(names::PONG_MENU, SceneSpec::PongMenu)).unwrap();
        m.apply(Transition::to(names::MAIN_MENU, SceneSpec::MainMenu)).unwrap();
        assert_eq!(drawn_ticks(&m), "2");
    }

    #[test]
    fn test_construct_fresh_replaces_state() {
        let mut m = manager();
        m.tick(&FrameInput::default()).unwrap();
        m.apply(Transition::to(names::PONG_MENU, SceneSpec::PongMenu)).unwrap();
        m.apply(Transition::fresh(names::MAIN_MENU, SceneSpec::MainMenu)).unwrap();
        assert_eq!(drawn_ticks(&m), "0");
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_fresh_on_active_name_rebuilds() {
        let mut m = manager();
        m.tick(&FrameInput::default()).unwrap();
        m.apply(Transition::fresh(names::MAIN_MENU, SceneSpec::MainMenu)).unwrap();
        assert_eq!(drawn_ticks(&m), "0");
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_delete_current() {
        let mut m = manager();
        m.apply(Transition::to(names::PONG_MENU, SceneSpec::PongMenu)).unwrap();
        m.apply(Transition::to(names::PONG_MATCH, SceneSpec::PongMatch).deleting_current())
            .unwrap();
        assert!(!m.contains(names::PONG_MENU));
        assert!(m.contains(names::MAIN_MENU));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_clear_all_leaves_only_target() {
        let mut m = manager();
        m.apply(Transition::to(names::PONG_MENU, SceneSpec::PongMenu)).unwrap();
        m.apply(Transition::to(names::PONG_MATCH, SceneSpec::PongMatch)).unwrap();
        assert_eq!(m.len(), 3);

        m.apply(Transition::to(names::MAIN_MENU, SceneSpec::MainMenu).clearing_all())
            .unwrap();
        assert_eq!(m.names(), vec![names::MAIN_MENU]);
        // Rebuilt, not resumed
        assert_eq!(drawn_ticks(&m), "0");
    }

    #[test]
    fn test_invalid_transition_is_atomic() {
        let mut m = manager();
        m.apply(Transition::to(names::PONG_MENU, SceneSpec::PongMenu)).unwrap();

        let err = m
            .apply(Transition::resume(names::PONG_MATCH).clearing_all())
            .unwrap_err();
        assert_eq!(
            err,
            SceneError::InvalidTransition {
                target: names::PONG_MATCH.to_string()
            }
        );
        assert_eq!(m.active_name(), names::PONG_MENU);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_resume_of_deleted_self_is_invalid() {
        let mut m = manager();
        let err = m.apply(Transition::resume(names::MAIN_MENU).deleting_current());
        assert!(err.is_err());
        assert_eq!(m.active_name(), names::MAIN_MENU);
    }

    #[test]
    fn test_resume_parked_without_spec() {
        let mut m = manager();
        m.apply(Transition::to(names::PONG_MATCH, SceneSpec::PongMatch)).unwrap();
        m.apply(Transition::to(names::COUNTDOWN, SceneSpec::PongMenu)).unwrap();
        m.apply(Transition::resume(names::PONG_MATCH).deleting_current())
            .unwrap();
        assert_eq!(m.active_kind(), SceneKind::PongMatch);
        assert!(!m.contains(names::COUNTDOWN));
    }

    #[test]
    fn test_frame_rate_follows_target() {
        let mut m = manager();
        m.apply(Transition::to(
            names::SNAKE_SINGLE,
            SceneSpec::SnakeSingle {
                speed: SnakeSpeed::Slow,
            },
        ))
        .unwrap();
        assert_eq!(m.frame_rate(), 15);
        m.apply(Transition::resume(names::MAIN_MENU)).unwrap();
        assert_eq!(m.frame_rate(), 60);
    }

    #[test]
    fn test_quit_passes_through() {
        let mut m = manager();
        let result = m.tick(&FrameInput::with_events([InputEvent::Quit]));
        assert!(matches!(result, Err(QuitRequested)));
    }
}
