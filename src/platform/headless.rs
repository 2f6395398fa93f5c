//! Headless input backend
//!
//! Feeds a fixed script of inputs to the host loop. Used by the native binary
//! (no window system is linked) and by integration tests.

use std::collections::{HashSet, VecDeque};

use super::input::{InputEvent, InputSource, Key};

/// One scripted stretch of input
#[derive(Debug, Clone, Default)]
pub struct ScriptStep {
    /// How many frames this step lasts (at least one)
    pub frames: u32,
    /// Keys held for the whole step
    pub keys: HashSet<Key>,
    /// Events delivered on the first frame of the step
    pub events: Vec<InputEvent>,
}

impl ScriptStep {
    /// Hold `keys` for `frames` frames
    pub fn hold(frames: u32, keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            frames,
            keys: keys.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Release `key` once, then idle for the rest of `frames`
    pub fn tap(key: Key, frames: u32) -> Self {
        Self {
            frames,
            events: vec![InputEvent::KeyUp(key)],
            ..Default::default()
        }
    }

    /// Do nothing for `frames` frames
    pub fn idle(frames: u32) -> Self {
        Self::hold(frames, [])
    }
}

/// Input source that replays a script, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    steps: VecDeque<ScriptStep>,
    /// Frames already spent in the front step
    elapsed: u32,
    current: Option<ScriptStep>,
}

impl ScriptedInput {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            elapsed: 0,
            current: None,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let Some(step) = self.steps.front() else {
            self.current = None;
            return vec![InputEvent::Quit];
        };

        let events = if self.elapsed == 0 {
            step.events.clone()
        } else {
            Vec::new()
        };
        self.current = Some(step.clone());

        self.elapsed += 1;
        if self.elapsed >= step.frames.max(1) {
            self.steps.pop_front();
            self.elapsed = 0;
        }
        events
    }

    fn keys_down(&self) -> HashSet<Key> {
        self.current
            .as_ref()
            .map(|s| s.keys.clone())
            .unwrap_or_default()
    }
}
