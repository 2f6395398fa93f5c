//! Input contract and per-tick input snapshot

use std::collections::HashSet;

use glam::Vec2;

use crate::error::QuitRequested;

/// Keys the launcher cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Enter,
    /// Number row key `1`-`9`
    Digit(u8),
}

impl Key {
    /// Zero-based menu slot selected by a number key (`1` -> 0)
    pub fn menu_index(self) -> Option<usize> {
        match self {
            Key::Digit(n @ 1..=9) => Some(usize::from(n - 1)),
            _ => None,
        }
    }
}

/// Discrete events reported since the previous poll
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close / shutdown request
    Quit,
    KeyUp(Key),
    /// Mouse button released at a screen position
    MouseUp(Vec2),
}

/// Source of raw input, polled once per frame by the host loop
pub trait InputSource {
    /// Drain events since the previous poll
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Keys currently held down
    fn keys_down(&self) -> HashSet<Key>;
}

/// Everything a scene may read during one tick.
///
/// Sampled once per tick and dropped afterwards; nothing carries over.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    pub keys_down: HashSet<Key>,
}

impl FrameInput {
    /// Take this frame's snapshot from an input source
    pub fn sample(source: &mut dyn InputSource) -> Self {
        let events = source.poll_events();
        Self {
            events,
            keys_down: source.keys_down(),
        }
    }

    /// Input with the given keys held and no events
    pub fn holding(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys_down: keys.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Input with the given events and no held keys
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Raise the shutdown signal if a quit event arrived this frame
    pub fn check_quit(&self) -> Result<(), QuitRequested> {
        if self.events.contains(&InputEvent::Quit) {
            Err(QuitRequested)
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// True if `key` was released this frame
    pub fn released(&self, key: Key) -> bool {
        self.events.contains(&InputEvent::KeyUp(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_index_range() {
        assert_eq!(Key::Digit(1).menu_index(), Some(0));
        assert_eq!(Key::Digit(9).menu_index(), Some(8));
        assert_eq!(Key::Digit(0).menu_index(), None);
        assert_eq!(Key::Enter.menu_index(), None);
    }

    #[test]
    fn test_check_quit() {
        assert!(FrameInput::default().check_quit().is_ok());
        let input = FrameInput::with_events([InputEvent::KeyUp(Key::W), InputEvent::Quit]);
        assert_eq!(input.check_quit(), Err(QuitRequested));
    }

    #[test]
    fn test_released_vs_held() {
        let mut input = FrameInput::holding([Key::Up]);
        input.events.push(InputEvent::KeyUp(Key::Enter));
        assert!(input.is_down(Key::Up));
        assert!(!input.released(Key::Up));
        assert!(input.released(Key::Enter));
    }
}
