//! Instant-replay ring buffer
//!
//! A fixed number of slots, written round-robin. Slots that were never written
//! stay `None` and are never handed out as frames.

use crate::renderer::Image;

/// Frames kept for instant replay
pub const REPLAY_CAPACITY: usize = 150;

/// Fixed-capacity ring of captured frames
#[derive(Debug, Clone)]
pub struct ReplayBuffer {
    slots: Vec<Option<Image>>,
    /// Next slot to write
    cursor: usize,
}

impl Default for ReplayBuffer {
    fn default() -> Self {
        Self::new(REPLAY_CAPACITY)
    }
}

impl ReplayBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: vec![None; capacity],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Next slot to be written
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Store a frame, overwriting the oldest once full
    pub fn record(&mut self, frame: Image) {
        self.slots[self.cursor] = Some(frame);
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// Slot written most recently (None if nothing was recorded)
    pub fn last_written(&self) -> Option<usize> {
        let last = (self.cursor + self.slots.len() - 1) % self.slots.len();
        self.slots[last].as_ref().map(|_| last)
    }

    pub fn is_empty(&self) -> bool {
        self.last_written().is_none()
    }

    /// Number of recorded frames
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn frame(&self, slot: usize) -> Option<&Image> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Slots to show, oldest first, ending with the last-written slot.
    ///
    /// Playback starts one past the last-written slot. If that slot was never
    /// written (the ring has not wrapped yet) it starts from slot 0 instead.
    pub fn playback_order(&self) -> Vec<usize> {
        let Some(last) = self.last_written() else {
            return Vec::new();
        };
        let cap = self.slots.len();
        let mut slot = (last + 1) % cap;
        if self.slots[slot].is_none() {
            slot = 0;
        }

        let mut order = Vec::with_capacity(cap);
        loop {
            order.push(slot);
            if slot == last {
                break;
            }
            slot = (slot + 1) % cap;
        }
        order
    }
}
