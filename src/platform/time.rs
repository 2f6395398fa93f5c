//! Frame pacing

use std::time::{Duration, Instant};

/// Sleeps away the rest of each frame to hold a target frame rate.
///
/// Late frames are not skipped; the next frame just starts late.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Block until one frame at `fps` has passed since the previous call.
    /// Returns the time actually spent in the frame.
    pub fn wait(&mut self, fps: u32) -> Duration {
        let budget = frame_budget(fps);
        let spent = self.last.elapsed();
        if spent < budget {
            std::thread::sleep(budget - spent);
        }
        let now = Instant::now();
        let frame_time = now - self.last;
        self.last = now;
        frame_time
    }
}

/// Duration of one frame at `fps` (zero fps means no pacing)
pub fn frame_budget(fps: u32) -> Duration {
    if fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs(1) / fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        assert_eq!(frame_budget(0), Duration::ZERO);
        assert_eq!(frame_budget(50), Duration::from_millis(20));
    }

    #[test]
    fn test_wait_holds_budget() {
        let mut clock = FrameClock::new();
        let spent = clock.wait(200);
        assert!(spent >= Duration::from_millis(5));
    }
}
