//! Frame timing.
//!
//! The app ticks a [`FrameClock`] once at the head of every frame and hands
//! the resulting delta (milliseconds) to the input mapper, so continuous
//! movement is independent of frame rate.

use std::time::Instant;

/// Upper bound on a single frame delta, so a stall doesn't teleport the camera.
pub const MAX_FRAME_DELTA_MS: f32 = 100.0;

pub struct FrameClock {
    last_tick: Instant,
    frame_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frame_count: 0,
        }
    }

    /// Advance by one frame and return the milliseconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw = (now - self.last_tick).as_secs_f32() * 1000.0;
        self.last_tick = now;
        self.frame_count += 1;
        raw.min(MAX_FRAME_DELTA_MS)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_bounded_and_counts() {
        let mut clock = FrameClock::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let dt = clock.tick();
        assert!(dt > 0.0 && dt <= MAX_FRAME_DELTA_MS);
        clock.tick();
        assert_eq!(clock.frame_count(), 2);
    }
}
