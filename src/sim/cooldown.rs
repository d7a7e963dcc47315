//! Cooldown timers
//!
//! Two clocks drive gameplay and they are deliberately kept apart:
//! - `WallClockCooldown` gates on absolute milliseconds (spawns, shots,
//!   melee, wave checks), so it is unaffected by frame rate.
//! - `FrameCooldown` counts simulation frames (rapid fire, screen shake),
//!   so it runs faster or slower with the frame rate.

use serde::{Deserialize, Serialize};

/// Gate measured against a wall-clock timestamp (ms)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WallClockCooldown {
    /// Timestamp of the last trigger; `None` until the first one
    last_ms: Option<f64>,
}

impl WallClockCooldown {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Milliseconds since the last trigger (`None` if never triggered)
    pub fn elapsed(&self, now_ms: f64) -> Option<f64> {
        self.last_ms.map(|last| now_ms - last)
    }

    /// Ready once strictly more than `period_ms` has passed
    pub fn exceeded(&self, now_ms: f64, period_ms: f64) -> bool {
        self.elapsed(now_ms).is_none_or(|e| e > period_ms)
    }

    /// Ready once at least `period_ms` has passed
    pub fn reached(&self, now_ms: f64, period_ms: f64) -> bool {
        self.elapsed(now_ms).is_none_or(|e| e >= period_ms)
    }

    /// Record a trigger at `now_ms`
    pub fn trigger(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    pub fn last(&self) -> Option<f64> {
        self.last_ms
    }
}

/// Countdown measured in simulation frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameCooldown {
    remaining: u32,
}

impl FrameCooldown {
    pub fn new() -> Self {
        Self { remaining: 0 }
    }

    /// Restart the countdown (overwrites any time left)
    pub fn start(&mut self, frames: u32) {
        self.remaining = frames;
    }

    /// Advance one frame. Returns true on the frame the countdown expires.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whole seconds left at the target frame rate (rounded up)
    pub fn remaining_secs(&self) -> u32 {
        self.remaining.div_ceil(crate::consts::TARGET_FPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_ready_before_first_trigger() {
        let mut cd = WallClockCooldown::new();
        assert_eq!(cd.last(), None);
        assert!(cd.exceeded(0.0, 1000.0));
        assert!(cd.reached(0.0, 1000.0));
        cd.trigger(250.0);
        assert_eq!(cd.last(), Some(250.0));
        assert_eq!(cd.elapsed(1000.0), Some(750.0));
    }

    #[test]
    fn wall_clock_strict_vs_inclusive() {
        let mut cd = WallClockCooldown::new();
        cd.trigger(1000.0);
        assert!(!cd.exceeded(2000.0, 1000.0));
        assert!(cd.reached(2000.0, 1000.0));
        assert!(cd.exceeded(2000.5, 1000.0));
        assert!(!cd.reached(1999.0, 1000.0));
    }

    #[test]
    fn frame_cooldown_expires_once() {
        let mut cd = FrameCooldown::new();
        cd.start(2);
        assert!(cd.is_active());
        assert!(!cd.tick());
        assert!(cd.tick());
        assert!(!cd.is_active());
        assert!(!cd.tick());
    }

    #[test]
    fn frame_cooldown_seconds_round_up() {
        let mut cd = FrameCooldown::new();
        cd.start(300);
        assert_eq!(cd.remaining_secs(), 5);
        cd.tick();
        assert_eq!(cd.remaining_secs(), 5);
        cd.start(61);
        assert_eq!(cd.remaining_secs(), 2);
    }
}
