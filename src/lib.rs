//! Pixel Gunner - A top-down arena shooter
//!
//! Core modules:
//! - `sim`: Simulation (player, bullets, monsters, waves, level-ups)
//! - `session`: Per-frame driver wiring the sim to its collaborators
//! - `platform`: Clock abstraction (native/browser)
//! - `audio`: Tone synthesis backends for game events
//! - `settings`: Data-driven game balance and caps

pub mod audio;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Renderer, Session};
pub use settings::{ConfigError, EntityCaps, GameConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Frames per second the frame-counted timers assume
    pub const TARGET_FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_HEALTH: i32 = 100;
    pub const PLAYER_DAMAGE: i32 = 1;
    pub const PLAYER_XP_TO_NEXT: u32 = 100;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 8.0;
    pub const BULLET_SIZE: f32 = 4.0;
    pub const BULLET_LIFE_FRAMES: u32 = 120;

    /// Monster melee
    pub const MELEE_RANGE: f32 = 30.0;
    pub const MELEE_DAMAGE: i32 = 10;
    /// How far outside the arena edge monsters appear
    pub const SPAWN_MARGIN: f32 = 20.0;

    /// Progression timing (milliseconds)
    pub const MONSTER_SPAWN_RATE_MS: f64 = 2000.0;
    pub const MONSTER_SPAWN_RATE_FLOOR_MS: f64 = 500.0;
    pub const MONSTER_SPAWN_RATE_STEP_MS: f64 = 100.0;
    pub const SHOT_COOLDOWN_MS: f64 = 200.0;
    pub const SHOT_COOLDOWN_FLOOR_MS: f64 = 100.0;
    pub const SHOT_COOLDOWN_STEP_MS: f64 = 10.0;
    pub const WAVE_CHECK_INTERVAL_MS: f64 = 1000.0;
    pub const MONSTERS_PER_WAVE: u32 = 10;
    pub const MONSTERS_PER_WAVE_STEP: u32 = 5;

    /// Score per kill
    pub const KILL_SCORE: u64 = 10;

    /// Screen shake lasts this many frames regardless of intensity
    pub const SCREEN_SHAKE_FRAMES: u32 = 10;

    /// Power-up defaults (creation is triggered externally)
    pub const POWER_UP_SIZE: f32 = 15.0;
    pub const POWER_UP_LIFE_FRAMES: u32 = 600;
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle (radians) of the vector from `from` to `to`
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Two circles overlap when their centers are closer than the sum of radii
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}
