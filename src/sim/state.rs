//! World state and entity types
//!
//! Everything the simulation mutates lives in `World`. Collaborators only
//! ever see it through `World::snapshot`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cooldown::{FrameCooldown, WallClockCooldown};
use super::events::GameEvent;
use super::upgrade::UpgradeMenu;
use crate::consts::*;
use crate::settings::GameConfig;

/// 0xRRGGBB color tag (rendering picks the actual style)
pub type Color = u32;

/// Color constants used by the sim
pub mod palette {
    use super::Color;

    pub const MUZZLE_FLASH: Color = 0xffff00;
    pub const PLAYER_HIT: Color = 0xff0000;
    pub const BULLET_IMPACT: Color = 0xffffff;

    /// Monster colors, one picked uniformly per spawn
    pub const MONSTERS: [Color; 6] = [0xff4444, 0x44ff44, 0x4444ff, 0xffff44, 0xff44ff, 0x44ffff];
}

/// Current phase of gameplay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// World frozen while the player picks an upgrade
    ChoosingUpgrade(UpgradeMenu),
    /// Player died; nothing updates any more
    GameOver,
}

impl GamePhase {
    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, GamePhase::GameOver)
    }

    pub fn upgrade_menu(&self) -> Option<&UpgradeMenu> {
        match self {
            GamePhase::ChoosingUpgrade(menu) => Some(menu),
            _ => None,
        }
    }
}

/// The player avatar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub pos: Vec2,
    /// Half-extent used for clamping and pickups
    pub size: f32,
    /// Pixels per frame
    pub speed: f32,
    /// May drop below zero on the killing blow
    pub health: i32,
    pub max_health: i32,
    /// Facing (radians), re-derived from the pointer every frame
    pub angle: f32,
    /// Damage dealt per bullet hit
    pub damage: i32,
    pub rapid_fire: FrameCooldown,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0),
            size: config.player_size,
            speed: config.player_speed,
            health: config.player_health,
            max_health: config.player_health,
            angle: 0.0,
            damage: config.player_damage,
            rapid_fire: FrameCooldown::new(),
            level: 1,
            xp: 0,
            xp_to_next: config.xp_to_first_level,
        }
    }

    pub fn is_rapid_fire(&self) -> bool {
        self.rapid_fire.is_active()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Health bar fill (0-1), negative health shows as empty
    pub fn health_fraction(&self) -> f32 {
        self.health.max(0) as f32 / self.max_health.max(1) as f32
    }

    /// XP bar fill in percent
    pub fn xp_percent(&self) -> f32 {
        self.xp as f32 / self.xp_to_next.max(1) as f32 * 100.0
    }

    /// Grant rapid fire for `frames`, replacing any remaining time
    pub fn grant_rapid_fire(&mut self, frames: u32) {
        self.rapid_fire.start(frames);
    }
}

/// A player bullet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Frames left before it fizzles
    pub life: u32,
}

impl Bullet {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            vel: crate::direction(angle) * BULLET_SPEED,
            size: BULLET_SIZE,
            life: BULLET_LIFE_FRAMES,
        }
    }

    /// Left the arena or ran out of life
    pub fn is_spent(&self, width: f32, height: f32) -> bool {
        self.pos.x < 0.0
            || self.pos.x > width
            || self.pos.y < 0.0
            || self.pos.y > height
            || self.life == 0
    }
}

/// An enemy that chases the player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Monster {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    pub color: Color,
    pub last_attack: WallClockCooldown,
    pub attack_cooldown_ms: f64,
}

impl Monster {
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// XP granted on death (bigger monsters are worth more)
    pub fn xp_reward(&self) -> u32 {
        10 + (self.size / 5.0).floor() as u32
    }

    pub fn health_fraction(&self) -> f32 {
        self.health.max(0) as f32 / self.max_health.max(1) as f32
    }
}

/// A cosmetic particle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color,
    pub life: u32,
    /// Rolled independently of `life`, so alpha can start above 1
    pub max_life: u32,
}

impl Particle {
    /// Render opacity, clamped to 0-1
    pub fn alpha(&self) -> f32 {
        (self.life as f32 / self.max_life.max(1) as f32).min(1.0)
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Health,
    Speed,
    Damage,
    RapidFire,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Health,
        PowerUpKind::Speed,
        PowerUpKind::Damage,
        PowerUpKind::RapidFire,
    ];

    pub fn color(self) -> Color {
        match self {
            PowerUpKind::Health => 0x00ff00,
            PowerUpKind::Speed => 0x00aaff,
            PowerUpKind::Damage => 0xff4444,
            PowerUpKind::RapidFire => 0xffff00,
        }
    }
}

/// A collectible lying in the arena
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: f32,
    pub kind: PowerUpKind,
    pub color: Color,
    /// Frames until it disappears
    pub life: u32,
}

/// Screen shake request, consumed by rendering only
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScreenShake {
    pub timer: FrameCooldown,
    pub intensity: f32,
}

impl ScreenShake {
    /// Restart the shake; duration is fixed, only intensity varies
    pub fn trigger(&mut self, intensity: f32) {
        self.timer.start(SCREEN_SHAKE_FRAMES);
        self.intensity = intensity;
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_active()
    }
}

/// Push onto a collection, evicting the oldest entries past `cap`
pub(crate) fn push_capped<T>(items: &mut Vec<T>, item: T, cap: Option<usize>) {
    if let Some(cap) = cap {
        let excess = (items.len() + 1).saturating_sub(cap);
        if excess > 0 {
            items.drain(..excess.min(items.len()));
        }
    }
    items.push(item);
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Frames simulated in the Playing phase
    pub frame: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub monsters: Vec<Monster>,
    pub particles: Vec<Particle>,
    pub power_ups: Vec<PowerUp>,
    pub score: u64,
    /// Current wave (1-based)
    pub wave: u32,
    pub monsters_killed: u32,
    /// Informational only, never enforced as a spawn cap
    pub monsters_per_wave: u32,
    pub monster_spawn_rate_ms: f64,
    pub shot_cooldown_ms: f64,
    pub spawn_timer: WallClockCooldown,
    pub shot_timer: WallClockCooldown,
    pub wave_timer: WallClockCooldown,
    pub screen_shake: ScreenShake,
    events: Vec<GameEvent>,
}

impl World {
    /// Create a fresh run with the given seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            phase: GamePhase::Playing,
            player: Player::new(&config),
            bullets: Vec::new(),
            monsters: Vec::new(),
            particles: Vec::new(),
            power_ups: Vec::new(),
            score: 0,
            wave: 1,
            monsters_killed: 0,
            monsters_per_wave: MONSTERS_PER_WAVE,
            monster_spawn_rate_ms: config.monster_spawn_rate_ms,
            shot_cooldown_ms: config.shot_cooldown_ms,
            spawn_timer: WallClockCooldown::new(),
            shot_timer: WallClockCooldown::new(),
            wave_timer: WallClockCooldown::new(),
            screen_shake: ScreenShake::default(),
            events: Vec::new(),
            config,
        }
    }

    pub fn width(&self) -> f32 {
        self.config.arena_width
    }

    pub fn height(&self) -> f32 {
        self.config.arena_height
    }

    /// Uniform roll in [0, 1)
    pub fn roll(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Queue an event for collaborators
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events queued since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn add_screen_shake(&mut self, intensity: f32) {
        self.screen_shake.trigger(intensity);
    }

    /// Burst of `count` particles at `pos`
    pub fn spawn_particles(&mut self, pos: Vec2, count: usize, color: Color) {
        for _ in 0..count {
            let vel = Vec2::new((self.roll() - 0.5) * 4.0, (self.roll() - 0.5) * 4.0);
            let size = self.roll() * 3.0 + 1.0;
            let life = 30 + (self.roll() * 30.0) as u32;
            let max_life = 30 + (self.roll() * 30.0) as u32;
            let particle = Particle {
                pos,
                vel,
                size,
                color,
                life,
                max_life,
            };
            push_capped(&mut self.particles, particle, self.config.caps.particles);
        }
    }

    /// External trigger point for power-up creation.
    ///
    /// The sim consumes and expires power-ups but never drops them itself.
    pub fn spawn_power_up(&mut self, kind: PowerUpKind, pos: Vec2) {
        let power_up = PowerUp {
            pos,
            size: POWER_UP_SIZE,
            kind,
            color: kind.color(),
            life: POWER_UP_LIFE_FRAMES,
        };
        push_capped(&mut self.power_ups, power_up, self.config.caps.power_ups);
    }

    pub fn push_bullet(&mut self, bullet: Bullet) {
        push_capped(&mut self.bullets, bullet, self.config.caps.bullets);
    }

    pub fn push_monster(&mut self, monster: Monster) {
        push_capped(&mut self.monsters, monster, self.config.caps.monsters);
    }
}
