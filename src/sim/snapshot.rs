//! Read-only view of the world for rendering, audio and HUD
//!
//! Borrowed straight from `World`, so taking one can never mutate anything.

use serde::Serialize;

use super::state::{Bullet, GamePhase, Monster, Particle, Player, PowerUp, World};

/// Screen shake as the renderer needs it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShakeView {
    pub active: bool,
    pub intensity: f32,
}

/// End-of-run numbers for the game over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub score: u64,
    pub level: u32,
    pub monsters_killed: u32,
}

/// Everything a presentation layer may look at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub width: f32,
    pub height: f32,
    pub player: &'a Player,
    pub bullets: &'a [Bullet],
    pub monsters: &'a [Monster],
    pub particles: &'a [Particle],
    pub power_ups: &'a [PowerUp],
    pub wave: u32,
    pub score: u64,
    pub monsters_killed: u32,
    pub monsters_per_wave: u32,
    pub phase: &'a GamePhase,
    pub screen_shake: ShakeView,
    /// Health bar fill (0-1)
    pub health_fraction: f32,
    /// XP bar fill in percent
    pub xp_percent: f32,
    /// Seconds of rapid fire left, if active
    pub rapid_fire_secs: Option<u32>,
    pub summary: Option<RunSummary>,
}

impl World {
    pub fn snapshot(&self) -> Snapshot<'_> {
        let summary = self.phase.is_game_over().then_some(RunSummary {
            score: self.score,
            level: self.player.level,
            monsters_killed: self.monsters_killed,
        });

        Snapshot {
            width: self.width(),
            height: self.height(),
            player: &self.player,
            bullets: &self.bullets,
            monsters: &self.monsters,
            particles: &self.particles,
            power_ups: &self.power_ups,
            wave: self.wave,
            score: self.score,
            monsters_killed: self.monsters_killed,
            monsters_per_wave: self.monsters_per_wave,
            phase: &self.phase,
            screen_shake: ShakeView {
                active: self.screen_shake.is_active(),
                intensity: self.screen_shake.intensity,
            },
            health_fraction: self.player.health_fraction(),
            xp_percent: self.player.xp_percent(),
            rapid_fire_secs: self
                .player
                .is_rapid_fire()
                .then(|| self.player.rapid_fire.remaining_secs()),
            summary,
        }
    }
}

impl Snapshot<'_> {
    /// Serialize for a JS/HUD bridge
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
