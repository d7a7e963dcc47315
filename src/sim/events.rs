//! Gameplay events for presentation
//!
//! The sim queues these and forgets them. Each carries a suggested tone so
//! an audio backend can voice it without knowing gameplay rules.

use glam::Vec2;
use serde::Serialize;

use super::state::PowerUpKind;
use super::upgrade::UpgradeKind;

/// Oscillator waveform category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A single synthesized beep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_secs: f32,
    pub waveform: Waveform,
}

impl Tone {
    pub const fn new(frequency_hz: f32, duration_secs: f32, waveform: Waveform) -> Self {
        Self {
            frequency_hz,
            duration_secs,
            waveform,
        }
    }
}

/// Something happened this frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    ShotFired { pos: Vec2, angle: f32 },
    PlayerDamaged { amount: i32, health: i32 },
    MonsterKilled { pos: Vec2, xp: u32 },
    PowerUpCollected { kind: PowerUpKind },
    LevelGained { level: u32 },
    WaveStarted { wave: u32 },
    OptionConfirmed { kind: UpgradeKind },
    GameOver { score: u64, level: u32, kills: u32 },
}

impl GameEvent {
    /// Suggested sound, if any
    pub fn tone(&self) -> Option<Tone> {
        let tone = match self {
            GameEvent::ShotFired { .. } => Tone::new(800.0, 0.1, Waveform::Square),
            GameEvent::PlayerDamaged { .. } => Tone::new(150.0, 0.2, Waveform::Sawtooth),
            GameEvent::MonsterKilled { .. } => Tone::new(200.0, 0.3, Waveform::Sawtooth),
            GameEvent::PowerUpCollected { .. } => Tone::new(400.0, 0.2, Waveform::Sine),
            GameEvent::LevelGained { .. } => Tone::new(800.0, 0.5, Waveform::Triangle),
            GameEvent::WaveStarted { .. } => Tone::new(600.0, 0.5, Waveform::Triangle),
            GameEvent::OptionConfirmed { .. } => Tone::new(400.0, 0.3, Waveform::Sine),
            GameEvent::GameOver { .. } => return None,
        };
        Some(tone)
    }
}
