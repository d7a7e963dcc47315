//! Game configuration and balance
//!
//! Loaded from JSON; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Optional soft caps on entity collections.
///
/// `None` leaves a collection unbounded. When a cap is set and a push would
/// exceed it, the oldest entries are evicted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityCaps {
    pub bullets: Option<usize>,
    pub monsters: Option<usize>,
    pub particles: Option<usize>,
    pub power_ups: Option<usize>,
}

impl EntityCaps {
    fn validate(&self) -> Result<(), ConfigError> {
        let caps = [
            ("bullets", self.bullets),
            ("monsters", self.monsters),
            ("particles", self.particles),
            ("power_ups", self.power_ups),
        ];
        for (name, cap) in caps {
            if cap == Some(0) {
                return Err(ConfigError::Invalid(format!("{name} cap must be at least 1")));
            }
        }
        Ok(())
    }
}

/// Full game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player start stats ===
    pub player_size: f32,
    pub player_speed: f32,
    pub player_health: i32,
    pub player_damage: i32,
    pub xp_to_first_level: u32,

    // === Timing (milliseconds) ===
    pub monster_spawn_rate_ms: f64,
    pub monster_spawn_rate_floor_ms: f64,
    pub shot_cooldown_ms: f64,
    pub shot_cooldown_floor_ms: f64,
    pub wave_check_interval_ms: f64,

    /// Fixed RNG seed; `None` lets the host pick one
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,

    /// Soft caps (all off by default)
    pub caps: EntityCaps,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_health: PLAYER_HEALTH,
            player_damage: PLAYER_DAMAGE,
            xp_to_first_level: PLAYER_XP_TO_NEXT,

            monster_spawn_rate_ms: MONSTER_SPAWN_RATE_MS,
            monster_spawn_rate_floor_ms: MONSTER_SPAWN_RATE_FLOOR_MS,
            shot_cooldown_ms: SHOT_COOLDOWN_MS,
            shot_cooldown_floor_ms: SHOT_COOLDOWN_FLOOR_MS,
            wave_check_interval_ms: WAVE_CHECK_INTERVAL_MS,

            seed: None,

            master_volume: 0.8,
            muted: false,

            caps: EntityCaps::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check values the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(positive(self.arena_width) && positive(self.arena_height)) {
            return Err(ConfigError::Invalid("arena dimensions must be positive".into()));
        }
        if !positive(self.player_size)
            || self.player_size * 2.0 > self.arena_width
            || self.player_size * 2.0 > self.arena_height
        {
            return Err(ConfigError::Invalid(
                "player size must be positive and fit inside the arena".into(),
            ));
        }
        if !positive(self.player_speed) {
            return Err(ConfigError::Invalid("player speed must be positive".into()));
        }
        if self.player_health <= 0 {
            return Err(ConfigError::Invalid("player health must be positive".into()));
        }
        if self.player_damage < 0 {
            return Err(ConfigError::Invalid("player damage must not be negative".into()));
        }
        // floor(n * 1.5) only grows the threshold from 2 up
        if self.xp_to_first_level < 2 {
            return Err(ConfigError::Invalid("xp to first level must be at least 2".into()));
        }
        let timings = [
            ("monster_spawn_rate_ms", self.monster_spawn_rate_ms),
            ("monster_spawn_rate_floor_ms", self.monster_spawn_rate_floor_ms),
            ("shot_cooldown_ms", self.shot_cooldown_ms),
            ("shot_cooldown_floor_ms", self.shot_cooldown_floor_ms),
            ("wave_check_interval_ms", self.wave_check_interval_ms),
        ];
        for (name, ms) in timings {
            if !(ms.is_finite() && ms >= 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be finite and not negative")));
            }
        }
        if self.monster_spawn_rate_floor_ms > self.monster_spawn_rate_ms
            || self.shot_cooldown_floor_ms > self.shot_cooldown_ms
        {
            return Err(ConfigError::Invalid("cooldown floors must not exceed start values".into()));
        }
        if !(0.0..=1.0).contains(&self.master_volume) {
            return Err(ConfigError::Invalid("master volume must be within 0.0 - 1.0".into()));
        }
        self.caps.validate()
    }
}

fn positive(x: f32) -> bool {
    x.is_finite() && x > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_balance() {
        let config = GameConfig::default();
        assert_eq!(config.arena_width, 800.0);
        assert_eq!(config.arena_height, 600.0);
        assert_eq!(config.monster_spawn_rate_ms, 2000.0);
        assert_eq!(config.shot_cooldown_ms, 200.0);
        assert_eq!(config.caps, EntityCaps::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GameConfig::from_json_str(r#"{ "seed": 7, "caps": { "particles": 64 } }"#)
            .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.caps.particles, Some(64));
        assert_eq!(config.caps.bullets, None);
        assert_eq!(config.player_speed, PLAYER_SPEED);
    }

    #[test]
    fn rejects_bad_json() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_player_larger_than_arena() {
        let err = GameConfig::from_json_str(r#"{ "arena_width": 30.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_non_positive_speed() {
        for json in [
            r#"{ "player_speed": -5.0 }"#,
            r#"{ "player_speed": 0.0 }"#,
        ] {
            let err = GameConfig::from_json_str(json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
        }
        let config = GameConfig {
            player_speed: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_damage_and_bad_timings() {
        let err = GameConfig::from_json_str(r#"{ "player_damage": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = GameConfig {
            wave_check_interval_ms: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = GameConfig {
            shot_cooldown_ms: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = GameConfig {
            arena_width: f32::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn xp_threshold_must_be_able_to_grow() {
        let err = GameConfig::from_json_str(r#"{ "xp_to_first_level": 1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let config = GameConfig::from_json_str(r#"{ "xp_to_first_level": 2 }"#).unwrap();
        assert_eq!(config.xp_to_first_level, 2);
    }

    #[test]
    fn rejects_zero_cap() {
        let err = GameConfig::from_json_str(r#"{ "caps": { "bullets": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_falls_back() {
        let config = GameConfig::load_or_default("/definitely/not/here.json");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn json_roundtrip_preserves_config() {
        let mut config = GameConfig::default();
        config.seed = Some(42);
        config.caps.monsters = Some(100);
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json_str(&json).unwrap(), config);
    }
}
