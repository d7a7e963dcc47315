//! Level-up upgrades and power-up effects
//!
//! Level-ups and pickups share stat names but not caps: a speed pickup
//! stops at 10 while a speed upgrade goes to 12, and likewise for damage.

use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::state::{GamePhase, Player, PowerUpKind, World};

/// Speed cap for the speed pickup
pub const POWER_UP_SPEED_CAP: f32 = 10.0;
/// Damage cap for the damage pickup
pub const POWER_UP_DAMAGE_CAP: i32 = 5;
/// Rapid fire from a pickup (5 s at 60 fps)
pub const POWER_UP_RAPID_FIRE_FRAMES: u32 = 300;
/// Heal from a health pickup
pub const POWER_UP_HEAL: i32 = 25;

/// Speed cap for the speed upgrade
pub const UPGRADE_SPEED_CAP: f32 = 12.0;
/// Damage cap for the damage upgrade
pub const UPGRADE_DAMAGE_CAP: i32 = 8;
/// Rapid fire from an upgrade (10 s at 60 fps)
pub const UPGRADE_RAPID_FIRE_FRAMES: u32 = 600;
pub const UPGRADE_MAX_HEALTH: i32 = 25;
pub const UPGRADE_HEAL: i32 = 50;

/// Options offered per level-up
pub const OPTIONS_PER_LEVEL: usize = 3;

/// Upgrade types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    MaxHealth,
    Speed,
    Damage,
    RapidFire,
    Heal,
}

/// One entry of the level-up menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpgradeOption {
    pub kind: UpgradeKind,
    pub name: &'static str,
    pub description: &'static str,
}

/// Every upgrade the menu can offer
pub const CATALOG: [UpgradeOption; 5] = [
    UpgradeOption {
        kind: UpgradeKind::MaxHealth,
        name: "Max Health +25",
        description: "Increase maximum health",
    },
    UpgradeOption {
        kind: UpgradeKind::Speed,
        name: "Speed +1",
        description: "Move faster",
    },
    UpgradeOption {
        kind: UpgradeKind::Damage,
        name: "Damage +1",
        description: "Bullets deal more damage",
    },
    UpgradeOption {
        kind: UpgradeKind::RapidFire,
        name: "Rapid Fire",
        description: "Shoot 3x faster for 10 seconds",
    },
    UpgradeOption {
        kind: UpgradeKind::Heal,
        name: "Heal +50",
        description: "Restore health",
    },
];

/// The level-up selection screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradeMenu {
    pub options: Vec<UpgradeOption>,
    pub selected: usize,
}

impl UpgradeMenu {
    pub fn new(options: Vec<UpgradeOption>) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    pub fn cursor_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let last = self.options.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    pub fn selected_option(&self) -> Option<&UpgradeOption> {
        self.options.get(self.selected)
    }
}

/// Draw distinct options from the catalog without replacement
pub fn sample_options(world: &mut World, count: usize) -> Vec<UpgradeOption> {
    let mut available = CATALOG.to_vec();
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count.min(CATALOG.len()) {
        let index = ((world.roll() * available.len() as f32) as usize).min(available.len() - 1);
        picked.push(available.remove(index));
    }
    picked
}

/// Apply an upgrade to the player
pub fn apply_upgrade(player: &mut Player, kind: UpgradeKind) {
    match kind {
        UpgradeKind::MaxHealth => {
            player.max_health += UPGRADE_MAX_HEALTH;
            player.health += UPGRADE_MAX_HEALTH;
        }
        UpgradeKind::Speed => {
            player.speed = (player.speed + 1.0).min(UPGRADE_SPEED_CAP);
        }
        UpgradeKind::Damage => {
            player.damage = (player.damage + 1).min(UPGRADE_DAMAGE_CAP);
        }
        UpgradeKind::RapidFire => player.grant_rapid_fire(UPGRADE_RAPID_FIRE_FRAMES),
        UpgradeKind::Heal => {
            player.health = (player.health + UPGRADE_HEAL).min(player.max_health);
        }
    }
}

/// Apply a collected power-up to the player
pub fn apply_power_up(player: &mut Player, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Health => {
            player.health = (player.health + POWER_UP_HEAL).min(player.max_health);
        }
        PowerUpKind::Speed => {
            player.speed = (player.speed + 1.0).min(POWER_UP_SPEED_CAP);
        }
        PowerUpKind::Damage => {
            player.damage = (player.damage + 1).min(POWER_UP_DAMAGE_CAP);
        }
        PowerUpKind::RapidFire => player.grant_rapid_fire(POWER_UP_RAPID_FIRE_FRAMES),
    }
}

/// Enter the upgrade screen if enough XP has been banked.
///
/// Fires at most once per call; leftover XP carries into the next level.
pub fn check_level_up(world: &mut World) -> bool {
    if !world.phase.is_playing() || world.player.xp < world.player.xp_to_next {
        return false;
    }

    let player = &mut world.player;
    player.level += 1;
    player.xp -= player.xp_to_next;
    player.xp_to_next = (player.xp_to_next as f64 * 1.5).floor() as u32;
    let level = player.level;

    let options = sample_options(world, OPTIONS_PER_LEVEL);
    world.phase = GamePhase::ChoosingUpgrade(UpgradeMenu::new(options));
    log::info!("Level up! Now level {} (next at {} xp)", level, world.player.xp_to_next);
    world.emit(GameEvent::LevelGained { level });
    true
}

/// Apply the highlighted option and resume play
pub fn confirm_selection(world: &mut World) -> Option<UpgradeKind> {
    let kind = world.phase.upgrade_menu()?.selected_option()?.kind;
    apply_upgrade(&mut world.player, kind);
    world.phase = GamePhase::Playing;
    log::info!("Upgrade chosen: {:?}", kind);
    world.emit(GameEvent::OptionConfirmed { kind });
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;

    fn world() -> World {
        World::new(GameConfig::default(), 4242)
    }

    #[test]
    fn level_up_carries_xp_and_grows_threshold() {
        let mut world = world();
        world.player.xp = 130;
        assert!(check_level_up(&mut world));
        assert_eq!(world.player.level, 2);
        assert_eq!(world.player.xp, 30);
        assert_eq!(world.player.xp_to_next, 150);

        let menu = world.phase.upgrade_menu().unwrap();
        assert_eq!(menu.options.len(), 3);
        assert_eq!(menu.selected, 0);
        assert!(matches!(
            world.pending_events(),
            [GameEvent::LevelGained { level: 2 }]
        ));
    }

    #[test]
    fn threshold_floors_after_growth() {
        let mut world = world();
        world.player.xp_to_next = 225;
        world.player.xp = 225;
        check_level_up(&mut world);
        assert_eq!(world.player.xp_to_next, 337);
    }

    #[test]
    fn threshold_grows_every_level_from_minimum() {
        let config = GameConfig::from_json_str(r#"{ "xp_to_first_level": 2 }"#).unwrap();
        let mut world = World::new(config, 4242);
        for _ in 0..20 {
            let before = world.player.xp_to_next;
            world.player.xp = before;
            assert!(check_level_up(&mut world));
            assert!(world.player.xp_to_next > before);
            confirm_selection(&mut world);
        }
        assert_eq!(world.player.level, 21);
    }

    #[test]
    fn no_level_up_below_threshold_or_while_choosing() {
        let mut world = world();
        world.player.xp = 99;
        assert!(!check_level_up(&mut world));

        world.player.xp = 500;
        assert!(check_level_up(&mut world));
        assert!(!check_level_up(&mut world));
        assert_eq!(world.player.level, 2);
    }

    #[test]
    fn sampled_options_are_distinct() {
        let mut world = world();
        for _ in 0..200 {
            let options = sample_options(&mut world, OPTIONS_PER_LEVEL);
            assert_eq!(options.len(), 3);
            for (i, a) in options.iter().enumerate() {
                assert!(CATALOG.contains(a));
                for b in &options[i + 1..] {
                    assert_ne!(a.kind, b.kind);
                }
            }
        }
    }

    #[test]
    fn cursor_clamps_to_menu() {
        let mut menu = UpgradeMenu::new(CATALOG[..3].to_vec());
        menu.cursor_up();
        assert_eq!(menu.selected, 0);
        menu.cursor_down();
        menu.cursor_down();
        menu.cursor_down();
        assert_eq!(menu.selected, 2);
        menu.cursor_up();
        assert_eq!(menu.selected, 1);
    }

    #[test]
    fn confirm_applies_selected_and_resumes() {
        let mut world = world();
        world.phase = GamePhase::ChoosingUpgrade(UpgradeMenu {
            options: vec![CATALOG[4], CATALOG[2]],
            selected: 1,
        });
        assert_eq!(confirm_selection(&mut world), Some(UpgradeKind::Damage));
        assert_eq!(world.player.damage, 2);
        assert!(world.phase.is_playing());
        assert!(confirm_selection(&mut world).is_none());
    }

    #[test]
    fn upgrade_caps_differ_from_power_up_caps() {
        let mut player = Player::new(&GameConfig::default());
        player.speed = 10.0;
        apply_upgrade(&mut player, UpgradeKind::Speed);
        assert_eq!(player.speed, 11.0);
        apply_power_up(&mut player, PowerUpKind::Speed);
        assert_eq!(player.speed, 10.0);

        player.damage = 5;
        apply_power_up(&mut player, PowerUpKind::Damage);
        assert_eq!(player.damage, 5);
        apply_upgrade(&mut player, UpgradeKind::Damage);
        assert_eq!(player.damage, 6);
    }

    #[test]
    fn health_effects() {
        let mut player = Player::new(&GameConfig::default());
        player.health = 90;
        apply_power_up(&mut player, PowerUpKind::Health);
        assert_eq!(player.health, 100);

        apply_upgrade(&mut player, UpgradeKind::MaxHealth);
        assert_eq!((player.health, player.max_health), (125, 125));

        player.health = 30;
        apply_upgrade(&mut player, UpgradeKind::Heal);
        assert_eq!(player.health, 80);
    }

    #[test]
    fn rapid_fire_durations() {
        let mut player = Player::new(&GameConfig::default());
        apply_power_up(&mut player, PowerUpKind::RapidFire);
        assert_eq!(player.rapid_fire.remaining(), 300);
        apply_upgrade(&mut player, UpgradeKind::RapidFire);
        assert_eq!(player.rapid_fire.remaining(), 600);
        assert!(player.is_rapid_fire());
    }
}
