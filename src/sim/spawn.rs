//! Monster spawning and wave progression
//!
//! Difficulty only ever ramps through `advance_wave`: faster spawns and a
//! shorter shot cooldown, both floored.

use glam::Vec2;

use super::cooldown::WallClockCooldown;
use super::events::GameEvent;
use super::state::{Monster, World, palette};
use crate::consts::*;

/// Arena edge a monster enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Pick an edge from a uniform roll in [0, 1)
    pub fn from_roll(roll: f32) -> Self {
        Self::ALL[((roll * 4.0) as usize).min(3)]
    }

    /// Spawn point just outside this edge; `along` is a roll in [0, 1)
    pub fn spawn_point(self, along: f32, width: f32, height: f32) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(along * width, -SPAWN_MARGIN),
            Edge::Right => Vec2::new(width + SPAWN_MARGIN, along * height),
            Edge::Bottom => Vec2::new(along * width, height + SPAWN_MARGIN),
            Edge::Left => Vec2::new(-SPAWN_MARGIN, along * height),
        }
    }
}

/// Roll a fresh monster at a random edge
pub fn roll_monster(world: &mut World) -> Monster {
    let edge = Edge::from_roll(world.roll());
    let pos = edge.spawn_point(world.roll(), world.width(), world.height());
    let size = 15.0 + world.roll() * 10.0;
    let speed = 1.0 + world.roll() * 2.0;
    let health = 2 + (world.roll() * 3.0) as i32;
    let color_index = ((world.roll() * palette::MONSTERS.len() as f32) as usize)
        .min(palette::MONSTERS.len() - 1);
    let attack_cooldown_ms = 1000.0 + world.roll() as f64 * 1000.0;

    Monster {
        pos,
        size,
        speed,
        health,
        max_health: health,
        color: palette::MONSTERS[color_index],
        last_attack: WallClockCooldown::new(),
        attack_cooldown_ms,
    }
}

/// Spawn one monster when the spawn timer allows
pub fn spawn_monsters(world: &mut World, now_ms: f64) -> bool {
    if !world.spawn_timer.exceeded(now_ms, world.monster_spawn_rate_ms) {
        return false;
    }
    world.spawn_timer.trigger(now_ms);

    let monster = roll_monster(world);
    world.push_monster(monster);
    true
}

/// Raise difficulty one step
pub fn advance_wave(world: &mut World) {
    world.wave += 1;
    world.monsters_per_wave += MONSTERS_PER_WAVE_STEP;
    world.monster_spawn_rate_ms = (world.monster_spawn_rate_ms - MONSTER_SPAWN_RATE_STEP_MS)
        .max(world.config.monster_spawn_rate_floor_ms);
    world.shot_cooldown_ms =
        (world.shot_cooldown_ms - SHOT_COOLDOWN_STEP_MS).max(world.config.shot_cooldown_floor_ms);

    log::info!(
        "Wave {} (spawn every {} ms, shot cooldown {} ms)",
        world.wave,
        world.monster_spawn_rate_ms,
        world.shot_cooldown_ms
    );
    world.emit(GameEvent::WaveStarted { wave: world.wave });
}

/// Start the next wave once the arena is clear and the check interval passed
pub fn check_wave_progression(world: &mut World, now_ms: f64) -> bool {
    if !world.monsters.is_empty()
        || !world
            .wave_timer
            .exceeded(now_ms, world.config.wave_check_interval_ms)
    {
        return false;
    }
    world.wave_timer.trigger(now_ms);
    advance_wave(world);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;

    fn world() -> World {
        World::new(GameConfig::default(), 2024)
    }

    #[test]
    fn edges_map_rolls_uniformly() {
        assert_eq!(Edge::from_roll(0.0), Edge::Top);
        assert_eq!(Edge::from_roll(0.3), Edge::Right);
        assert_eq!(Edge::from_roll(0.5), Edge::Bottom);
        assert_eq!(Edge::from_roll(0.99), Edge::Left);
    }

    #[test]
    fn spawn_points_sit_outside_arena() {
        assert_eq!(Edge::Top.spawn_point(0.5, 800.0, 600.0), Vec2::new(400.0, -20.0));
        assert_eq!(Edge::Right.spawn_point(0.5, 800.0, 600.0), Vec2::new(820.0, 300.0));
        assert_eq!(Edge::Bottom.spawn_point(0.25, 800.0, 600.0), Vec2::new(200.0, 620.0));
        assert_eq!(Edge::Left.spawn_point(0.0, 800.0, 600.0), Vec2::new(-20.0, 0.0));
    }

    #[test]
    fn rolled_monsters_stay_in_ranges() {
        let mut world = world();
        for _ in 0..500 {
            let m = roll_monster(&mut world);
            assert!((15.0..25.0).contains(&m.size));
            assert!((1.0..3.0).contains(&m.speed));
            assert!((2..5).contains(&m.health));
            assert_eq!(m.health, m.max_health);
            assert!((1000.0..2000.0).contains(&m.attack_cooldown_ms));
            assert!(palette::MONSTERS.contains(&m.color));
            let outside = m.pos.x < 0.0 || m.pos.x > 800.0 || m.pos.y < 0.0 || m.pos.y > 600.0;
            assert!(outside);
        }
    }

    #[test]
    fn spawn_is_time_gated() {
        let mut world = world();
        assert!(spawn_monsters(&mut world, 100.0));
        assert!(!spawn_monsters(&mut world, 2100.0));
        assert!(spawn_monsters(&mut world, 2100.5));
        assert_eq!(world.monsters.len(), 2);
    }

    #[test]
    fn wave_needs_empty_arena_and_interval() {
        let mut world = world();
        assert!(check_wave_progression(&mut world, 0.0));
        assert_eq!(world.wave, 2);

        assert!(!check_wave_progression(&mut world, 999.0));
        let monster = roll_monster(&mut world);
        world.monsters.push(monster);
        assert!(!check_wave_progression(&mut world, 5000.0));
        world.monsters.clear();
        assert!(check_wave_progression(&mut world, 5000.0));
        assert_eq!(world.wave, 3);
        assert_eq!(world.monsters_per_wave, 20);
    }

    #[test]
    fn difficulty_floors_after_many_waves() {
        let mut world = world();
        for _ in 0..100 {
            advance_wave(&mut world);
        }
        assert_eq!(world.monster_spawn_rate_ms, 500.0);
        assert_eq!(world.shot_cooldown_ms, 100.0);
        assert_eq!(world.wave, 101);
    }

    #[test]
    fn wave_steps_rates() {
        let mut world = world();
        advance_wave(&mut world);
        assert_eq!(world.monster_spawn_rate_ms, 1900.0);
        assert_eq!(world.shot_cooldown_ms, 190.0);
        assert!(matches!(
            world.pending_events(),
            [GameEvent::WaveStarted { wave: 2 }]
        ));
    }
}
