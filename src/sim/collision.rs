//! Collision resolution
//!
//! Plain circle-vs-circle checks: centers closer than the sum of sizes.
//! Both scans walk their collections back to front, so removals never skip
//! an entry and the last-spawned monster wins a contested bullet.

use super::events::GameEvent;
use super::state::{GamePhase, World, palette};
use super::upgrade::apply_power_up;
use crate::circles_overlap;

/// Bullets damage the first monster they touch and are consumed.
///
/// Returns the number of hits. A bullet hits at most one monster.
pub fn resolve_bullet_hits(world: &mut World) -> usize {
    let damage = world.player.damage;
    let mut hits = 0;

    for i in (0..world.bullets.len()).rev() {
        let bullet = &world.bullets[i];
        let target = world
            .monsters
            .iter()
            .rposition(|m| circles_overlap(bullet.pos, bullet.size, m.pos, m.size));

        if let Some(j) = target {
            world.monsters[j].health -= damage;
            let bullet = world.bullets.remove(i);
            world.spawn_particles(bullet.pos, 5, palette::BULLET_IMPACT);
            hits += 1;
        }
    }
    hits
}

/// Player walks over power-ups to collect them
pub fn resolve_pickups(world: &mut World) -> usize {
    let mut collected = 0;

    for i in (0..world.power_ups.len()).rev() {
        let player = &world.player;
        let power_up = &world.power_ups[i];
        if !circles_overlap(player.pos, player.size, power_up.pos, power_up.size) {
            continue;
        }

        let power_up = world.power_ups.remove(i);
        world.spawn_particles(power_up.pos, 10, power_up.color);
        apply_power_up(&mut world.player, power_up.kind);
        log::debug!("Collected {:?}", power_up.kind);
        world.emit(GameEvent::PowerUpCollected {
            kind: power_up.kind,
        });
        collected += 1;
    }
    collected
}

/// Switch to GameOver once the player is out of health
pub fn check_game_over(world: &mut World) -> bool {
    if !world.player.is_dead() {
        return false;
    }
    world.phase = GamePhase::GameOver;
    log::info!(
        "Game over: score {}, level {}, {} kills",
        world.score,
        world.player.level,
        world.monsters_killed
    );
    world.emit(GameEvent::GameOver {
        score: world.score,
        level: world.player.level,
        kills: world.monsters_killed,
    });
    true
}

/// Run every collision pass for one frame
pub fn resolve_collisions(world: &mut World) {
    resolve_bullet_hits(world);
    resolve_pickups(world);
    check_game_over(world);
}
