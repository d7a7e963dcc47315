//! Per-frame movement and combat
//!
//! Player steering and shooting, bullet flight, monster seek and melee,
//! plus aging of particles, power-ups and buffs.

use glam::Vec2;

use super::events::GameEvent;
use super::state::{Bullet, World, palette};
use super::tick::TickInput;
use crate::consts::*;

/// Move the player from held keys and re-aim at the pointer
pub fn update_player(world: &mut World, input: &TickInput) {
    let (width, height) = (world.width(), world.height());
    let player = &mut world.player;
    let (size, speed) = (player.size, player.speed);

    if input.up {
        player.pos.y = (player.pos.y - speed).max(size);
    }
    if input.down {
        player.pos.y = (player.pos.y + speed).min(height - size);
    }
    if input.left {
        player.pos.x = (player.pos.x - speed).max(size);
    }
    if input.right {
        player.pos.x = (player.pos.x + speed).min(width - size);
    }

    player.angle = crate::angle_between(player.pos, input.pointer);
}

/// Shot cooldown in effect right now (a third while rapid fire runs)
pub fn current_shot_cooldown(world: &World) -> f64 {
    if world.player.is_rapid_fire() {
        world.shot_cooldown_ms / 3.0
    } else {
        world.shot_cooldown_ms
    }
}

/// Fire one bullet along the facing angle. Returns false while cooling down.
pub fn shoot(world: &mut World, now_ms: f64) -> bool {
    let cooldown = current_shot_cooldown(world);
    if !world.shot_timer.reached(now_ms, cooldown) {
        return false;
    }
    world.shot_timer.trigger(now_ms);

    let (pos, angle) = (world.player.pos, world.player.angle);
    world.push_bullet(Bullet::new(pos, angle));
    world.spawn_particles(pos, 5, palette::MUZZLE_FLASH);
    world.emit(GameEvent::ShotFired { pos, angle });
    true
}

/// Integrate bullets and drop the ones that left the arena or expired
pub fn update_bullets(world: &mut World) {
    let (width, height) = (world.width(), world.height());
    for i in (0..world.bullets.len()).rev() {
        let bullet = &mut world.bullets[i];
        bullet.pos += bullet.vel;
        bullet.life = bullet.life.saturating_sub(1);
        if bullet.is_spent(width, height) {
            world.bullets.remove(i);
        }
    }
}

/// Chase the player, bite when close, and clear out the dead
pub fn update_monsters(world: &mut World, now_ms: f64) {
    for i in (0..world.monsters.len()).rev() {
        let target = world.player.pos;
        let monster = &mut world.monsters[i];

        // Range is measured before this frame's step
        let to_player = target - monster.pos;
        let distance = to_player.length();
        if distance > 0.0 {
            monster.pos += to_player / distance * monster.speed;
        }

        let mut bite = false;
        if distance < MELEE_RANGE && monster.last_attack.exceeded(now_ms, monster.attack_cooldown_ms) {
            monster.last_attack.trigger(now_ms);
            bite = true;
        }

        if bite {
            world.player.health -= MELEE_DAMAGE;
            let health = world.player.health;
            log::debug!("Player hit for {} ({} left)", MELEE_DAMAGE, health);
            world.spawn_particles(target, 8, palette::PLAYER_HIT);
            world.add_screen_shake(5.0);
            world.emit(GameEvent::PlayerDamaged {
                amount: MELEE_DAMAGE,
                health,
            });
        }

        if world.monsters[i].is_dead() {
            let monster = world.monsters.remove(i);
            let xp = monster.xp_reward();
            world.score += KILL_SCORE;
            world.monsters_killed += 1;
            world.player.xp += xp;
            log::debug!("Monster killed at {:?} (+{} xp)", monster.pos, xp);
            world.spawn_particles(monster.pos, 15, monster.color);
            world.add_screen_shake(3.0);
            world.emit(GameEvent::MonsterKilled {
                pos: monster.pos,
                xp,
            });
        }
    }
}

/// Drift particles and fade them out
pub fn update_particles(world: &mut World) {
    world.particles.retain_mut(|p| {
        p.pos += p.vel;
        p.life = p.life.saturating_sub(1);
        p.life > 0
    });
}

/// Expire uncollected power-ups
pub fn update_power_ups(world: &mut World) {
    world.power_ups.retain_mut(|p| {
        p.life = p.life.saturating_sub(1);
        p.life > 0
    });
}

/// Count down timed buffs
pub fn update_buffs(world: &mut World) {
    if world.player.rapid_fire.tick() {
        log::debug!("Rapid fire expired");
    }
}

/// Nearest monster to a point, if any
pub fn nearest_monster(world: &World, from: Vec2) -> Option<usize> {
    world
        .monsters
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.pos
                .distance_squared(from)
                .partial_cmp(&b.pos.distance_squared(from))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}
