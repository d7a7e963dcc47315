//! One simulation step
//!
//! Called once per display frame. Speeds are in pixels per frame, so the
//! game runs faster on faster displays; wall-clock cooldowns do not.

use glam::Vec2;

use super::state::{GamePhase, World};
use super::{autopilot, collision, combat, spawn, upgrade};

/// Input for a single frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Held movement directions
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pointer position in arena coordinates
    pub pointer: Vec2,
    /// Fire request (click/space)
    pub fire: bool,
    /// Upgrade menu navigation
    pub cursor_up: bool,
    pub cursor_down: bool,
    pub confirm: bool,
    /// Idle/demo mode - AI plays the game
    pub autopilot: bool,
}

impl TickInput {
    /// Drop one-shot requests after they were processed
    pub fn clear_one_shots(&mut self) {
        self.fire = false;
        self.cursor_up = false;
        self.cursor_down = false;
        self.confirm = false;
    }
}

/// Advance the world by one frame at wall-clock time `now_ms`
pub fn tick(world: &mut World, input: &TickInput, now_ms: f64) {
    let driven;
    let input = if input.autopilot {
        driven = autopilot::drive(world, input);
        &driven
    } else {
        input
    };

    if world.phase.is_playing() {
        step_playing(world, input, now_ms);
        return;
    }

    // World stays frozen while the menu is up; only the cursor moves
    if let GamePhase::ChoosingUpgrade(menu) = &mut world.phase {
        if input.cursor_up {
            menu.cursor_up();
        }
        if input.cursor_down {
            menu.cursor_down();
        }
    }
    if input.confirm && world.phase.upgrade_menu().is_some() {
        upgrade::confirm_selection(world);
    }
}

fn step_playing(world: &mut World, input: &TickInput, now_ms: f64) {
    world.frame += 1;

    combat::update_player(world, input);
    if input.fire {
        combat::shoot(world, now_ms);
    }
    combat::update_bullets(world);
    combat::update_monsters(world, now_ms);
    combat::update_particles(world);
    combat::update_power_ups(world);
    combat::update_buffs(world);
    spawn::spawn_monsters(world, now_ms);

    collision::resolve_collisions(world);
    if world.phase.is_game_over() {
        return;
    }

    upgrade::check_level_up(world);
    spawn::check_wave_progression(world, now_ms);
    world.screen_shake.timer.tick();
}
