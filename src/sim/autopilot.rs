//! Idle/demo mode - the game plays itself
//!
//! Turns the world into a `TickInput`: aim and fire at the nearest monster,
//! back away from anything that gets close, take the first upgrade offered.

use super::combat::nearest_monster;
use super::state::{GamePhase, World};
use super::tick::TickInput;

/// Start backing off when a monster is this close
pub const RETREAT_RANGE: f32 = 120.0;

/// Build this frame's input from the current world
pub fn drive(world: &World, base: &TickInput) -> TickInput {
    let mut input = TickInput {
        pointer: base.pointer,
        ..Default::default()
    };

    match &world.phase {
        GamePhase::ChoosingUpgrade(_) => input.confirm = true,
        GamePhase::GameOver => {}
        GamePhase::Playing => {
            let player = world.player.pos;
            if let Some(index) = nearest_monster(world, player) {
                let target = world.monsters[index].pos;
                input.pointer = target;
                input.fire = true;

                let away = player - target;
                if away.length() < RETREAT_RANGE {
                    input.left = away.x < 0.0;
                    input.right = away.x > 0.0;
                    input.up = away.y < 0.0;
                    input.down = away.y > 0.0;
                }
            }
        }
    }
    input
}
