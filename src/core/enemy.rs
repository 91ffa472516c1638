use rand::Rng;
use tracing::debug;

use crate::core::consts::{ANGER_BASE, ANGER_SPREAD};
use crate::core::models::{Cell, EnemyId, GridPos};
use crate::core::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyOutcome {
    Moved(GridPos),
    CaughtPlayer,
    Blocked(Cell),
}

/// Per-tick aggression, roughly in `[0.1, 0.3)`.
pub fn sample_anger<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>() * ANGER_SPREAD + ANGER_BASE
}

/// One unit step along the chosen axis toward the player, or zero when the
/// enemy already shares that coordinate.
pub fn aggressive_step(enemy: GridPos, player: GridPos, along_columns: bool) -> GridPos {
    if along_columns {
        GridPos::new((player.col - enemy.col).signum(), 0)
    } else {
        GridPos::new(0, (player.row - enemy.row).signum())
    }
}

pub fn random_step<R: Rng + ?Sized>(rng: &mut R) -> GridPos {
    let unit = if rng.random_bool(0.5) { -1 } else { 1 };
    if rng.random_bool(0.5) {
        GridPos::new(unit, 0)
    } else {
        GridPos::new(0, unit)
    }
}

/// Roll against `anger` and pick this tick's step for an enemy.
pub fn choose_step<R: Rng + ?Sized>(enemy: GridPos, player: GridPos, anger: f32, rng: &mut R) -> GridPos {
    if rng.random::<f32>() < anger {
        aggressive_step(enemy, player, rng.random_bool(0.5))
    } else {
        random_step(rng)
    }
}

pub fn evolve_enemy<R: Rng + ?Sized>(world: &mut World, id: EnemyId, anger: f32, rng: &mut R) -> EnemyOutcome {
    let Some(enemy) = world.enemy(id) else {
        return EnemyOutcome::Blocked(Cell::OutOfGrid);
    };
    let step = choose_step(enemy, world.player(), anger, rng);

    match world.will_step_on(enemy, step) {
        Cell::Floor => EnemyOutcome::Moved(world.move_safely_by(enemy, step)),
        Cell::Player => {
            debug!(enemy = id.0, col = enemy.col, row = enemy.row, "enemy tagged the player");
            EnemyOutcome::CaughtPlayer
        }
        other => EnemyOutcome::Blocked(other),
    }
}

/// Advance every enemy once, in roster order, each with freshly rolled anger.
pub fn evolve_enemies<R: Rng + ?Sized>(world: &mut World, rng: &mut R) -> Vec<EnemyOutcome> {
    world
        .enemy_ids()
        .map(|id| {
            let anger = sample_anger(rng);
            evolve_enemy(world, id, anger, rng)
        })
        .collect()
}
