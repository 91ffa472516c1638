use crate::core::models::{Cell, Direction, GameUpdate, GridPos};
use crate::core::world::World;

/// Try to walk the player one cell; only floor can be entered.
pub fn step(world: &mut World, direction: Direction) -> GameUpdate {
    let player = world.player();
    let delta = vec_from_dir(direction);

    match world.will_step_on(player, delta) {
        Cell::Floor => GameUpdate::Moved(world.move_safely_by(player, delta)),
        other => GameUpdate::Blocked(other),
    }
}

pub fn vec_from_dir(dir: Direction) -> GridPos {
    match dir {
        Direction::Up => GridPos { col: 0, row: -1 },
        Direction::Down => GridPos { col: 0, row: 1 },
        Direction::Left => GridPos { col: -1, row: 0 },
        Direction::Right => GridPos { col: 1, row: 0 },
    }
}
