mod bounded_grid;
mod bounds;
mod consts;
mod enemy;
mod error;
mod maze;
mod model_helpers;
mod models;
mod update;
mod world;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use enemy::{EnemyOutcome, aggressive_step, choose_step, evolve_enemies, evolve_enemy, random_step, sample_anger};
pub use error::GameError;
pub use maze::generate;
pub use models::{Cell, Direction, EnemyId, GameUpdate, GridPos, UserAction};
pub use update::{step, vec_from_dir};
pub use world::World;
