use rand::Rng;
use rand::seq::IndexedRandom;

use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::consts::MAX_SPAWN_ATTEMPTS;
use crate::core::error::GameError;
use crate::core::maze;
use crate::core::models::{Cell, EnemyId, GridPos};

/// Terrain plus the agents standing on it.
///
/// The terrain layer only ever holds `Floor` and `Wall`. Agents live in their
/// own records and are folded in by [`World::cell_at`], so a query sees a
/// single grid of cells while the terrain never has to be patched when
/// something moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    terrain: BoundedGrid<Cell>,
    player: GridPos,
    enemies: Vec<GridPos>,
}

impl World {
    /// Generate a maze and spawn the player followed by `enemies` enemies.
    pub fn generate<R: Rng + ?Sized>(
        bounds: BoundsOriginRoot,
        density: f32,
        enemies: usize,
        rng: &mut R,
    ) -> Result<World, GameError> {
        let terrain = maze::generate(bounds.columns, bounds.rows, density, rng);
        let mut world = World {
            terrain,
            player: GridPos::default(),
            enemies: Vec::with_capacity(enemies),
        };
        world.spawn_agent(Cell::Player, rng)?;
        for _ in 0..enemies {
            world.spawn_agent(Cell::Enemy, rng)?;
        }
        Ok(world)
    }

    /// Rebuild a world from composed rows of cells, as written by [`World::cells`].
    ///
    /// A grid without enemies yields an empty roster; matching the roster
    /// against a configured enemy count is up to the caller.
    pub fn from_cells(bounds: BoundsOriginRoot, rows: &[Vec<Cell>]) -> Result<World, GameError> {
        if rows.len() != bounds.rows as usize {
            return Err(GameError::MalformedGrid(format!(
                "expected {} rows, found {}",
                bounds.rows,
                rows.len()
            )));
        }
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != bounds.columns as usize)
        {
            return Err(GameError::MalformedGrid(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                bounds.columns
            )));
        }

        let raw = BoundedGrid::from_fn(bounds, |pos| rows[pos.row as usize][pos.col as usize]);
        if let Some((pos, _)) = raw.iter().find(|(_, c)| **c == Cell::OutOfGrid) {
            return Err(GameError::MalformedGrid(format!(
                "out-of-grid marker stored at {},{}",
                pos.col, pos.row
            )));
        }

        let players = collect_agents(bounds, Cell::Player, |pos| raw[pos])?;
        if players.len() > 1 {
            return Err(GameError::MalformedGrid(format!(
                "{} players on one grid",
                players.len()
            )));
        }
        let enemies = match collect_agents(bounds, Cell::Enemy, |pos| raw[pos]) {
            Ok(enemies) => enemies,
            Err(GameError::AgentNotFound(_)) => Vec::new(),
            Err(err) => return Err(err),
        };

        let terrain = BoundedGrid::from_fn(bounds, |pos| match raw[&pos] {
            Cell::Wall => Cell::Wall,
            _ => Cell::Floor,
        });

        Ok(World {
            terrain,
            player: players[0],
            enemies,
        })
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.terrain.size()
    }

    pub fn player(&self) -> GridPos {
        self.player
    }

    pub fn enemies(&self) -> &[GridPos] {
        &self.enemies
    }

    pub fn enemy(&self, id: EnemyId) -> Option<GridPos> {
        self.enemies.get(id.0).copied()
    }

    pub fn enemy_ids(&self) -> impl Iterator<Item = EnemyId> + use<> {
        (0..self.enemies.len()).map(EnemyId)
    }

    /// What occupies `pos`: an agent if one stands there, otherwise the terrain.
    pub fn cell_at(&self, pos: &GridPos) -> Cell {
        if !self.terrain.contains(pos) {
            return Cell::OutOfGrid;
        }
        if self.player == *pos {
            return Cell::Player;
        }
        if self.enemies.contains(pos) {
            return Cell::Enemy;
        }
        self.terrain[pos]
    }

    /// The cell an agent at `pos` would step on when moving by `delta`.
    pub fn will_step_on(&self, pos: GridPos, delta: GridPos) -> Cell {
        self.cell_at(&(pos + delta))
    }

    /// Move whatever agent stands on `pos` by `delta` and return where it ends up.
    ///
    /// No bounds or collision checking happens here; callers must have seen
    /// `Floor` from [`World::will_step_on`] for the same step.
    pub fn move_safely_by(&mut self, pos: GridPos, delta: GridPos) -> GridPos {
        let dest = pos + delta;
        if self.player == pos {
            self.player = dest;
        } else if let Some(enemy) = self.enemies.iter_mut().find(|e| **e == pos) {
            *enemy = dest;
        }
        dest
    }

    /// Place one more agent of `kind` on a random free floor cell.
    ///
    /// Spawning the player relocates it, since there is only ever one; its
    /// current cell does not count as occupied.
    pub fn spawn_agent<R: Rng + ?Sized>(&mut self, kind: Cell, rng: &mut R) -> Result<GridPos, GameError> {
        if !kind.is_agent() {
            return Err(GameError::InvalidAgentQuery(kind));
        }
        let mut occupied = self.enemies.clone();
        if kind == Cell::Enemy {
            occupied.push(self.player);
        }
        let pos = sample_floor(&self.terrain, &occupied, kind, rng)?;
        match kind {
            Cell::Player => self.player = pos,
            _ => self.enemies.push(pos),
        }
        Ok(pos)
    }

    /// Every position holding `kind`, in row-major order.
    pub fn find_agents(&self, kind: Cell) -> Result<Vec<GridPos>, GameError> {
        collect_agents(self.size(), kind, |pos| self.cell_at(pos))
    }

    /// The composed grid, one `Vec` per row.
    pub fn cells(&self) -> Vec<Vec<Cell>> {
        let size = self.size();
        (0..size.rows)
            .map(|row| {
                (0..size.columns)
                    .map(|col| self.cell_at(&GridPos { col, row }))
                    .collect()
            })
            .collect()
    }
}

fn collect_agents<F>(bounds: BoundsOriginRoot, kind: Cell, cell_of: F) -> Result<Vec<GridPos>, GameError>
where
    F: Fn(&GridPos) -> Cell,
{
    if !kind.is_agent() {
        return Err(GameError::InvalidAgentQuery(kind));
    }
    let found: Vec<GridPos> = bounds.positions().filter(|pos| cell_of(pos) == kind).collect();
    if found.is_empty() {
        return Err(GameError::AgentNotFound(kind));
    }
    Ok(found)
}

/// Probe random cells for free floor, then fall back to picking from every
/// free floor cell so a crowded maze still terminates.
fn sample_floor<R: Rng + ?Sized>(
    terrain: &BoundedGrid<Cell>,
    occupied: &[GridPos],
    kind: Cell,
    rng: &mut R,
) -> Result<GridPos, GameError> {
    let size = terrain.size();
    if size.area() == 0 {
        return Err(GameError::NoFloorAvailable(kind));
    }
    let is_free = |pos: &GridPos| terrain[pos] == Cell::Floor && !occupied.contains(pos);

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let pos = GridPos {
            col: rng.random_range(0..size.columns),
            row: rng.random_range(0..size.rows),
        };
        if is_free(&pos) {
            return Ok(pos);
        }
    }

    let free: Vec<GridPos> = size.positions().filter(|pos| is_free(pos)).collect();
    free.choose(rng).copied().ok_or(GameError::NoFloorAvailable(kind))
}
