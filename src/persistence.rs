use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{BoundsOriginRoot, Cell, GameError, World};

/// On-disk snapshot of the composed grid, agents included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedGrid {
    pub columns: i32,
    pub rows: i32,
    pub cells: Vec<Vec<Cell>>,
}

impl SavedGrid {
    pub fn from_world(world: &World) -> SavedGrid {
        let size = world.size();
        SavedGrid {
            columns: size.columns,
            rows: size.rows,
            cells: world.cells(),
        }
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        BoundsOriginRoot::new(self.columns, self.rows)
    }

    /// Rebuild the world this snapshot describes, re-deriving agent positions.
    pub fn into_world(self) -> Result<World, GameError> {
        World::from_cells(self.bounds(), &self.cells)
    }
}

pub trait GridStore {
    fn save(&self, grid: &SavedGrid) -> Result<(), GameError>;

    /// Fails with [`GameError::SaveFileMissing`] when nothing was saved yet.
    fn load(&self) -> Result<SavedGrid, GameError>;
}

pub struct FileGridStore {
    path: PathBuf,
}

impl FileGridStore {
    pub fn new(path: impl Into<PathBuf>) -> FileGridStore {
        FileGridStore { path: path.into() }
    }
}

impl GridStore for FileGridStore {
    fn save(&self, grid: &SavedGrid) -> Result<(), GameError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(grid)?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), columns = grid.columns, rows = grid.rows, "grid saved");
        Ok(())
    }

    fn load(&self) -> Result<SavedGrid, GameError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(GameError::SaveFileMissing(self.path.clone()));
            }
            Err(err) => return Err(err.into()),
        };
        let grid = serde_json::from_str(&json)?;
        Ok(grid)
    }
}
