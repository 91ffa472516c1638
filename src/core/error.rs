use std::path::PathBuf;

use thiserror::Error;

use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Cell;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("{0:?} is not an agent cell type")]
    InvalidAgentQuery(Cell),
    #[error("{0:?} not found on game grid")]
    AgentNotFound(Cell),
    #[error("no floor cell left to spawn {0:?} on")]
    NoFloorAvailable(Cell),
    #[error("no saved grid at {}", .0.display())]
    SaveFileMissing(PathBuf),
    #[error("saved grid is {found}, live grid is {expected}")]
    DimensionMismatch {
        expected: BoundsOriginRoot,
        found: BoundsOriginRoot,
    },
    #[error("saved grid holds {found} enemies, the game expects {expected}")]
    EnemyCountMismatch { expected: usize, found: usize },
    #[error("saved grid is malformed: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("saved grid is malformed: {0}")]
    MalformedGrid(String),
    #[error("grid storage failed: {0}")]
    Io(#[from] std::io::Error),
}
