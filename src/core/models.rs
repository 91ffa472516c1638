use serde::{Deserialize, Serialize};

/// Contents of a single grid cell as seen by queries.
///
/// `OutOfGrid` is only ever produced by boundary queries and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Floor,
    Wall,
    Player,
    Enemy,
    OutOfGrid,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

/// Index of an enemy in the roster. Stable for the lifetime of one world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnemyId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    ToggleHelp,
    Save,
    Regenerate,
    Load,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameUpdate {
    Moved(GridPos),
    Blocked(Cell),
}
