use crate::core::{Cell, GridPos};

impl Cell {
    pub fn is_agent(&self) -> bool {
        matches!(self, Cell::Player | Cell::Enemy)
    }
}

impl GridPos {
    pub const fn new(col: i32, row: i32) -> GridPos {
        GridPos { col, row }
    }
}

impl std::ops::Add for GridPos {
    type Output = GridPos;

    fn add(self, rhs: GridPos) -> GridPos {
        GridPos {
            col: self.col + rhs.col,
            row: self.row + rhs.row,
        }
    }
}
