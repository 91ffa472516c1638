use crate::core::models::GridPos;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub columns: i32,
    pub rows: i32,
}

impl BoundsOriginRoot {
    pub fn new(columns: i32, rows: i32) -> BoundsOriginRoot {
        BoundsOriginRoot { columns, rows }
    }

    pub fn contains(&self, pos: &GridPos) -> bool {
        pos.col >= 0 && pos.col < self.columns && pos.row >= 0 && pos.row < self.rows
    }

    pub fn area(&self) -> i32 {
        self.columns * self.rows
    }

    /// Row-major walk over every position inside the bounds.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + use<> {
        let (columns, rows) = (self.columns, self.rows);
        (0..rows).flat_map(move |row| (0..columns).map(move |col| GridPos { col, row }))
    }
}

impl std::fmt::Display for BoundsOriginRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
