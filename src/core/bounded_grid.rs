use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::GridPos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    /// Builds a grid by asking `make` for every position in row-major order.
    pub fn from_fn<F>(bounds: BoundsOriginRoot, mut make: F) -> Self
    where
        F: FnMut(GridPos) -> T,
    {
        let cells = bounds.positions().map(&mut make).collect();
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &GridPos) -> bool {
        self.bounds.contains(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &T)> {
        self.bounds.positions().zip(self.cells.iter())
    }

    fn offset(&self, pos: &GridPos) -> usize {
        (pos.row * self.bounds.columns + pos.col) as usize
    }
}

impl<T> std::ops::Index<&GridPos> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &GridPos) -> &Self::Output {
        &self.cells[self.offset(index)]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let grid = BoundedGrid::from_fn(BoundsOriginRoot::new(3, 2), |pos| pos.row * 3 + pos.col);
        assert_eq!(grid[&GridPos::new(1, 1)], 4);
        assert_eq!(grid.iter().last(), Some((GridPos::new(2, 1), &5)));
        assert!(!grid.contains(&GridPos::new(3, 1)));
    }
}
