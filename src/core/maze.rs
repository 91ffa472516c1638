use rand::Rng;

use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Cell;

/// Fills a `columns x rows` grid where every cell is independently a wall with
/// probability `density`. No connectivity is guaranteed.
pub fn generate<R: Rng + ?Sized>(
    columns: i32,
    rows: i32,
    density: f32,
    rng: &mut R,
) -> BoundedGrid<Cell> {
    let density = density.clamp(0.0, 1.0);
    let bounds = BoundsOriginRoot::new(columns.max(0), rows.max(0));
    BoundedGrid::from_fn(bounds, |_| {
        if rng.random::<f32>() < density {
            Cell::Wall
        } else {
            Cell::Floor
        }
    })
}
