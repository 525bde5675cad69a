use itertools::Itertools;

use crate::action::Action;
use crate::grid::{Grid, Label};
use crate::location::Location;
use crate::shape::SquareStep;

/// Every in-bounds swap from every cell of `grid`.
///
/// Cells are visited in row-major order and each cell takes its neighbors in [`SquareStep::neighbors_of`] order.
/// Both orientations of each adjacent pair are produced; duplicates are left for the
/// [`VisitedSet`](crate::VisitedSet) to filter.
pub fn candidate_actions<L: Label>(grid: &Grid<L>) -> impl Iterator<Item = Action> + '_ {
    let dims = grid.dims();
    (0..grid.nrows())
        .cartesian_product(0..grid.ncols())
        .map(Location::from)
        .flat_map(move |source| {
            SquareStep::neighbors_of(source, dims)
                .into_iter()
                .map(move |(_, target)| Action { source, target })
        })
}
