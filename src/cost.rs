use crate::grid::{Grid, Label};
use crate::location::Location;
use crate::shape::SquareStep;

/// Every pair of rook-adjacent cells whose labels differ, each pair reported once.
///
/// Pairs are yielded in row-major order of their first cell, the right neighbor before the one below.
pub fn mismatched_edges<L: Label>(grid: &Grid<L>) -> impl Iterator<Item = (Location, Location)> + '_ {
    grid.cells().flat_map(move |(location, label)| {
        SquareStep::FORWARD_VARIANTS.iter().filter_map(move |step| {
            let neighbor = step.attempt_from(location);
            grid.get(neighbor)
                .filter(|other| *other != label)
                .map(|_| (location, neighbor))
        })
    })
}

/// The border count of `grid`: how many internal edges join cells with differing labels.
pub fn border_count<L: Label>(grid: &Grid<L>) -> usize {
    mismatched_edges(grid).count()
}
