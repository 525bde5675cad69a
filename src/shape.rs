use itertools::Itertools;
use strum::VariantArray;

use crate::location::{Dimension, Location};

/// The four rook steps between orthogonally adjacent cells of a rectangular grid.
///
/// The declaration order (up, down, left, right) is the order in which candidate swaps are enumerated for a cell,
/// and so decides which of several equally short solutions a search reports.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl SquareStep {
    /// The steps which, taken from a location, lead to a location indexed higher in row-major order.
    ///
    /// Stepping forward from every cell visits every internal edge of the grid exactly once.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down];

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// Steps off the top or left edge wrap around to huge coordinates, which no grid contains.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    /// All neighbors of `location` inside a grid of `dims`, in [`VARIANTS`](VariantArray::VARIANTS) order.
    pub fn neighbors_of(location: Location, dims: (Dimension, Dimension)) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .filter(|(_, neighbor)| neighbor.within(dims))
            .collect_vec()
    }

    /// Determine the direction from `a` to `b`, or [`None`] if the two are not rook-adjacent.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}
