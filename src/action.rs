use std::fmt::{Display, Formatter};

use crate::error::ConfigurationError;
use crate::grid::{Grid, Label};
use crate::location::Location;
use crate::shape::SquareStep;

/// A swap of the labels in two rook-adjacent cells.
///
/// Actions are plain data; the same action can be applied to any grid containing both cells.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Action {
    /// The cell the swap is enumerated from.
    pub source: Location,
    /// The neighbor of `source` it exchanges labels with.
    pub target: Location,
}

impl Action {
    /// The swap between `source` and the neighbor reached by stepping in `direction`.
    ///
    /// Bounds are not checked here; see [`apply_swap`].
    pub fn step(source: Location, direction: SquareStep) -> Self {
        Self { source, target: direction.attempt_from(source) }
    }

    /// The swap between two cells, if they are rook-adjacent.
    pub fn between(source: Location, target: Location) -> Result<Self, ConfigurationError> {
        match SquareStep::direction_to(source, target) {
            Some(_) => Ok(Self { source, target }),
            None => Err(ConfigurationError::NotAdjacent(source, target)),
        }
    }

    /// The swap between two cells given as `(row, column)` indices.
    pub fn from_indices(source: (usize, usize), target: (usize, usize)) -> Result<Self, ConfigurationError> {
        Self::between(Location::from(source), Location::from(target))
    }

    /// The two cells as `(row, column)` indices.
    pub fn as_indices(&self) -> ((usize, usize), (usize, usize)) {
        (self.source.as_index(), self.target.as_index())
    }

    /// The direction from `source` to `target`.
    pub fn direction(&self) -> Option<SquareStep> {
        SquareStep::direction_to(self.source, self.target)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ((r1, c1), (r2, c2)) = self.as_indices();
        write!(f, "(({r1}, {c1}), ({r2}, {c2}))")
    }
}

/// A new grid equal to `grid` except that the labels at the two cells of `action` are exchanged.
///
/// `grid` is left unmodified, so replaying a path step by step never disturbs earlier states.
/// Fails if either cell is outside `grid` or the cells are not adjacent.
pub fn apply_swap<L: Label>(grid: &Grid<L>, action: &Action) -> Result<Grid<L>, ConfigurationError> {
    for location in [action.source, action.target] {
        if !grid.contains(location) {
            return Err(ConfigurationError::LocationOutOfBounds(location));
        }
    }
    if action.direction().is_none() {
        return Err(ConfigurationError::NotAdjacent(action.source, action.target));
    }

    Ok(grid.swapped(action))
}
