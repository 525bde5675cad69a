use thiserror::Error;

use crate::location::Location;

/// Reasons a grid, swap, or search configuration is rejected before any searching happens.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigurationError {
    /// The grid has no rows.
    #[error("grid has no rows")]
    NoRows,
    /// The grid has rows, but they have no cells.
    #[error("grid has no columns")]
    NoColumns,
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The border-count threshold is below zero.
    #[error("threshold must be non-negative, got {0}")]
    NegativeThreshold(i64),
    /// A location lies outside the grid.
    #[error("location {0:?} is outside the grid")]
    LocationOutOfBounds(Location),
    /// The two cells of a swap are not rook-adjacent.
    #[error("cells {0:?} and {1:?} are not adjacent")]
    NotAdjacent(Location, Location),
}
