use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;

use crate::action::Action;
use crate::error::ConfigurationError;
use crate::location::{Dimension, Location};

/// Constraint on the values held by the cells of a [`Grid`].
///
/// Labels are opaque; the search only compares them for equality and hashes them for deduplication.
pub trait Label: Copy + Eq + Hash + Debug {}

impl<L> Label for L where L: Copy + Eq + Hash + Debug {}

/// A rectangular arrangement of labels, at least one cell wide and tall.
///
/// Grids are values: every transformation, such as [`apply_swap`](crate::apply_swap), produces a new grid and leaves the original untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid<L: Label> {
    pub(crate) cells: Array2<L>,
}

/// Deterministic encoding of a [`Grid`]'s full content: its shape followed by its labels in row-major order.
///
/// Two grids have equal keys exactly when they are equal.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CanonicalKey<L: Label> {
    shape: (usize, usize),
    labels: Box<[L]>,
}

impl<L: Label> Grid<L> {
    /// Build a grid from rows of labels.
    ///
    /// Fails if there are no rows, the rows are empty, or the rows differ in length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = L>,
    {
        let rows = rows.into_iter()
            .map(|row| row.into_iter().collect_vec())
            .collect_vec();

        let width = rows.first().ok_or(ConfigurationError::NoRows)?.len();
        if width == 0 {
            return Err(ConfigurationError::NoColumns);
        }
        if let Some((row, found)) = rows.iter().map(Vec::len).find_position(|len| *len != width) {
            return Err(ConfigurationError::Ragged { row, expected: width, found });
        }

        Ok(Self { cells: Array2::from_shape_fn((rows.len(), width), |(row, col)| rows[row][col]) })
    }

    /// Grid dimensions, in `(width, height)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        // both sides are checked non-zero on construction
        (
            NonZero::new(self.cells.ncols()).unwrap_or(NonZero::<usize>::MIN),
            NonZero::new(self.cells.nrows()).unwrap_or(NonZero::<usize>::MIN),
        )
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.cells.ncols()
    }

    /// The label at `location`, or [`None`] if it is outside the grid.
    pub fn get(&self, location: Location) -> Option<&L> {
        self.cells.get(location.as_index())
    }

    /// Whether `location` lies inside the grid.
    pub fn contains(&self, location: Location) -> bool {
        location.within(self.dims())
    }

    /// Every location paired with its label, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, &L)> + '_ {
        self.cells.indexed_iter().map(|(index, label)| (Location::from(index), label))
    }

    /// Copy the labels out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<L>> {
        self.cells.rows()
            .into_iter()
            .map(|row| row.iter().copied().collect_vec())
            .collect_vec()
    }

    /// The grid mirrored along its main diagonal.
    pub fn transpose(&self) -> Self {
        Self { cells: Array2::from_shape_fn((self.ncols(), self.nrows()), |(row, col)| self.cells[(col, row)]) }
    }

    /// The [`CanonicalKey`] of this grid.
    pub fn canonical_key(&self) -> CanonicalKey<L> {
        CanonicalKey {
            shape: (self.nrows(), self.ncols()),
            labels: self.cells.iter().copied().collect(),
        }
    }

    /// Number of adjacent cell pairs with differing labels. See [`border_count`](crate::border_count).
    pub fn border_count(&self) -> usize {
        crate::cost::border_count(self)
    }

    /// A copy of this grid with the two cells of `action` exchanged.
    ///
    /// `action` must lie within the grid, which holds for every action produced by [`candidate_actions`](crate::candidate_actions).
    pub(crate) fn swapped(&self, action: &Action) -> Self {
        let mut cells = self.cells.clone();
        cells.swap(action.source.as_index(), action.target.as_index());
        Self { cells }
    }
}

impl<L: Label> TryFrom<Array2<L>> for Grid<L> {
    type Error = ConfigurationError;

    fn try_from(cells: Array2<L>) -> Result<Self, Self::Error> {
        match cells.dim() {
            (0, _) => Err(ConfigurationError::NoRows),
            (_, 0) => Err(ConfigurationError::NoColumns),
            _ => Ok(Self { cells }),
        }
    }
}

impl<L: Label + Display> Display for Grid<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}
