use std::num::NonZero;

use ndarray::Ix;

type Coord = usize;
/// A grid side length. Grids always have at least one row and one column.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(x, y)` on a grid, i.e. `(column, row)`. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The `(row, column)` index of this location in the backing array.
    pub fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies within a grid of `dims`, given as `(width, height)`.
    pub fn within(&self, dims: (Dimension, Dimension)) -> bool {
        self.0 < dims.0.get() && self.1 < dims.1.get()
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
