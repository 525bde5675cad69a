use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};

use crate::error::ConfigurationError;
use crate::grid::{Grid, Label};
use crate::location::{Dimension, Location};

/// A builder for [`Grid`]s of fixed dimensions, starting from a single fill label.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// The first invalid call is recorded and every later call is ignored, so a chain of calls can be checked once at [`build`](Self::build).
#[derive(Clone)]
pub struct GridBuilder<L: Label> {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<L>,
    invalid_reasons: Vec<ConfigurationError>,
}

impl<L: Label> GridBuilder<L> {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order, every cell holding `fill`.
    pub fn with_dims(dims: (Dimension, Dimension), fill: L) -> Self {
        Self {
            dims,
            cells: Array2::from_elem((dims.1.get(), dims.0.get()), fill),
            invalid_reasons: Default::default(),
        }
    }

    /// Put `label` at `location`.
    ///
    /// Invalidates the builder with [`LocationOutOfBounds`](ConfigurationError::LocationOutOfBounds) if `location` is outside the grid.
    pub fn set(&mut self, location: Location, label: L) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.within(self.dims) {
            self.invalid_reasons.push(ConfigurationError::LocationOutOfBounds(location));
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(label);
        self
    }

    /// Overwrite row `row` with `labels`.
    ///
    /// Invalidates the builder with [`LocationOutOfBounds`](ConfigurationError::LocationOutOfBounds) if there is no such row,
    /// or with [`Ragged`](ConfigurationError::Ragged) if `labels` does not fill the row exactly.
    pub fn fill_row(&mut self, row: usize, labels: impl IntoIterator<Item = L>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if row >= self.dims.1.get() {
            self.invalid_reasons.push(ConfigurationError::LocationOutOfBounds(Location(0, row)));
            return self;
        }

        let labels: Vec<L> = labels.into_iter().collect();
        if labels.len() != self.dims.0.get() {
            self.invalid_reasons.push(ConfigurationError::Ragged {
                row,
                expected: self.dims.0.get(),
                found: labels.len(),
            });
            return self;
        }

        for (col, label) in labels.into_iter().enumerate() {
            self.cells.index_mut((row, col)).assign_elem(label);
        }
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<ConfigurationError>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<ConfigurationError>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`ConfigurationError`] will indicate why.
    pub fn build(&self) -> Result<Grid<L>, &Vec<ConfigurationError>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Grid { cells: self.cells.clone() })
    }
}
