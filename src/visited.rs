use std::collections::HashSet;

use crate::grid::{CanonicalKey, Grid, Label};

/// The set of grids already enqueued during one search, keyed by [`CanonicalKey`].
pub struct VisitedSet<L: Label> {
    keys: HashSet<CanonicalKey<L>>,
}

impl<L: Label> VisitedSet<L> {
    /// A set containing only `root`.
    pub fn seeded(root: &Grid<L>) -> Self {
        let mut keys = HashSet::new();
        keys.insert(root.canonical_key());
        Self { keys }
    }

    /// Record `grid`, returning `false` if it was already present.
    pub fn mark_if_new(&mut self, grid: &Grid<L>) -> bool {
        self.keys.insert(grid.canonical_key())
    }

    /// Whether `grid` has been recorded.
    pub fn contains(&self, grid: &Grid<L>) -> bool {
        self.keys.contains(&grid.canonical_key())
    }

    /// Number of distinct grids recorded, the root included.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false` for a seeded set.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
