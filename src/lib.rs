#![warn(missing_docs)]

//! # `border-swap`
//!
//! Finds the fewest swaps of adjacent cells that bring a labeled grid down to a border count at or below a threshold.
//! The border count of a grid is the number of pairs of rook-adjacent cells holding different labels,
//! so lowering it gathers equal labels into contiguous regions.
//!
//! Build a [`Grid`] with [`Grid::from_rows`] or a [`GridBuilder`](builder::GridBuilder), then call [`search`]
//! (or [`SearchConfig::search`] when the threshold comes from untrusted input).
//! The returned [`Report`] holds the grid found, the swaps leading to it, and counters describing the search.
//! [`apply_swap`] and [`Report::replay`] re-create every intermediate grid without searching again.
//!
//! # Internals
//! The search is plain breadth-first over the implicit graph whose vertices are grids and whose edges are single swaps.
//! Each node dequeued from a FIFO [`Frontier`] is tested against the threshold and otherwise expanded with every
//! in-bounds swap from every cell; children already recorded in the [`VisitedSet`] are dropped.
//! Every swap costs the same, so the first node within the threshold lies at minimal depth.
//!
//! The state space grows factorially with the number of cells, so searches are bounded by a wall-clock [`Deadline`].
//! Running out of time or of reachable grids is an ordinary outcome reported through [`Termination`], not an error.

pub use action::{apply_swap, Action};
pub use config::{Deadline, SearchConfig};
pub use cost::{border_count, mismatched_edges};
pub use error::ConfigurationError;
pub use frontier::{Frontier, SearchNode};
pub use grid::{CanonicalKey, Grid, Label};
pub use location::{Dimension, Location};
pub use neighbors::candidate_actions;
pub use report::{Replay, Report, SearchMetrics, Termination};
pub use shape::SquareStep;
pub use solver::search;
pub use visited::VisitedSet;

pub(crate) mod action;
pub mod builder;
pub(crate) mod config;
pub(crate) mod cost;
pub(crate) mod error;
pub(crate) mod frontier;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod neighbors;
pub(crate) mod report;
pub(crate) mod shape;
pub(crate) mod solver;
pub(crate) mod visited;
