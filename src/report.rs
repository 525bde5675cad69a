use std::fmt::{Display, Formatter};
use std::time::Duration;

use crate::action::Action;
use crate::error::ConfigurationError;
use crate::grid::{Grid, Label};

/// How a search ended.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Termination {
    /// A grid within the threshold was found.
    Success,
    /// Every grid reachable from the root was examined without success.
    Exhausted,
    /// The deadline was reached first.
    TimedOut,
}

/// Counters gathered during a search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchMetrics {
    /// Nodes dequeued, the terminal one included.
    pub generations: u64,
    /// Swaps attempted, including those that led to an already visited grid.
    pub expansions: u64,
    /// Distinct grids enqueued, the root included.
    pub visited: usize,
    /// Largest number of nodes waiting in the frontier at once.
    pub frontier_high_water: usize,
    /// Wall-clock time spent. Measured, so not reproducible between runs.
    pub elapsed: Duration,
}

/// The outcome of one search.
///
/// On success it holds the grid found, the swaps leading to it, and that grid's border count.
/// On exhaustion or timeout there is no grid, the path is empty, and [`final_cost`](Self::final_cost) is [`None`].
#[derive(Clone, Debug)]
pub struct Report<L: Label> {
    pub(crate) termination: Termination,
    pub(crate) result: Option<Grid<L>>,
    pub(crate) path: Vec<Action>,
    pub(crate) initial_cost: usize,
    pub(crate) final_cost: Option<usize>,
    pub(crate) metrics: SearchMetrics,
}

impl<L: Label> Report<L> {
    /// How the search ended.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Whether a grid within the threshold was found.
    pub fn is_success(&self) -> bool {
        self.termination == Termination::Success
    }

    /// The grid found, if any.
    pub fn result(&self) -> Option<&Grid<L>> {
        self.result.as_ref()
    }

    /// The swaps leading from the root to [`result`](Self::result). Empty on failure.
    pub fn path(&self) -> &[Action] {
        &self.path
    }

    /// Border count of the root grid.
    pub fn initial_cost(&self) -> usize {
        self.initial_cost
    }

    /// Border count of the grid found, or [`None`] if no grid was found.
    pub fn final_cost(&self) -> Option<usize> {
        self.final_cost
    }

    /// Counters gathered during the search.
    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Replay [`path`](Self::path) from `root`, yielding each swap with the grid it produces.
    ///
    /// `root` should be the grid the search started from; the last grid yielded is then [`result`](Self::result).
    /// A swap that does not fit the grid it is applied to, as happens when replaying from some other grid,
    /// is yielded as an error and ends the replay.
    pub fn replay<'a>(&'a self, root: &Grid<L>) -> Replay<'a, L> {
        Replay { current: Some(root.clone()), remaining: self.path.iter() }
    }
}

/// Iterator returned by [`Report::replay`].
pub struct Replay<'a, L: Label> {
    // None once a swap has failed
    current: Option<Grid<L>>,
    remaining: std::slice::Iter<'a, Action>,
}

impl<L: Label> Iterator for Replay<'_, L> {
    type Item = Result<(Action, Grid<L>), ConfigurationError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_ref()?;
        let action = *self.remaining.next()?;

        match crate::apply_swap(current, &action) {
            Ok(next) => {
                self.current = Some(next.clone());
                Some(Ok((action, next)))
            }
            Err(err) => {
                self.current = None;
                Some(Err(err))
            }
        }
    }
}

impl<L: Label> Display for Report<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "initial borders: {}", self.initial_cost)?;
        writeln!(f, "generations: {}", self.metrics.generations)?;
        writeln!(f, "expansions: {}", self.metrics.expansions)?;
        writeln!(f, "processing time: {:.2} seconds", self.metrics.elapsed.as_secs_f64())?;
        match self.final_cost {
            Some(cost) => writeln!(f, "final borders: {} after {} swaps", cost, self.path.len()),
            None => writeln!(f, "no solution found ({:?})", self.termination),
        }
    }
}
