use std::time::Duration;

use crate::error::ConfigurationError;
use crate::grid::{Grid, Label};
use crate::report::Report;

/// Wall-clock budget for one search.
///
/// The budget is compared against elapsed time after each generation finishes expanding,
/// so a search may overrun it by up to one generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Deadline {
    budget: Duration,
}

impl Deadline {
    /// The budget used when none is given.
    pub const DEFAULT_BUDGET: Duration = Duration::from_secs(60);

    /// A deadline `budget` after the search starts.
    pub fn after(budget: Duration) -> Self {
        Self { budget }
    }

    /// The allotted budget.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Whether `elapsed` has reached the budget.
    pub fn is_reached(&self, elapsed: Duration) -> bool {
        elapsed >= self.budget
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::after(Self::DEFAULT_BUDGET)
    }
}

/// Validated parameters of a search: the largest acceptable border count and the time budget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchConfig {
    threshold: usize,
    deadline: Deadline,
}

impl SearchConfig {
    /// A configuration accepting any grid with at most `threshold` borders, with the default deadline.
    ///
    /// Fails with [`ConfigurationError::NegativeThreshold`] if `threshold` is below zero.
    pub fn new(threshold: i64) -> Result<Self, ConfigurationError> {
        if threshold < 0 {
            return Err(ConfigurationError::NegativeThreshold(threshold));
        }

        // thresholds past usize::MAX accept every grid anyway
        let threshold = usize::try_from(threshold).unwrap_or(usize::MAX);
        Ok(Self { threshold, deadline: Deadline::default() })
    }

    /// Replace the deadline with one `budget` after the search starts.
    pub fn with_deadline(mut self, budget: Duration) -> Self {
        self.deadline = Deadline::after(budget);
        self
    }

    /// The largest acceptable border count.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The time budget.
    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Run [`search`](crate::search) on `grid` with this configuration.
    pub fn search<L: Label>(&self, grid: &Grid<L>) -> Report<L> {
        crate::solver::search(grid, self.threshold, self.deadline)
    }
}
