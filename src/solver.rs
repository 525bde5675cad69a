use std::time::{Duration, Instant};

use log::{debug, info, trace};

use crate::config::Deadline;
use crate::cost::border_count;
use crate::frontier::{Frontier, SearchNode};
use crate::grid::{Grid, Label};
use crate::neighbors::candidate_actions;
use crate::report::{Report, SearchMetrics, Termination};
use crate::visited::VisitedSet;

/// Why the search stops once a generation has finished expanding, if it does.
///
/// An empty frontier wins over a reached deadline: the search did see every reachable grid.
pub(crate) fn stop_after_generation<L: Label>(frontier: &Frontier<L>, deadline: Deadline, elapsed: Duration) -> Option<Termination> {
    if frontier.is_empty() {
        Some(Termination::Exhausted)
    } else if deadline.is_reached(elapsed) {
        Some(Termination::TimedOut)
    } else {
        None
    }
}

/// Search breadth-first for the fewest swaps that bring `grid` to at most `threshold` borders.
///
/// # Algorithm
/// The frontier starts with the root and an empty path, and the visited set with the root's key.
/// Each generation dequeues the oldest node. If its border count is within `threshold`, the search succeeds with that node.
/// Otherwise every candidate swap is attempted in [`candidate_actions`] order; each attempt counts as an expansion,
/// and a resulting grid not seen before is enqueued with the swap appended to its path.
///
/// After a generation finishes expanding, the search gives up once `deadline` is reached.
/// It also fails once the frontier runs dry, meaning no reachable grid is within `threshold`.
///
/// Since every swap costs the same and nodes leave the frontier in the order they entered,
/// a successful path is as short as any path to a grid within `threshold`.
/// Among equally short paths, the first by enumeration order wins, so results are reproducible.
pub fn search<L: Label>(grid: &Grid<L>, threshold: usize, deadline: Deadline) -> Report<L> {
    let start = Instant::now();
    let initial_cost = border_count(grid);

    debug!(
        "Searching {}x{} grid with {} borders for at most {} within {:?}.",
        grid.nrows(),
        grid.ncols(),
        initial_cost,
        threshold,
        deadline.budget()
    );

    let mut visited = VisitedSet::seeded(grid);
    let mut frontier = Frontier::with_root(SearchNode::root(grid.clone()));
    let mut generations: u64 = 0;
    let mut expansions: u64 = 0;

    let termination = loop {
        let Some(node) = frontier.pop() else {
            break Termination::Exhausted;
        };
        generations += 1;

        let cost = border_count(&node.grid);
        trace!("Generation {} at depth {} has {} borders.", generations, node.path.len(), cost);

        if cost <= threshold {
            let metrics = SearchMetrics {
                generations,
                expansions,
                visited: visited.len(),
                frontier_high_water: frontier.high_water(),
                elapsed: start.elapsed(),
            };
            info!(
                "Reached {} borders in {} swaps after {} generations and {} expansions.",
                cost,
                node.path.len(),
                generations,
                expansions
            );

            return Report {
                termination: Termination::Success,
                result: Some(node.grid),
                path: node.path,
                initial_cost,
                final_cost: Some(cost),
                metrics,
            };
        }

        for action in candidate_actions(&node.grid) {
            expansions += 1;
            let child = node.grid.swapped(&action);
            if visited.mark_if_new(&child) {
                frontier.push(node.child(child, action));
            }
        }

        if let Some(termination) = stop_after_generation(&frontier, deadline, start.elapsed()) {
            break termination;
        }
    };

    let metrics = SearchMetrics {
        generations,
        expansions,
        visited: visited.len(),
        frontier_high_water: frontier.high_water(),
        elapsed: start.elapsed(),
    };
    info!(
        "No grid with at most {} borders found ({:?}) after {} generations and {} expansions.",
        threshold, termination, generations, expansions
    );

    Report {
        termination,
        result: None,
        path: Vec::new(),
        initial_cost,
        final_cost: None,
        metrics,
    }
}
