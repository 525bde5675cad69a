use std::collections::VecDeque;

use crate::action::Action;
use crate::grid::{Grid, Label};

/// A grid together with the swaps that led to it from the root.
#[derive(Clone, Debug)]
pub struct SearchNode<L: Label> {
    /// The grid reached.
    pub grid: Grid<L>,
    /// Swaps applied to the root, in order.
    pub path: Vec<Action>,
}

impl<L: Label> SearchNode<L> {
    /// The root node: `grid` with an empty path.
    pub fn root(grid: Grid<L>) -> Self {
        Self { grid, path: Vec::new() }
    }

    /// The node reached by applying `action` to this one, where `grid` is the result of that swap.
    pub fn child(&self, grid: Grid<L>, action: Action) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(action);
        Self { grid, path }
    }
}

/// First-in, first-out queue of [`SearchNode`]s awaiting expansion.
///
/// Nodes leave in the order they were pushed, which keeps the search breadth-first.
pub struct Frontier<L: Label> {
    queue: VecDeque<SearchNode<L>>,
    high_water: usize,
}

impl<L: Label> Frontier<L> {
    /// A frontier holding only `node`.
    pub fn with_root(node: SearchNode<L>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(node);
        Self { queue, high_water: 1 }
    }

    /// Enqueue `node` at the back.
    pub fn push(&mut self, node: SearchNode<L>) {
        self.queue.push_back(node);
        self.high_water = self.high_water.max(self.queue.len());
    }

    /// Dequeue the oldest node.
    pub fn pop(&mut self) -> Option<SearchNode<L>> {
        self.queue.pop_front()
    }

    /// Current number of queued nodes.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no nodes are queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Largest number of nodes queued at once.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
