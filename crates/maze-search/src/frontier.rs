//! Frontier disciplines behind the shared search skeleton.

use std::collections::VecDeque;

use maze_core::Coord;

use crate::queue::BucketQueue;

/// A discovered-but-unexpanded node: a coordinate plus its own
/// independently-owned path prefix from the start.
#[derive(Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) pos: Coord,
    pub(crate) path: Vec<Coord>,
}

/// Which strategy drives the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Breadth-first: FIFO frontier, shortest path on unweighted grids.
    Bfs,
    /// Depth-first: LIFO frontier, no optimality guarantee.
    Dfs,
    /// Greedy best-first: ranked by Manhattan distance to the goal.
    Greedy,
    /// A*: ranked by Manhattan distance plus steps taken from the start.
    AStar,
}

impl Strategy {
    /// Short name for log lines.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "astar",
        }
    }
}

/// The frontier container for one search invocation.
pub(crate) enum Frontier {
    Fifo(VecDeque<FrontierEntry>),
    Lifo(Vec<FrontierEntry>),
    Ranked(BucketQueue<FrontierEntry>),
}

impl Frontier {
    pub(crate) fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Bfs => Frontier::Fifo(VecDeque::new()),
            Strategy::Dfs => Frontier::Lifo(Vec::new()),
            Strategy::Greedy | Strategy::AStar => Frontier::Ranked(BucketQueue::new()),
        }
    }

    /// Insert an entry. The unranked disciplines ignore `rank`.
    pub(crate) fn push(&mut self, entry: FrontierEntry, rank: i32) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(entry),
            Frontier::Lifo(stack) => stack.push(entry),
            Frontier::Ranked(queue) => queue.enqueue(entry, rank),
        }
    }

    /// Remove the next entry per the discipline.
    pub(crate) fn pop(&mut self) -> Option<FrontierEntry> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::Ranked(queue) => queue.dequeue(),
        }
    }
}
