//! **maze-search** — Grid search strategies over a binary maze.
//!
//! Four traversal strategies share one exploration skeleton, differing only
//! in frontier discipline:
//!
//! - **BFS** ([`bfs_path`]) — FIFO frontier; shortest path guaranteed on
//!   unweighted grids.
//! - **DFS** ([`dfs_path`]) — LIFO frontier; no optimality guarantee.
//! - **Greedy best-first** ([`greedy_path`]) — ranked by Manhattan distance
//!   to the goal.
//! - **A\*** ([`astar_path`]) — ranked by Manhattan distance plus steps
//!   taken so far.
//!
//! Every strategy returns the full path, both endpoints included, or `None`
//! when the goal is unreachable. The ranked strategies run on
//! [`BucketQueue`], a min-priority queue that breaks ties in insertion
//! order.

mod distance;
mod frontier;
mod queue;
mod search;

pub use distance::manhattan;
pub use frontier::Strategy;
pub use queue::BucketQueue;
pub use search::{astar_path, bfs_path, dfs_path, find_path, greedy_path};
