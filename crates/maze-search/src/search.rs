//! The shared traversal skeleton and the four search entry points.

use std::collections::HashSet;

use log::debug;
use maze_core::{Coord, Grid};

use crate::distance::manhattan;
use crate::frontier::{Frontier, FrontierEntry};
use crate::Strategy;

/// Compute a path from `from` to `to` over `grid` using `strategy`.
///
/// Returns the full path (including both endpoints) or `None` if the goal
/// is unreachable. Movement is orthogonal only; neighbours are explored in
/// east, south, west, north order, which is observable in the result of
/// [`Strategy::Dfs`] and in tie-breaking of the ranked strategies.
pub fn find_path(grid: &Grid, from: Coord, to: Coord, strategy: Strategy) -> Option<Vec<Coord>> {
    let mut frontier = Frontier::for_strategy(strategy);
    let mut visited: HashSet<Coord> = HashSet::new();
    let mut expanded = 0usize;

    visited.insert(from);
    frontier.push(
        FrontierEntry {
            pos: from,
            path: vec![from],
        },
        rank(strategy, from, to, 0),
    );

    while let Some(FrontierEntry { pos, path }) = frontier.pop() {
        if pos == to {
            debug!(
                "{}: path of {} steps, {} nodes expanded",
                strategy.label(),
                path.len() - 1,
                expanded
            );
            return Some(path);
        }
        expanded += 1;

        // Steps from the start to any neighbour of `pos`: the length of
        // the current path, taken before the extended path is built.
        let steps = path.len() as i32;

        for neighbor in pos.neighbors_4() {
            if !grid.is_passable(neighbor) || !visited.insert(neighbor) {
                continue;
            }
            let mut next_path = Vec::with_capacity(path.len() + 1);
            next_path.extend_from_slice(&path);
            next_path.push(neighbor);
            frontier.push(
                FrontierEntry {
                    pos: neighbor,
                    path: next_path,
                },
                rank(strategy, neighbor, to, steps),
            );
        }
    }

    debug!(
        "{}: no path, {} nodes expanded",
        strategy.label(),
        expanded
    );
    None
}

/// Priority of a frontier entry under the given strategy. The unranked
/// frontiers ignore it.
fn rank(strategy: Strategy, pos: Coord, goal: Coord, steps: i32) -> i32 {
    match strategy {
        Strategy::Bfs | Strategy::Dfs => 0,
        Strategy::Greedy => manhattan(pos, goal),
        Strategy::AStar => manhattan(pos, goal) + steps,
    }
}

/// Breadth-first search. Guarantees a shortest path (fewest steps).
pub fn bfs_path(grid: &Grid, from: Coord, to: Coord) -> Option<Vec<Coord>> {
    find_path(grid, from, to, Strategy::Bfs)
}

/// Depth-first search. The found path follows the fixed neighbour order
/// and is typically not the shortest.
pub fn dfs_path(grid: &Grid, from: Coord, to: Coord) -> Option<Vec<Coord>> {
    find_path(grid, from, to, Strategy::Dfs)
}

/// Greedy best-first search, ranked by Manhattan distance to the goal.
/// Fast in open terrain but can be misled by local heuristic minima.
pub fn greedy_path(grid: &Grid, from: Coord, to: Coord) -> Option<Vec<Coord>> {
    find_path(grid, from, to, Strategy::Greedy)
}

/// A* search, ranked by Manhattan distance to the goal plus the step count
/// of the frontier entry's own path.
pub fn astar_path(grid: &Grid, from: Coord, to: Coord) -> Option<Vec<Coord>> {
    find_path(grid, from, to, Strategy::AStar)
}
