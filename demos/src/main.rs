//! Console demo: run the four search strategies over a fixed 5×5 maze.
//!
//! Run: cargo run --bin maze-demo

use std::io::{self, Write};

use maze_core::{Coord, Grid, write_path};
use maze_search::{astar_path, bfs_path, dfs_path, greedy_path};

/// The demo maze: 0 passable, 1 blocked.
const MAZE_ROWS: [&[i32]; 5] = [
    &[0, 1, 0, 0, 0],
    &[0, 1, 0, 1, 0],
    &[0, 0, 0, 1, 0],
    &[0, 1, 0, 1, 0],
    &[0, 0, 0, 0, 0],
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let maze = Grid::from_rows(&MAZE_ROWS)?;
    let start = Coord::new(0, 0);
    let goal = Coord::new(4, 4);

    let stdout = io::stdout();
    run(&mut stdout.lock(), &maze, start, goal)?;
    Ok(())
}

/// Run the four strategies in fixed order, printing a labeled section for
/// each result.
fn run<W: Write>(out: &mut W, maze: &Grid, start: Coord, goal: Coord) -> io::Result<()> {
    let sections: [(&str, fn(&Grid, Coord, Coord) -> Option<Vec<Coord>>); 4] = [
        ("BFS", bfs_path),
        ("DFS", dfs_path),
        ("Greedy Best-First Search", greedy_path),
        ("A* Search", astar_path),
    ];

    for (i, (label, search)) in sections.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{label}:")?;
        let path = search(maze, start, goal).unwrap_or_default();
        write_path(out, maze, &path)?;
    }
    Ok(())
}
