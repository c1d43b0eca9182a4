//! Console rendering of search results.
//!
//! The renderer never mutates the grid: markers are overlaid on a copy of
//! the cell values.

use std::io::{self, Write};

use crate::coord::Coord;
use crate::grid::Grid;

/// Marker value for a path cell in rendered output.
const PATH_MARK: i32 = 2;

/// Render `path` overlaid on `grid` as an owned string.
///
/// An empty path means the search failed and renders as `No path found`.
/// Otherwise each row is emitted as space-separated integers: `0` passable,
/// `1` blocked, `2` a cell on the path.
pub fn render_to_string(grid: &Grid, path: &[Coord]) -> String {
    if path.is_empty() {
        return "No path found\n".to_owned();
    }

    let mut rows: Vec<Vec<i32>> = grid
        .rows()
        .map(|row| row.iter().map(|&c| i32::from(c)).collect())
        .collect();
    for &c in path {
        if grid.in_bounds(c) {
            rows[c.row as usize][c.col as usize] = PATH_MARK;
        }
    }

    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write the rendered form of `path` over `grid` to an output sink.
pub fn write_path<W: Write>(out: &mut W, grid: &Grid, path: &[Coord]) -> io::Result<()> {
    out.write_all(render_to_string(grid, path).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_renders_as_no_path() {
        let g = Grid::new(3, 3);
        assert_eq!(render_to_string(&g, &[]), "No path found\n");
    }

    #[test]
    fn path_cells_render_as_two() {
        let g = Grid::from_rows(&[&[0, 1], &[0, 0]]).unwrap();
        let path = [Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)];
        assert_eq!(render_to_string(&g, &path), "2 1\n2 2\n");
    }

    #[test]
    fn rendering_does_not_mutate_the_grid() {
        let g = Grid::from_rows(&[&[0, 0]]).unwrap();
        let before = g.clone();
        let _ = render_to_string(&g, &[Coord::new(0, 0), Coord::new(0, 1)]);
        assert_eq!(g, before);
    }

    #[test]
    fn write_path_to_sink() {
        let g = Grid::from_rows(&[&[0]]).unwrap();
        let mut buf = Vec::new();
        write_path(&mut buf, &g, &[Coord::new(0, 0)]).unwrap();
        assert_eq!(buf, b"2\n");
    }
}
