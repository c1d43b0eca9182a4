//! The [`Grid`] type — a rectangular field of [`Cell`]s.
//!
//! A `Grid` is fixed at construction: the searches only ever read it, and
//! the renderer overlays markers on a copy.

use std::error::Error;
use std::fmt;

use crate::cell::Cell;
use crate::coord::Coord;

/// Error returned by [`Grid::from_rows`] when the input rows do not form a
/// rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows, or rows of zero width.
    Empty,
    /// A row whose length differs from the first row's.
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "grid has no cells"),
            ShapeError::RaggedRow { row, len, expected } => {
                write!(f, "row {row} has length {len}, expected {expected}")
            }
        }
    }
}

impl Error for ShapeError {}

/// A rectangular grid of [`Cell`]s, addressed by [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell passable.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            cells: vec![Cell::default(); (w * h) as usize],
        }
    }

    /// Build a grid from integer row literals (zero passable, nonzero
    /// blocked). Every row must have the same, nonzero length.
    pub fn from_rows(rows: &[&[i32]]) -> Result<Self, ShapeError> {
        let Some(first) = rows.first() else {
            return Err(ShapeError::Empty);
        };
        let width = first.len();
        if width == 0 {
            return Err(ShapeError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ShapeError::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
            cells.extend(row.iter().map(|&v| Cell::from(v)));
        }
        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            cells,
        })
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.height && c.col >= 0 && c.col < self.width
    }

    /// Whether `c` is inside the grid and its cell is passable.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.index(c)
            .is_some_and(|i| self.cells[i].is_passable())
    }

    /// Read the cell at `c`. Returns `None` if `c` is outside bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Cell> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Set the cell at `c`. No-op if `c` is outside bounds.
    pub fn set(&mut self, c: Coord, cell: Cell) {
        if let Some(i) = self.index(c) {
            self.cells[i] = cell;
        }
    }

    /// Row-major iterator over the grid's rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.in_bounds(c) {
            Some((c.row * self.width + c.col) as usize)
        } else {
            None
        }
    }
}
