//! The [`Cell`] type — the state of one maze cell.

/// State of a single maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// A path may travel through this cell.
    #[default]
    Passable,
    /// A wall; no path may enter.
    Blocked,
}

impl Cell {
    /// Whether a path may travel through this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Cell::Passable)
    }
}

impl From<i32> for Cell {
    /// Zero is passable; any other value is blocked.
    #[inline]
    fn from(v: i32) -> Self {
        if v == 0 { Cell::Passable } else { Cell::Blocked }
    }
}

impl From<Cell> for i32 {
    #[inline]
    fn from(c: Cell) -> Self {
        match c {
            Cell::Passable => 0,
            Cell::Blocked => 1,
        }
    }
}
