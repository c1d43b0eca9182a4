//! **maze-core** — Maze grid model and path rendering (core types).
//!
//! This crate provides the foundational types for the maze-search demos:
//! integer [`Coord`]inates, binary [`Cell`] states, the rectangular
//! [`Grid`], and console [`render`]ing of found paths.

pub mod cell;
pub mod coord;
pub mod grid;
pub mod render;

pub use cell::Cell;
pub use coord::Coord;
pub use grid::{Grid, ShapeError};
pub use render::{render_to_string, write_path};
