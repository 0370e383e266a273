//! The maze: an N×N grid with decoy exits and occasionally shifting walls.
//!
//! # Key Types
//!
//! - [`Maze`]: Grid state, exits, adjacency queries and wall shifting
//! - [`MazeConfig`]: Generation parameters with presets
//! - [`Position`], [`Move`], [`Cell`]: Coordinates, steps and rendered cell states
//!
//! The start is fixed at `(0, 0)`. Exits are sampled from the bottom row and
//! right column; exactly one of them is real, the rest are decoys.

mod config;
mod grid;
mod types;

pub use config::{MazeConfig, MAX_EXITS, MAX_SIZE, MIN_EXITS, MIN_SIZE};
pub use grid::Maze;
pub use types::{Cell, Move, Position};
