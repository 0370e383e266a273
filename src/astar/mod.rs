//! A* shortest-path search to the real exit.
//!
//! [`HeuristicSearch`] borrows a [`Maze`](crate::maze::Maze) and finds a
//! minimum-length path from the start to the real exit, ignoring decoys.
//! It uses no randomness.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"

mod runner;

pub use runner::HeuristicSearch;
