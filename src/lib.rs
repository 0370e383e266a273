//! Escaping a grid maze with decoy exits and shifting walls.
//!
//! Two independent strategies search the same maze:
//!
//! - **A\* ([`astar`])**: Informed best-first search with a Manhattan
//!   heuristic. Always finds a shortest path to the real exit if one exists.
//! - **Genetic Algorithm ([`ga`])**: Evolves fixed-length move sequences
//!   with roulette selection, single-point crossover and per-gene mutation.
//!   May settle on a decoy, or on nothing at all.
//!
//! Both borrow a [`Maze`](maze::Maze) read-only and return a
//! [`SearchOutcome`]. Wall shifting happens between runs, never during one.
//!
//! # Example
//!
//! ```
//! use maze_escape::{astar::HeuristicSearch, ga::{EvolutionarySearch, GeneticConfig}};
//! use maze_escape::{maze::Maze, MazeSolver};
//!
//! let mut maze = Maze::new(20, 0.2, 4, 0.1, Some(7)).unwrap();
//!
//! let astar = HeuristicSearch::new(&maze).solve();
//! let ga = EvolutionarySearch::with_config(&maze, GeneticConfig::fast().with_seed(7))
//!     .unwrap()
//!     .solve();
//! assert!(astar.nodes_expanded().is_some());
//! assert!(ga.generations_run().is_some());
//!
//! maze.shift_walls();
//! ```

pub mod astar;
pub mod error;
pub mod ga;
pub mod maze;
mod outcome;
pub mod random;

pub use error::ConfigurationError;
pub use outcome::{MazeSolver, SearchOutcome, SearchStats};
