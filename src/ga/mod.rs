//! Genetic algorithm over fixed-length move sequences.
//!
//! Each chromosome is a list of [`Move`](crate::maze::Move)s replayed from the
//! maze start. Fitness rewards reaching an exit (the real one most), getting
//! close to the real exit, and exploring, while penalising blocked moves.
//!
//! # Key Types
//!
//! - [`EvolutionarySearch`]: Executes the evolutionary loop on a borrowed maze
//! - [`GeneticConfig`]: Algorithm parameters, presets and size scaling
//! - [`Chromosome`]: Genes plus fitness
//!
//! # Submodules
//!
//! - [`fitness`]: Fitness shaping and path replay
//! - [`operators`]: Single-point crossover and uniform reset mutation
//! - [`selection`]: Roulette wheel selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{GeneticConfig, SCALED_POPULATION, SCALE_THRESHOLD};
pub use runner::EvolutionarySearch;
pub use types::{random_move, Chromosome};
