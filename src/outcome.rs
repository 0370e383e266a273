//! The result record shared by both search engines.

use crate::maze::Position;
use std::time::Duration;

/// Engine-specific statistics attached to a [`SearchOutcome`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStats {
    /// A* statistics.
    Heuristic {
        /// Frontier extractions, including discarded re-extractions of
        /// already-closed cells.
        nodes_expanded: usize,
    },

    /// Genetic algorithm statistics.
    Evolutionary {
        /// Best fitness seen across the whole run.
        final_fitness: f64,

        /// Generations evaluated, the initial population being the first.
        /// Zero only when the run was configured with no generations.
        generations_run: usize,

        /// Historical-best fitness after each evaluated generation.
        /// Non-decreasing.
        fitness_history: Vec<f64>,
    },
}

/// The outcome of one search run.
///
/// Both engines return this record; reporting layers only read its fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// A*: the real exit was reached. GA: some individual ever reached it.
    pub succeeded: bool,

    /// Cells visited from the start to the terminal cell, inclusive.
    pub path: Vec<Position>,

    /// Number of cells in `path`.
    pub path_length: usize,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    pub stats: SearchStats,
}

impl SearchOutcome {
    pub(crate) fn new(
        succeeded: bool,
        path: Vec<Position>,
        elapsed: Duration,
        stats: SearchStats,
    ) -> Self {
        Self {
            succeeded,
            path_length: path.len(),
            path,
            elapsed,
            stats,
        }
    }

    /// Number of moves taken, i.e. `path_length − 1` (0 for an empty path).
    pub fn steps(&self) -> usize {
        self.path_length.saturating_sub(1)
    }

    /// A* frontier extractions, `None` for GA outcomes.
    pub fn nodes_expanded(&self) -> Option<usize> {
        match self.stats {
            SearchStats::Heuristic { nodes_expanded } => Some(nodes_expanded),
            SearchStats::Evolutionary { .. } => None,
        }
    }

    /// GA best fitness, `None` for A* outcomes.
    pub fn final_fitness(&self) -> Option<f64> {
        match self.stats {
            SearchStats::Evolutionary { final_fitness, .. } => Some(final_fitness),
            SearchStats::Heuristic { .. } => None,
        }
    }

    /// GA generations executed, `None` for A* outcomes.
    pub fn generations_run(&self) -> Option<usize> {
        match self.stats {
            SearchStats::Evolutionary {
                generations_run, ..
            } => Some(generations_run),
            SearchStats::Heuristic { .. } => None,
        }
    }
}

/// A strategy that searches a maze and reports a [`SearchOutcome`].
///
/// Implemented by [`HeuristicSearch`](crate::astar::HeuristicSearch) and
/// [`EvolutionarySearch`](crate::ga::EvolutionarySearch). The two engines
/// share nothing but this capability.
pub trait MazeSolver {
    /// Short human-readable name of the strategy.
    fn name(&self) -> &'static str;

    /// Runs one complete search. Never mutates the maze.
    fn solve(&self) -> SearchOutcome;
}
