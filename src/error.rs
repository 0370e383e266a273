//! Configuration errors.
//!
//! Every constructor in this crate validates its parameters up front and
//! reports the first violated constraint. A search that merely fails to find
//! an exit is not an error; see [`SearchOutcome`](crate::SearchOutcome).

use crate::maze::Position;

/// A parameter violated a documented bound.
///
/// These are caller bugs: fix the input and construct again.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("maze size must be between 10 and 1000, got {0}")]
    SizeOutOfRange(usize),

    #[error("exit count must be between 2 and 100, got {0}")]
    ExitCountOutOfRange(usize),

    #[error("exit count {exit_count} exceeds the {max} boundary cells available")]
    TooManyExits { exit_count: usize, max: usize },

    #[error("wall density must be within [0, 1], got {0}")]
    WallDensityOutOfRange(f64),

    #[error("wall shift probability must be within [0, 1], got {0}")]
    WallShiftProbabilityOutOfRange(f64),

    #[error("population size must be at least 1")]
    EmptyPopulation,

    #[error("chromosome length must be at least 1")]
    EmptyChromosome,

    #[error("mutation probability must be within [0, 1], got {0}")]
    MutationProbabilityOutOfRange(f64),

    #[error("crossover probability must be within [0, 1], got {0}")]
    CrossoverProbabilityOutOfRange(f64),

    #[error("maze layout row {row} has {found} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown maze glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },

    #[error("maze layout has no real exit")]
    MissingRealExit,

    #[error("maze layout has more than one real exit")]
    MultipleRealExits,

    #[error("start cell (0, 0) must be free")]
    BlockedStart,

    #[error("start glyph at {0}; the start is always (0, 0)")]
    MisplacedStart(Position),

    #[error("exit {0} is not on the bottom row or right column")]
    ExitOffBoundary(Position),
}
