//! Maze configuration.
//!
//! [`MazeConfig`] holds every parameter that shapes a generated maze.

use crate::error::ConfigurationError;

/// Smallest supported side length.
pub const MIN_SIZE: usize = 10;
/// Largest supported side length.
pub const MAX_SIZE: usize = 1000;
/// Fewest exits a maze may have (one real, at least one decoy).
pub const MIN_EXITS: usize = 2;
/// Most exits a maze may have, before the boundary-cell limit applies.
pub const MAX_EXITS: usize = 100;

/// Configuration for maze generation.
///
/// # Defaults
///
/// ```
/// use maze_escape::maze::MazeConfig;
///
/// let config = MazeConfig::default();
/// assert_eq!(config.size, 10);
/// assert_eq!(config.exit_count, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use maze_escape::maze::MazeConfig;
///
/// let config = MazeConfig::default()
///     .with_size(40)
///     .with_wall_density(0.3)
///     .with_exit_count(6)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    /// Side length N of the N×N grid, within [10, 1000].
    pub size: usize,

    /// Probability that any non-start cell is generated as a wall.
    pub wall_density: f64,

    /// Number of exits requested, within [2, 100] and at most `2·size − 1`.
    pub exit_count: usize,

    /// Probability that a wall tries to relocate on each
    /// [`shift_walls`](super::Maze::shift_walls) call.
    pub wall_shift_probability: f64,

    /// Random seed for reproducible layouts.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: 10,
            wall_density: 0.2,
            exit_count: 3,
            wall_shift_probability: 0.1,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the wall density. Out-of-range values are reported by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_wall_density(mut self, density: f64) -> Self {
        self.wall_density = density;
        self
    }

    pub fn with_exit_count(mut self, count: usize) -> Self {
        self.exit_count = count;
        self
    }

    pub fn with_wall_shift_probability(mut self, probability: f64) -> Self {
        self.wall_shift_probability = probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 10×10, density 0.2, 3 exits, shift probability 0.1.
    pub fn small() -> Self {
        Self::default()
    }

    /// 30×30, density 0.25, 5 exits, shift probability 0.1.
    pub fn medium() -> Self {
        Self {
            size: 30,
            wall_density: 0.25,
            exit_count: 5,
            wall_shift_probability: 0.1,
            seed: None,
        }
    }

    /// 50×50, density 0.3, 8 exits, shift probability 0.05.
    pub fn large() -> Self {
        Self {
            size: 50,
            wall_density: 0.3,
            exit_count: 8,
            wall_shift_probability: 0.05,
            seed: None,
        }
    }

    /// Picks a preset by maze size and overrides its size.
    ///
    /// - `size < 30` → [`small()`](Self::small)
    /// - `30 ≤ size < 50` → [`medium()`](Self::medium)
    /// - `size ≥ 50` → [`large()`](Self::large)
    pub fn auto_select(size: usize) -> Self {
        let preset = if size < 30 {
            Self::small()
        } else if size < 50 {
            Self::medium()
        } else {
            Self::large()
        };
        preset.with_size(size)
    }

    /// Number of boundary cells eligible to hold an exit.
    pub fn exit_capacity(&self) -> usize {
        (2 * self.size).saturating_sub(1)
    }

    /// Validates the configuration, reporting the first violated bound.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigurationError::SizeOutOfRange(self.size));
        }
        if !(MIN_EXITS..=MAX_EXITS).contains(&self.exit_count) {
            return Err(ConfigurationError::ExitCountOutOfRange(self.exit_count));
        }
        if self.exit_count > self.exit_capacity() {
            return Err(ConfigurationError::TooManyExits {
                exit_count: self.exit_count,
                max: self.exit_capacity(),
            });
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(ConfigurationError::WallDensityOutOfRange(self.wall_density));
        }
        if !(0.0..=1.0).contains(&self.wall_shift_probability) {
            return Err(ConfigurationError::WallShiftProbabilityOutOfRange(
                self.wall_shift_probability,
            ));
        }
        Ok(())
    }
}
