//! GA configuration.
//!
//! [`GeneticConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigurationError;

/// Mazes larger than this get longer chromosomes and bigger populations.
pub const SCALE_THRESHOLD: usize = 50;

/// Minimum population once a maze exceeds [`SCALE_THRESHOLD`].
pub const SCALED_POPULATION: usize = 200;

/// Configuration for the maze-escape genetic algorithm.
///
/// # Defaults
///
/// ```
/// use maze_escape::ga::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.chromosome_length, 50);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use maze_escape::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(150)
///     .with_chromosome_length(120)
///     .with_mutation_probability(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Number of chromosomes per generation.
    pub population_size: usize,

    /// Number of moves in every chromosome.
    pub chromosome_length: usize,

    /// Per-gene probability of being replaced by a random move (0.0–1.0).
    pub mutation_probability: f64,

    /// Probability of single-point crossover for a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, the children are copies of the parents.
    pub crossover_probability: f64,

    /// Generations evaluated, counting the initial population as the first.
    ///
    /// With 0 the initial population is still scored once so the run has a
    /// best chromosome to report.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed on every run.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            chromosome_length: 50,
            mutation_probability: 0.1,
            crossover_probability: 0.8,
            max_generations: 100,
            seed: None,
        }
    }
}

impl GeneticConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the per-gene mutation probability.
    ///
    /// Not clamped: out-of-range values are rejected by
    /// [`validate`](Self::validate).
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the crossover probability. Not clamped.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for small mazes (≈10×10).
    ///
    /// - Population: 50, Chromosome: 30, Generations: 50
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            chromosome_length: 30,
            max_generations: 50,
            ..Self::default()
        }
    }

    /// Preset for medium mazes (≈30×30).
    ///
    /// - Population: 100, Chromosome: 80, Generations: 100
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            chromosome_length: 80,
            max_generations: 100,
            ..Self::default()
        }
    }

    /// Preset for larger mazes (≈50×50).
    ///
    /// - Population: 150, Chromosome: 120, Generations: 150
    pub fn quality() -> Self {
        Self {
            population_size: 150,
            chromosome_length: 120,
            max_generations: 150,
            ..Self::default()
        }
    }

    /// Scales the search space to the maze.
    ///
    /// For `maze_size > 50`, the chromosome grows to at least `3·maze_size`
    /// moves and the population to at least 200. Smaller mazes are left as is.
    pub fn scaled_for(mut self, maze_size: usize) -> Self {
        if maze_size > SCALE_THRESHOLD {
            self.chromosome_length = self.chromosome_length.max(3 * maze_size);
            self.population_size = self.population_size.max(SCALED_POPULATION);
        }
        self
    }

    /// Validates the configuration, reporting the first violated bound.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.population_size == 0 {
            return Err(ConfigurationError::EmptyPopulation);
        }
        if self.chromosome_length == 0 {
            return Err(ConfigurationError::EmptyChromosome);
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigurationError::MutationProbabilityOutOfRange(
                self.mutation_probability,
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(ConfigurationError::CrossoverProbabilityOutOfRange(
                self.crossover_probability,
            ));
        }
        Ok(())
    }
}
