//! GA evolutionary loop execution.
//!
//! [`EvolutionarySearch`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover → mutation → repeat.

use super::config::GeneticConfig;
use super::fitness::{self, is_success};
use super::operators::{single_point_crossover, uniform_reset_mutation};
use super::selection::roulette;
use super::types::Chromosome;
use crate::error::ConfigurationError;
use crate::maze::{Maze, Move};
use crate::outcome::{MazeSolver, SearchOutcome, SearchStats};
use crate::random::rng_from_option;
use log::{debug, info};
use rand::Rng;
use std::time::Instant;

/// Progress is logged every this many generations.
const LOG_INTERVAL: usize = 10;

/// Evolves fixed-length move sequences toward an exit.
///
/// The search is stochastic and may fail even when a path exists. It borrows
/// the maze and never mutates it.
///
/// # Usage
///
/// ```
/// use maze_escape::{ga::{EvolutionarySearch, GeneticConfig}, maze::Maze};
///
/// let maze = Maze::new(10, 0.1, 3, 0.0, Some(5)).unwrap();
/// let config = GeneticConfig::fast().with_seed(42);
/// let search = EvolutionarySearch::with_config(&maze, config).unwrap();
/// let outcome = search.run();
/// assert_eq!(outcome.path.first(), Some(&maze.start()));
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionarySearch<'a> {
    maze: &'a Maze,
    config: GeneticConfig,
}

impl<'a> EvolutionarySearch<'a> {
    /// Creates a search with explicit parameters and no fixed seed.
    ///
    /// For mazes larger than 50, chromosome length and population size are
    /// raised as described in [`GeneticConfig::scaled_for`].
    pub fn new(
        maze: &'a Maze,
        population_size: usize,
        chromosome_length: usize,
        mutation_probability: f64,
        crossover_probability: f64,
        max_generations: usize,
    ) -> Result<Self, ConfigurationError> {
        let config = GeneticConfig {
            population_size,
            chromosome_length,
            mutation_probability,
            crossover_probability,
            max_generations,
            seed: None,
        };
        Self::with_config(maze, config)
    }

    /// Creates a search from a [`GeneticConfig`], validating it first.
    pub fn with_config(maze: &'a Maze, config: GeneticConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            maze,
            config: config.scaled_for(maze.size()),
        })
    }

    /// The effective configuration, after size scaling.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Scores a chromosome against this search's maze.
    pub fn calculate_fitness(&self, genes: &[Move]) -> f64 {
        fitness::evaluate(self.maze, genes)
    }

    /// Runs the GA with a generator built from the configured seed.
    pub fn run(&self) -> SearchOutcome {
        let mut rng = rng_from_option(self.config.seed);
        self.run_with_rng(&mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// Up to `max_generations` populations are evaluated, the random initial
    /// one first. After each evaluation the historical best is updated and
    /// the run stops as soon as it has reached the real exit; otherwise the
    /// next population is bred from the current one, seeded with the
    /// historical best. With `max_generations == 0` the initial population is
    /// scored once and 0 generations are reported.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> SearchOutcome {
        let started = Instant::now();
        let config = &self.config;
        let size = self.maze.size();

        debug!(
            "GA on {}x{} maze: population {}, chromosome {}, generations {}",
            size, size, config.population_size, config.chromosome_length, config.max_generations
        );

        // 1. Initialize and evaluate generation 0
        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(config.chromosome_length, rng))
            .collect();
        self.evaluate_population(&mut population);

        // 2. Track historical best
        let mut best = find_best(&population).clone();
        let mut best_generation = 0usize;
        let mut fitness_history = Vec::with_capacity(config.max_generations.max(1));
        fitness_history.push(best.fitness);
        let mut generations_run = config.max_generations.min(1);
        self.log_progress(0, &population, &best);

        // 3. Evolutionary loop: breed, then evaluate, until the budget or the exit
        while generations_run < config.max_generations && !is_success(best.fitness) {
            population = self.breed(&population, &best, rng);
            // slot 0 is the elite, already scored
            self.evaluate_population(&mut population[1..]);
            let generation = generations_run;
            generations_run += 1;

            let gen_best = find_best(&population);
            if gen_best.fitness > best.fitness {
                best = gen_best.clone();
                best_generation = generation;
            }
            fitness_history.push(best.fitness);
            self.log_progress(generation, &population, &best);
        }

        let succeeded = is_success(best.fitness);
        let path = fitness::replay_path(self.maze, &best.genes);
        let elapsed = started.elapsed();

        if succeeded {
            info!("GA reached the real exit by generation {best_generation}");
        }
        info!(
            "GA finished in {:?} after {} generations: best fitness {:.1} (generation {})",
            elapsed, generations_run, best.fitness, best_generation
        );

        SearchOutcome::new(
            succeeded,
            path,
            elapsed,
            SearchStats::Evolutionary {
                final_fitness: best.fitness,
                generations_run,
                fitness_history,
            },
        )
    }

    /// Builds the next generation.
    ///
    /// Slot 0 holds a copy of the historical best. The rest are filled with
    /// pairs of children from roulette-selected parents; the last pair is
    /// truncated if it overflows.
    fn breed<R: Rng + ?Sized>(
        &self,
        population: &[Chromosome],
        best: &Chromosome,
        rng: &mut R,
    ) -> Vec<Chromosome> {
        let config = &self.config;
        let fitnesses: Vec<f64> = population.iter().map(|c| c.fitness).collect();

        let mut next_gen = Vec::with_capacity(config.population_size + 1);
        next_gen.push(best.clone());

        while next_gen.len() < config.population_size {
            let p1 = &population[roulette(&fitnesses, rng)].genes;
            let p2 = &population[roulette(&fitnesses, rng)].genes;

            let (mut c1, mut c2) = if rng.random_range(0.0..1.0) < config.crossover_probability {
                single_point_crossover(p1, p2, rng)
            } else {
                (p1.clone(), p2.clone())
            };

            uniform_reset_mutation(&mut c1, config.mutation_probability, rng);
            uniform_reset_mutation(&mut c2, config.mutation_probability, rng);

            next_gen.push(Chromosome::new(c1));
            next_gen.push(Chromosome::new(c2));
        }

        next_gen.truncate(config.population_size);
        next_gen
    }

    fn log_progress(&self, generation: usize, population: &[Chromosome], best: &Chromosome) {
        if generation % LOG_INTERVAL == 0 {
            let average =
                population.iter().map(|c| c.fitness).sum::<f64>() / population.len() as f64;
            debug!(
                "generation {}: best fitness {:.1}, average {:.1}",
                generation, best.fitness, average
            );
        }
    }

    fn evaluate_population(&self, population: &mut [Chromosome]) {
        for c in population.iter_mut() {
            c.fitness = fitness::evaluate(self.maze, &c.genes);
        }
    }
}

impl MazeSolver for EvolutionarySearch<'_> {
    fn name(&self) -> &'static str {
        "Genetic Algorithm"
    }

    fn solve(&self) -> SearchOutcome {
        self.run()
    }
}

/// The first chromosome with the highest fitness.
fn find_best(population: &[Chromosome]) -> &Chromosome {
    let mut best = &population[0];
    for c in &population[1..] {
        if c.fitness > best.fitness {
            best = c;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
