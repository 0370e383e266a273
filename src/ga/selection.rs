//! Fitness-proportionate parent selection.
//!
//! Fitness is maximised and, by construction of the maze fitness function,
//! never below 1, so raw fitness values serve directly as roulette weights.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use rand::Rng;

/// Roulette wheel selection over raw fitness values.
///
/// Draws a point uniformly in `[0, total]` and returns the first index whose
/// cumulative fitness meets or exceeds it. A zero total falls back to a
/// uniform pick.
///
/// # Complexity
/// O(n) per selection (linear scan)
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn roulette<R: Rng + ?Sized>(fitnesses: &[f64], rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "cannot select from empty population");

    let n = fitnesses.len();
    let total: f64 = fitnesses.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..n);
    }

    let point = rng.random_range(0.0..=total);
    let mut cumulative = 0.0;
    for (i, &f) in fitnesses.iter().enumerate() {
        cumulative += f;
        if cumulative >= point {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
