//! Genetic operators for move-sequence chromosomes.
//!
//! Both operators work on `&[Move]` gene vectors and keep the chromosome
//! length fixed.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: Holland (1975) — one random cut, swap tails
//!
//! # Mutation Operators
//!
//! - [`uniform_reset_mutation`]: Each gene independently reset to a random
//!   move — O(n)

use super::types::random_move;
use crate::maze::Move;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Picks a cut point uniformly in `[1, n − 1]` and returns the two
/// complementary splices `p1[..cut] + p2[cut..]` and `p2[..cut] + p1[cut..]`.
/// Parents shorter than 2 genes have no valid cut; copies are returned.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng + ?Sized>(
    parent1: &[Move],
    parent2: &[Move],
    rng: &mut R,
) -> (Vec<Move>, Vec<Move>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    (splice(parent1, parent2, cut), splice(parent2, parent1, cut))
}

/// `head[..cut]` followed by `tail[cut..]`.
fn splice(head: &[Move], tail: &[Move], cut: usize) -> Vec<Move> {
    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(&head[..cut]);
    child.extend_from_slice(&tail[cut..]);
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Uniform reset mutation: each gene is replaced by a uniformly random move
/// with probability `rate`.
///
/// The replacement may equal the original move.
pub fn uniform_reset_mutation<R: Rng + ?Sized>(genes: &mut [Move], rate: f64, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            *gene = random_move(rng);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
