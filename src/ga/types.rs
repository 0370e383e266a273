//! Chromosome representation.

use crate::maze::Move;
use rand::Rng;

/// One candidate solution: a fixed-length sequence of moves and its fitness.
///
/// Fitness is maximised. A freshly built chromosome carries fitness `0.0`
/// until it is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    pub genes: Vec<Move>,
    pub fitness: f64,
}

impl Chromosome {
    /// Wraps `genes` as an unevaluated chromosome.
    pub fn new(genes: Vec<Move>) -> Self {
        Self {
            genes,
            fitness: 0.0,
        }
    }

    /// A chromosome of `length` uniformly random moves.
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        Self::new((0..length).map(|_| random_move(rng)).collect())
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// A uniformly random move.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    Move::from_gene(rng.random_range(0..4u8))
}
