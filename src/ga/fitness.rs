//! Fitness shaping for move-sequence chromosomes.
//!
//! A chromosome is scored by replaying it from the start. Moves into walls or
//! off the grid are skipped and penalised. Reaching the real exit scores at
//! least [`REAL_EXIT_REWARD`]; reaching a decoy scores in
//! `[DECOY_EXIT_REWARD, REAL_EXIT_REWARD)`. Otherwise the score blends
//! closest approach, net valid steps and exploration, floored at
//! [`MIN_FITNESS`] so roulette weights stay positive.

use crate::maze::{Maze, Move, Position};
use std::collections::HashSet;

/// Base score for reaching the real exit. Any score at or above this marks
/// success.
pub const REAL_EXIT_REWARD: f64 = 10_000.0;

/// Base score for reaching a decoy exit.
pub const DECOY_EXIT_REWARD: f64 = 5_000.0;

/// Deducted from the valid-step count for every blocked move.
pub const INVALID_MOVE_PENALTY: f64 = 0.5;

/// Weight of `chromosome_length − closest_distance` in the fallback score.
pub const DISTANCE_WEIGHT: f64 = 5.0;

/// Weight of the number of distinct cells visited in the fallback score.
pub const EXPLORATION_WEIGHT: f64 = 2.0;

/// Lowest score any chromosome can receive.
pub const MIN_FITNESS: f64 = 1.0;

/// Scores `genes` on `maze`.
///
/// The walk stops at the first exit reached. Exit scores add the unused
/// budget `len − valid_steps`, which rewards shorter solutions. The decoy
/// score is capped just below [`REAL_EXIT_REWARD`] so that very long
/// chromosomes cannot pass a decoy off as success.
///
/// Closest approach is measured over the cells the walk moves into, not the
/// start, so a chromosome whose every move is blocked scores [`MIN_FITNESS`].
pub fn evaluate(maze: &Maze, genes: &[Move]) -> f64 {
    let length = genes.len() as f64;
    let goal = maze.real_exit();

    let mut position = maze.start();
    let mut valid_steps = 0.0;
    let mut closest: Option<usize> = None;
    let mut visited: HashSet<Position> = HashSet::from([position]);

    for &mv in genes {
        let Some(next) = maze.step(position, mv) else {
            valid_steps -= INVALID_MOVE_PENALTY;
            continue;
        };
        position = next;
        valid_steps += 1.0;
        visited.insert(position);
        let distance = position.manhattan(goal);
        closest = Some(closest.map_or(distance, |c| c.min(distance)));

        if maze.is_real_exit(position) {
            return REAL_EXIT_REWARD + (length - valid_steps);
        }
        if maze.is_any_exit(position) {
            let reward = DECOY_EXIT_REWARD + (length - valid_steps);
            return reward.min(REAL_EXIT_REWARD - 1.0);
        }
    }

    let Some(closest) = closest else {
        return MIN_FITNESS;
    };
    let fitness = DISTANCE_WEIGHT * (length - closest as f64)
        + valid_steps
        + EXPLORATION_WEIGHT * visited.len() as f64;
    fitness.max(MIN_FITNESS)
}

/// Replays `genes` from the start and returns every cell entered.
///
/// Blocked moves are skipped, as in [`evaluate`]. The walk stops on the real
/// exit; decoys do not stop it. The start is always the first cell.
pub fn replay_path(maze: &Maze, genes: &[Move]) -> Vec<Position> {
    let mut position = maze.start();
    let mut path = vec![position];
    for &mv in genes {
        if let Some(next) = maze.step(position, mv) {
            position = next;
            path.push(position);
            if maze.is_real_exit(position) {
                break;
            }
        }
    }
    path
}

/// Whether a fitness value records a visit to the real exit.
pub fn is_success(fitness: f64) -> bool {
    fitness >= REAL_EXIT_REWARD
}
