//! A* execution.

use crate::maze::{Maze, Position};
use crate::outcome::{MazeSolver, SearchOutcome, SearchStats};
use log::{info, trace};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Mazes above this size emit periodic progress traces.
const TRACE_SIZE: usize = 30;
const TRACE_INTERVAL: usize = 1000;
const NO_PARENT: usize = usize::MAX;

/// Frontier entry: `(f, g, position)`, popped smallest-first.
///
/// Ties on `f` go to the smaller `g`, then to the smaller position.
type FrontierEntry = Reverse<(usize, usize, Position)>;

/// Shortest-path search from the start to the real exit.
///
/// Classic A* over the 4-connected free-cell graph with unit step costs and
/// the Manhattan distance to the real exit as heuristic. The heuristic is
/// consistent, so the first time the exit leaves the frontier its path is
/// optimal.
///
/// The search is deterministic: the same unmutated maze always yields the
/// same path and the same `nodes_expanded`.
///
/// # Examples
///
/// ```
/// use maze_escape::{astar::HeuristicSearch, maze::Maze};
///
/// let maze = Maze::new(10, 0.0, 2, 0.0, Some(1)).unwrap();
/// let outcome = HeuristicSearch::new(&maze).run();
/// assert!(outcome.succeeded);
/// assert_eq!(outcome.path_length, maze.real_exit().manhattan(maze.start()) + 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HeuristicSearch<'a> {
    maze: &'a Maze,
}

impl<'a> HeuristicSearch<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self { maze }
    }

    /// Admissible estimate of the remaining distance from `pos`.
    pub fn heuristic(&self, pos: Position) -> usize {
        pos.manhattan(self.maze.real_exit())
    }

    /// Runs the search.
    ///
    /// Returns `succeeded = false` with an empty path when the real exit is
    /// unreachable. `nodes_expanded` is reported either way.
    pub fn run(&self) -> SearchOutcome {
        let started = Instant::now();
        let maze = self.maze;
        let size = maze.size();
        let start = maze.start();
        let goal = maze.real_exit();
        let index = |p: Position| p.row * size + p.col;

        let cells = size * size;
        let mut best_g = vec![usize::MAX; cells];
        let mut parent = vec![NO_PARENT; cells];
        let mut closed = vec![false; cells];
        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut nodes_expanded = 0usize;

        best_g[index(start)] = 0;
        frontier.push(Reverse((self.heuristic(start), 0, start)));

        let mut path = Vec::new();
        while let Some(Reverse((_, g, current))) = frontier.pop() {
            nodes_expanded += 1;
            if size > TRACE_SIZE && nodes_expanded % TRACE_INTERVAL == 0 {
                trace!(
                    "A*: {} nodes expanded, frontier holds {}",
                    nodes_expanded,
                    frontier.len()
                );
            }

            let ci = index(current);
            if closed[ci] {
                continue;
            }
            closed[ci] = true;

            if current == goal {
                path = reconstruct(&parent, ci, size);
                break;
            }

            for next in maze.neighbors(current) {
                let ni = index(next);
                if closed[ni] {
                    continue;
                }
                let next_g = g + 1;
                if next_g < best_g[ni] {
                    best_g[ni] = next_g;
                    parent[ni] = ci;
                    frontier.push(Reverse((next_g + self.heuristic(next), next_g, next)));
                }
            }
        }

        let succeeded = !path.is_empty();
        let elapsed = started.elapsed();
        info!(
            "A* on {}x{} maze finished in {:?}: success={}, {} nodes expanded",
            size, size, elapsed, succeeded, nodes_expanded
        );

        SearchOutcome::new(
            succeeded,
            path,
            elapsed,
            SearchStats::Heuristic { nodes_expanded },
        )
    }
}

impl MazeSolver for HeuristicSearch<'_> {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn solve(&self) -> SearchOutcome {
        self.run()
    }
}

/// Walks parent links back from `goal` and returns the path start-first.
fn reconstruct(parent: &[usize], goal: usize, size: usize) -> Vec<Position> {
    let mut path = Vec::new();
    let mut at = goal;
    loop {
        path.push(Position::new(at / size, at % size));
        match parent[at] {
            NO_PARENT => break,
            prev => at = prev,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: &str = "\
        0 / / / / / / / / /
        / / / / / / / / / /
        / / / / / / / / / /
        / / / / / / / / / /
        / / / / / / / / / /
        / / / / / / / / / /
        / / / / / / / / / /
        / / / / / / / / / /
        / / / / / / / / / /
        ? / / / / / / / / &";

    fn assert_contiguous(maze: &Maze, path: &[Position]) {
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1, "gap between {} and {}", pair[0], pair[1]);
            assert!(maze.is_free(pair[1]));
        }
    }

    #[test]
    fn test_open_grid_corner_to_corner() {
        let maze = Maze::from_ascii(OPEN).unwrap();
        let outcome = HeuristicSearch::new(&maze).run();

        assert!(outcome.succeeded);
        assert_eq!(outcome.path_length, 19);
        assert_eq!(outcome.path.first(), Some(&Position::new(0, 0)));
        assert_eq!(outcome.path.last(), Some(&Position::new(9, 9)));
        assert_contiguous(&maze, &outcome.path);
        assert!(outcome.nodes_expanded().unwrap() >= 19);
    }

    #[test]
    fn test_tie_break_prefers_low_positions() {
        // Every cell on an open grid has f = 18, so cells pop layer by layer in
        // (row, col) order and each one is first reached from its north
        // neighbour: east along row 0, then south down the last column.
        let maze = Maze::from_ascii(OPEN).unwrap();
        let outcome = HeuristicSearch::new(&maze).run();
        assert_eq!(outcome.path[1], Position::new(0, 1));
        assert_eq!(outcome.path[9], Position::new(0, 9));
        assert_eq!(outcome.path[10], Position::new(1, 9));
    }

    #[test]
    fn test_deterministic() {
        let maze = Maze::new(40, 0.25, 5, 0.1, Some(8)).unwrap();
        let a = HeuristicSearch::new(&maze).run();
        let b = HeuristicSearch::new(&maze).run();
        assert_eq!(a.path, b.path);
        assert_eq!(a.succeeded, b.succeeded);
        assert_eq!(a.nodes_expanded(), b.nodes_expanded());
    }

    #[test]
    fn test_detour_around_wall() {
        let maze = Maze::from_ascii(
            "\
            0 / / / / / / / / /
            # # # # # # # # # /
            / / / / / / / / / /
            / # # # # # # # # #
            / / / / / / / / / /
            # # # # # # # # # /
            / / / / / / / / / /
            / # # # # # # # # #
            / / / / / / / / / /
            ? # # # # # # # # &",
        )
        .unwrap();
        let outcome = HeuristicSearch::new(&maze).run();
        assert!(outcome.succeeded);
        assert_contiguous(&maze, &outcome.path);
        // 9 east + 2 down + 9 west + 2 down + 9 east + 2 down + 9 west + 2 down + 9 east + 1 down
        assert_eq!(outcome.steps(), 9 * 5 + 2 * 4 + 1);
    }

    #[test]
    fn test_enclosed_start() {
        let maze = Maze::from_ascii(
            "\
            0 # / / / / / / / /
            # / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            ? / / / / / / / / &",
        )
        .unwrap();
        let outcome = HeuristicSearch::new(&maze).run();
        assert!(!outcome.succeeded);
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.path_length, 0);
        assert_eq!(outcome.nodes_expanded(), Some(1));
    }

    #[test]
    fn test_walled_off_exit() {
        let maze = Maze::from_ascii(
            "\
            0 / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / /
            / / / / / / / / / #
            ? / / / / / / / # &",
        )
        .unwrap();
        let outcome = HeuristicSearch::new(&maze).run();
        assert!(!outcome.succeeded);
        assert!(outcome.path.is_empty());
        // every reachable free cell is closed before giving up
        assert!(outcome.nodes_expanded().unwrap() >= 97);
    }

    #[test]
    fn test_solver_trait() {
        let maze = Maze::from_ascii(OPEN).unwrap();
        let solver: &dyn MazeSolver = &HeuristicSearch::new(&maze);
        assert_eq!(solver.name(), "A*");
        assert!(solver.solve().succeeded);
    }
}
